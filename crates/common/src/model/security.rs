//! Security schemes and requirements

use super::Map;
use strum::{AsRefStr, Display, EnumString};

/// Schemes that together authorize a request, with the scopes each needs
///
/// An empty requirement makes security optional for the operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecurityRequirement(pub Map<Vec<String>>);

impl SecurityRequirement {
    pub fn new(schemes: Map<Vec<String>>) -> Self {
        Self(schemes)
    }

    pub fn scopes(&self, scheme: &str) -> Option<&[String]> {
        self.0.get(scheme).map(Vec::as_slice)
    }

    pub fn scheme_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.keys().map(String::as_str)
    }

    pub fn is_anonymous(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum ApiKeyLocation {
    Query,
    Header,
    Cookie,
}

/// A security scheme, discriminated by its `type`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecurityScheme {
    ApiKey {
        name: String,
        location: ApiKeyLocation,
        description: Option<String>,
    },
    Http {
        scheme: String,
        bearer_format: Option<String>,
        description: Option<String>,
    },
    MutualTls {
        description: Option<String>,
    },
    OAuth2 {
        flows: OAuthFlows,
        description: Option<String>,
    },
    OpenIdConnect {
        open_id_connect_url: String,
        description: Option<String>,
    },
}

impl SecurityScheme {
    /// The `type` string this scheme was declared with
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::ApiKey { .. } => "apiKey",
            Self::Http { .. } => "http",
            Self::MutualTls { .. } => "mutualTLS",
            Self::OAuth2 { .. } => "oauth2",
            Self::OpenIdConnect { .. } => "openIdConnect",
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            Self::ApiKey { description, .. }
            | Self::Http { description, .. }
            | Self::MutualTls { description }
            | Self::OAuth2 { description, .. }
            | Self::OpenIdConnect { description, .. } => description.as_deref(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, bon::Builder)]
pub struct OAuthFlows {
    pub implicit: Option<OAuthFlow>,
    pub password: Option<OAuthFlow>,
    pub client_credentials: Option<OAuthFlow>,
    pub authorization_code: Option<OAuthFlow>,
}

/// Configuration of one OAuth flow
///
/// Which URLs are present depends on the flow kind.
#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
pub struct OAuthFlow {
    pub authorization_url: Option<String>,
    pub token_url: Option<String>,
    pub refresh_url: Option<String>,
    /// Scope name to short description
    pub scopes: Map<String>,
}
