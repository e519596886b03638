//! Document root and its metadata records

use super::{Components, Map, PathItem, ReferenceOr, SecurityRequirement};
use std::str::FromStr;

/// OpenAPI document root
#[derive(Debug, Clone, PartialEq, bon::Builder)]
#[builder(on(String, into))]
pub struct Document {
    /// OpenAPI version string, verbatim (e.g. "3.0.0")
    pub openapi: String,

    /// API metadata
    pub info: Info,

    /// Default `$schema` for Schema Objects (3.1)
    pub json_schema_dialect: Option<String>,

    pub servers: Option<Vec<Server>>,

    /// Path items in declaration order
    pub paths: Option<Vec<PathItem>>,

    /// Incoming requests the API may initiate (3.1)
    pub webhooks: Option<Map<ReferenceOr<PathItem>>>,

    pub components: Option<Components>,

    pub security: Option<Vec<SecurityRequirement>>,

    pub tags: Option<Vec<Tag>>,

    pub external_docs: Option<ExternalDocumentation>,
}

impl Document {
    /// Parsed form of [`Document::openapi`], if it is a known 3.x line
    pub fn version(&self) -> Option<OpenApiVersion> {
        self.openapi.parse().ok()
    }

    /// Look up a path item by its URL template
    pub fn path(&self, template: &str) -> Option<&PathItem> {
        self.paths
            .as_deref()
            .and_then(|paths| paths.iter().find(|item| item.path == template))
    }
}

/// The OpenAPI 3.x release lines the model is shaped for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpenApiVersion {
    V30x,
    V31x,
}

impl FromStr for OpenApiVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.starts_with("3.1") {
            Ok(OpenApiVersion::V31x)
        } else if s.starts_with("3.0") {
            Ok(OpenApiVersion::V30x)
        } else {
            Err(s.to_string())
        }
    }
}

/// API information
#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
#[builder(on(String, into))]
pub struct Info {
    pub title: String,
    pub version: String,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub terms_of_service: Option<String>,
    pub contact: Option<Contact>,
    pub license: Option<License>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, bon::Builder)]
pub struct Contact {
    pub name: Option<String>,
    pub url: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
#[builder(on(String, into))]
pub struct License {
    pub name: String,
    /// SPDX expression (3.1)
    pub identifier: Option<String>,
    pub url: Option<String>,
}

/// A server the API is reachable at
#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
#[builder(on(String, into))]
pub struct Server {
    /// URL template, variables still unsubstituted
    pub url: String,
    pub description: Option<String>,
    pub variables: Option<Map<ServerVariable>>,
}

/// Substitution variable of a server URL template
#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
#[builder(on(String, into))]
pub struct ServerVariable {
    pub default: String,
    pub enum_values: Option<Vec<String>>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
#[builder(on(String, into))]
pub struct ExternalDocumentation {
    pub url: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
#[builder(on(String, into))]
pub struct Tag {
    pub name: String,
    pub description: Option<String>,
    pub external_docs: Option<ExternalDocumentation>,
}
