//! Responses, media types and the records hanging off them

use super::{Map, ParameterStyle, ReferenceOr, Schema, Server};
use indexmap::IndexMap;
use serde_json::Value;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

/// Key of a status-code entry in a responses object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StatusCode {
    /// A single code, 100 to 599
    Exact(u16),
    /// Every code in a hundred range, written `2XX`; holds the leading digit
    Range(u8),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0:?} is not an HTTP status code or range")]
pub struct StatusCodeError(pub String);

impl StatusCode {
    /// Whether a concrete response code falls under this key
    pub fn matches(&self, code: u16) -> bool {
        match *self {
            Self::Exact(exact) => exact == code,
            Self::Range(class) => code / 100 == u16::from(class),
        }
    }
}

impl FromStr for StatusCode {
    type Err = StatusCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || StatusCodeError(s.to_string());
        let bytes = s.as_bytes();
        if bytes.len() != 3 || !(b'1'..=b'5').contains(&bytes[0]) {
            return Err(invalid());
        }

        let class = bytes[0] - b'0';
        if s[1..].eq_ignore_ascii_case("xx") {
            return Ok(Self::Range(class));
        }
        if bytes[1..].iter().all(u8::is_ascii_digit) {
            return s.parse().map(Self::Exact).map_err(|_| invalid());
        }

        Err(invalid())
    }
}

impl Display for StatusCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact(code) => write!(f, "{}", code),
            Self::Range(class) => write!(f, "{}XX", class),
        }
    }
}

/// Expected responses of an operation
///
/// `default` is a member of its own and never appears as a key of
/// `http_status_code_map`.
#[derive(Debug, Clone, PartialEq, bon::Builder)]
pub struct Responses {
    pub default: Option<ReferenceOr<Response>>,
    pub http_status_code_map: Option<IndexMap<StatusCode, ReferenceOr<Response>>>,
}

impl Responses {
    /// Look up a status-code entry by its textual key, e.g. `"404"` or `"2XX"`
    pub fn get(&self, code: &str) -> Option<&ReferenceOr<Response>> {
        let code = code.parse::<StatusCode>().ok()?;
        self.http_status_code_map.as_ref()?.get(&code)
    }

    /// Status-code keys in declaration order
    pub fn status_codes(&self) -> impl Iterator<Item = &StatusCode> + '_ {
        self.http_status_code_map.iter().flat_map(|map| map.keys())
    }
}

#[derive(Debug, Clone, PartialEq, bon::Builder)]
#[builder(on(String, into))]
pub struct Response {
    /// Short description of the response (CommonMark)
    pub description: String,

    /// Response headers, keyed by header name
    pub headers: Option<Map<ReferenceOr<Header>>>,

    /// Keyed by media type or media type range
    pub content: Option<Map<MediaType>>,

    /// Links to follow-up operations, keyed by link name
    pub links: Option<Map<ReferenceOr<Link>>>,
}

/// Body shape and examples for one media type
///
/// A well-formed document populates at most one of `example` and
/// `examples`; that is left to validation.
#[derive(Debug, Clone, Default, PartialEq, bon::Builder)]
pub struct MediaType {
    pub schema: Option<ReferenceOr<Schema>>,
    pub example: Option<Value>,
    pub examples: Option<Map<ReferenceOr<Example>>>,
    /// Keyed by property name
    pub encoding: Option<Map<Encoding>>,
}

#[derive(Debug, Clone, Default, PartialEq, bon::Builder)]
pub struct Example {
    pub summary: Option<String>,
    pub description: Option<String>,

    /// Embedded literal example
    pub value: Option<Value>,

    /// URL of an example that cannot be embedded; exclusive with `value`
    pub external_value: Option<String>,
}

/// A response or encoding header; a parameter without `name` and `in`
#[derive(Debug, Clone, Default, PartialEq, bon::Builder)]
pub struct Header {
    pub description: Option<String>,
    pub required: Option<bool>,
    pub deprecated: Option<bool>,

    /// Allows sending an empty value
    pub allow_empty_value: Option<bool>,

    /// Serialization style; `simple` is the only one valid for headers
    pub style: Option<ParameterStyle>,

    pub explode: Option<bool>,

    /// Whether reserved characters are sent unencoded
    pub allow_reserved: Option<bool>,

    pub schema: Option<ReferenceOr<Schema>>,

    /// Literal example value
    pub example: Option<Value>,

    /// Named examples
    pub examples: Option<Map<ReferenceOr<Example>>>,

    /// Media-type keyed alternative to `schema`
    pub content: Option<Map<MediaType>>,
}

#[derive(Debug, Clone, Default, PartialEq, bon::Builder)]
pub struct Encoding {
    /// Content type(s) for the property, comma separated
    pub content_type: Option<String>,

    /// Per-part headers for multipart bodies
    pub headers: Option<Map<ReferenceOr<Header>>>,

    /// Same meaning as on a query parameter
    pub style: Option<ParameterStyle>,
    pub explode: Option<bool>,
    pub allow_reserved: Option<bool>,
}

/// Design-time link from a response to another operation
///
/// Parameter values and the request body are either literals or runtime
/// expressions; both are kept as raw JSON.
#[derive(Debug, Clone, Default, PartialEq, bon::Builder)]
pub struct Link {
    pub operation_ref: Option<String>,
    pub operation_id: Option<String>,
    pub parameters: Option<Map<Value>>,
    pub request_body: Option<Value>,
    pub description: Option<String>,
    pub server: Option<Server>,
}
