//! Path items, operations and their inputs

use super::{
    Example, ExternalDocumentation, Map, MediaType, ReferenceOr, Responses, Schema,
    SecurityRequirement, Server,
};
use serde_json::Value;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

/// HTTP methods a path item can carry an operation for
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum HttpMethod {
    Get,
    Put,
    Post,
    Delete,
    Options,
    Head,
    Patch,
    Trace,
}

/// The operations available on a single URL template
#[derive(Debug, Clone, PartialEq, bon::Builder)]
#[builder(on(String, into))]
pub struct PathItem {
    /// URL template (or runtime expression / webhook name) this item was keyed by
    pub path: String,

    /// The path item's own `$ref` member, kept verbatim
    pub reference: Option<String>,

    pub summary: Option<String>,
    pub description: Option<String>,

    /// One slot per method; `None` when the method is not offered
    pub get: Option<Box<Operation>>,
    pub put: Option<Box<Operation>>,
    pub post: Option<Box<Operation>>,
    pub delete: Option<Box<Operation>>,
    pub options: Option<Box<Operation>>,
    pub head: Option<Box<Operation>>,
    pub patch: Option<Box<Operation>>,
    pub trace: Option<Box<Operation>>,

    pub servers: Option<Vec<Server>>,
    pub parameters: Option<Vec<ReferenceOr<Parameter>>>,
}

impl PathItem {
    pub fn operation(&self, method: HttpMethod) -> Option<&Operation> {
        match method {
            HttpMethod::Get => self.get.as_deref(),
            HttpMethod::Put => self.put.as_deref(),
            HttpMethod::Post => self.post.as_deref(),
            HttpMethod::Delete => self.delete.as_deref(),
            HttpMethod::Options => self.options.as_deref(),
            HttpMethod::Head => self.head.as_deref(),
            HttpMethod::Patch => self.patch.as_deref(),
            HttpMethod::Trace => self.trace.as_deref(),
        }
    }

    /// Populated operation slots, in method declaration order
    pub fn operations(&self) -> impl Iterator<Item = (HttpMethod, &Operation)> + '_ {
        HttpMethod::iter().filter_map(|method| self.operation(method).map(|op| (method, op)))
    }
}

/// A single API operation on a path
#[derive(Debug, Clone, PartialEq, bon::Builder)]
pub struct Operation {
    /// Tag names used to group operations
    pub tags: Option<Vec<String>>,

    /// Short summary of what the operation does
    pub summary: Option<String>,

    /// Verbose explanation (CommonMark)
    pub description: Option<String>,

    pub external_docs: Option<ExternalDocumentation>,

    /// Unique identifier across all operations of the document
    pub operation_id: Option<String>,

    /// Operation-level parameters; these override path-level ones with the
    /// same name and location
    pub parameters: Option<Vec<ReferenceOr<Parameter>>>,

    pub request_body: Option<ReferenceOr<RequestBody>>,

    /// Possible responses; `None` when none are declared
    pub responses: Option<Responses>,

    /// Out-of-band callbacks, keyed by callback name
    pub callbacks: Option<Map<ReferenceOr<Callback>>>,

    pub deprecated: Option<bool>,

    /// Overrides the document-level requirements; `Some(vec![])` removes them
    pub security: Option<Vec<SecurityRequirement>>,

    /// Overrides the path item and document servers
    pub servers: Option<Vec<Server>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum ParameterLocation {
    Path,
    Query,
    Header,
    Cookie,
}

/// Serialization style of a parameter or encoded property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "camelCase")]
pub enum ParameterStyle {
    Matrix,
    Label,
    Form,
    Simple,
    SpaceDelimited,
    PipeDelimited,
    DeepObject,
}

/// A single operation parameter
#[derive(Debug, Clone, PartialEq, bon::Builder)]
#[builder(on(String, into))]
pub struct Parameter {
    /// Parameter name, case-sensitive
    pub name: String,

    /// Where the parameter is carried (`in`)
    pub location: ParameterLocation,

    pub description: Option<String>,

    /// Must be `true` for path parameters in a well-formed document (not enforced)
    pub required: Option<bool>,

    pub deprecated: Option<bool>,

    /// Allows sending an empty value (query parameters only)
    pub allow_empty_value: Option<bool>,

    /// Serialization style
    pub style: Option<ParameterStyle>,

    /// Whether arrays and objects expand into one parameter per item
    pub explode: Option<bool>,

    /// Whether reserved characters are sent unencoded (query parameters only)
    pub allow_reserved: Option<bool>,

    pub schema: Option<ReferenceOr<Schema>>,

    /// Literal example value
    pub example: Option<Value>,

    /// Named examples
    pub examples: Option<Map<ReferenceOr<Example>>>,

    /// Media-type keyed alternative to `schema`
    pub content: Option<Map<MediaType>>,
}

#[derive(Debug, Clone, PartialEq, bon::Builder)]
pub struct RequestBody {
    pub content: Map<MediaType>,
    pub description: Option<String>,
    pub required: Option<bool>,
}

/// Out-of-band requests keyed by runtime expression
///
/// Each path item's `path` is the expression it was declared under.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Callback {
    pub paths: Vec<PathItem>,
}

impl Callback {
    pub fn new(paths: Vec<PathItem>) -> Self {
        Self { paths }
    }

    pub fn expression(&self, expression: &str) -> Option<&PathItem> {
        self.paths.iter().find(|item| item.path == expression)
    }
}
