//! Schema Object stub
//!
//! Only the OpenAPI-specific members are lifted into fields. The JSON Schema
//! body itself stays raw for an external validator.

use super::{ExternalDocumentation, Map};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, bon::Builder)]
pub struct Schema {
    /// The schema as written: an object, or a boolean schema (3.1)
    pub definition: Value,
    pub discriminator: Option<Discriminator>,
    pub xml: Option<Xml>,
    pub external_docs: Option<ExternalDocumentation>,
    pub example: Option<Value>,
}

impl Schema {
    /// `true`/`false` schema, accepted by 3.1 documents
    pub fn boolean(accept: bool) -> Self {
        Self::builder().definition(Value::Bool(accept)).build()
    }

    pub fn as_boolean(&self) -> Option<bool> {
        self.definition.as_bool()
    }
}

/// Hint for telling apart the alternatives of a polymorphic schema
#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
#[builder(on(String, into))]
pub struct Discriminator {
    pub property_name: String,
    /// Payload value to schema name or `$ref`
    pub mapping: Option<Map<String>>,
}

/// XML representation metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, bon::Builder)]
pub struct Xml {
    pub name: Option<String>,
    pub namespace: Option<String>,
    pub prefix: Option<String>,
    #[builder(default)]
    pub attribute: bool,
    #[builder(default)]
    pub wrapped: bool,
}
