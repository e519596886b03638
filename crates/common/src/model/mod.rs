//! OpenAPI 3.x object model
//!
//! Immutable value records for every construct of an OpenAPI document.
//! Optional members are `Option`s, so "absent" is always distinct from
//! "present but empty". Every member that OpenAPI allows to be either an
//! inline object or a `$ref` is a [`ReferenceOr`].
//!
//! Records are built with their `bon` builders: required members must be
//! set before `build()` is available.

mod components;
mod document;
mod paths;
mod responses;
mod schema;
mod security;

pub use components::Components;
pub use document::{
    Contact, Document, ExternalDocumentation, Info, License, OpenApiVersion, Server,
    ServerVariable, Tag,
};
pub use paths::{
    Callback, HttpMethod, Operation, Parameter, ParameterLocation, ParameterStyle, PathItem,
    RequestBody,
};
pub use responses::{
    Encoding, Example, Header, Link, MediaType, Response, Responses, StatusCode,
    StatusCodeError,
};
pub use schema::{Discriminator, Schema, Xml};
pub use security::{
    ApiKeyLocation, OAuthFlow, OAuthFlows, SecurityRequirement, SecurityScheme,
};

/// Name-keyed mapping that keeps the source document's key order
pub type Map<T> = indexmap::IndexMap<String, T>;

/// A `$ref` indirection to an object declared elsewhere
#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
#[builder(on(String, into))]
pub struct Reference {
    /// The `$ref` string, kept verbatim and never resolved
    pub reference: String,
    pub summary: Option<String>,
    pub description: Option<String>,
}

/// Either an inline object or a [`Reference`] to one
#[derive(Debug, Clone, PartialEq)]
pub enum ReferenceOr<T> {
    Item(T),
    Reference(Reference),
}

impl<T> ReferenceOr<T> {
    pub fn as_item(&self) -> Option<&T> {
        match self {
            Self::Item(item) => Some(item),
            Self::Reference(_) => None,
        }
    }

    pub fn as_reference(&self) -> Option<&Reference> {
        match self {
            Self::Item(_) => None,
            Self::Reference(reference) => Some(reference),
        }
    }

    pub fn is_reference(&self) -> bool {
        matches!(self, Self::Reference(_))
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ReferenceOr<U> {
        match self {
            Self::Item(item) => ReferenceOr::Item(f(item)),
            Self::Reference(reference) => ReferenceOr::Reference(reference),
        }
    }
}

impl<T> From<Reference> for ReferenceOr<T> {
    fn from(reference: Reference) -> Self {
        Self::Reference(reference)
    }
}
