//! Registry of reusable objects

use super::{
    Callback, Example, Header, Link, Map, Parameter, PathItem, ReferenceOr, RequestBody,
    Response, Schema, SecurityScheme,
};

/// Named, reusable objects that `$ref`s elsewhere in the document point at
#[derive(Debug, Clone, Default, PartialEq, bon::Builder)]
pub struct Components {
    pub schemas: Option<Map<ReferenceOr<Schema>>>,
    pub responses: Option<Map<ReferenceOr<Response>>>,
    pub parameters: Option<Map<ReferenceOr<Parameter>>>,
    pub examples: Option<Map<ReferenceOr<Example>>>,
    pub request_bodies: Option<Map<ReferenceOr<RequestBody>>>,
    pub headers: Option<Map<ReferenceOr<Header>>>,
    pub security_schemes: Option<Map<ReferenceOr<SecurityScheme>>>,
    pub links: Option<Map<ReferenceOr<Link>>>,
    pub callbacks: Option<Map<ReferenceOr<Callback>>>,
    pub path_items: Option<Map<ReferenceOr<PathItem>>>,
}
