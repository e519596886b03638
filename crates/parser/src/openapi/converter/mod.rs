//! Converts the untyped JSON tree into the OpenAPI object model
//!
//! One routine per entity. Each routine only reads its own node and hands
//! every child to the routine for the child's entity, so the call graph
//! mirrors the nesting of the model.

mod components;
mod paths;
mod responses;

use super::node::Node;
use openapi_extract_common::{
    Contact, Document, ExtractError, ExternalDocumentation, Info, License, Map, Reference,
    ReferenceOr, Result, SecurityRequirement, Server, ServerVariable, Tag,
};

use components::convert_components;
use paths::{convert_path_item, convert_paths};

const REF_FIELD: &str = "$ref";

/// Specification extensions (`x-` keys) are tolerated and skipped
fn is_extension(key: &str) -> bool {
    key.starts_with("x-")
}

/// Convert member `key` when it is present and not `null`
fn optional<'a, T>(
    node: &Node<'a>,
    key: &str,
    convert: impl FnOnce(&Node<'a>) -> Result<T>,
) -> Result<Option<T>> {
    node.get(key)?.map(|child| convert(&child)).transpose()
}

/// Convert every member of an object, keeping each key with its value
fn map_of<'a, T>(
    node: &Node<'a>,
    mut convert: impl FnMut(&str, &Node<'a>) -> Result<T>,
) -> Result<Map<T>> {
    node.entries()?
        .into_iter()
        .map(|(key, child)| Ok((key.to_string(), convert(key, &child)?)))
        .collect()
}

fn optional_map<'a, T>(
    node: &Node<'a>,
    key: &str,
    convert: impl FnMut(&str, &Node<'a>) -> Result<T>,
) -> Result<Option<Map<T>>> {
    optional(node, key, |child| map_of(child, convert))
}

/// Like [`optional_map`], but an empty object counts as absent
fn non_empty_map<'a, T>(
    node: &Node<'a>,
    key: &str,
    convert: impl FnMut(&str, &Node<'a>) -> Result<T>,
) -> Result<Option<Map<T>>> {
    Ok(optional_map(node, key, convert)?.filter(|map| !map.is_empty()))
}

fn optional_list<'a, T>(
    node: &Node<'a>,
    key: &str,
    convert: impl FnMut(&Node<'a>) -> Result<T>,
) -> Result<Option<Vec<T>>> {
    optional(node, key, |child| {
        child.elements()?.iter().map(convert).collect()
    })
}

/// Discriminate an inline object from a `$ref` by the presence of `$ref`
///
/// A reference keeps only its `summary` and `description` overrides; every
/// other sibling key is ignored.
fn reference_or<'a, T>(
    node: &Node<'a>,
    convert: impl FnOnce(&Node<'a>) -> Result<T>,
) -> Result<ReferenceOr<T>> {
    if !node.value().is_object() {
        return Err(ExtractError::MalformedUnionValue(node.path().clone()));
    }

    match node.get(REF_FIELD)? {
        Some(reference) => Ok(ReferenceOr::Reference(
            Reference::builder()
                .reference(reference.as_str()?)
                .maybe_summary(node.string("summary")?)
                .maybe_description(node.string("description")?)
                .build(),
        )),
        None => convert(node).map(ReferenceOr::Item),
    }
}

pub(crate) fn convert_document(root: &Node<'_>) -> Result<Document> {
    root.as_object()?;

    let openapi = root.required_string("openapi")?;
    let info = convert_info(&root.required("info")?)?;

    Ok(Document::builder()
        .openapi(openapi)
        .info(info)
        .maybe_json_schema_dialect(root.string("jsonSchemaDialect")?)
        .maybe_servers(convert_servers(root)?)
        .maybe_paths(convert_paths(root)?)
        .maybe_webhooks(optional_map(root, "webhooks", |name, node| {
            reference_or(node, |node| convert_path_item(name, node))
        })?)
        .maybe_components(optional(root, "components", convert_components)?)
        .maybe_security(convert_security(root)?)
        .maybe_tags(optional_list(root, "tags", convert_tag)?)
        .maybe_external_docs(optional(root, "externalDocs", convert_external_docs)?)
        .build())
}

/// Title and version must be non-empty; they are kept byte for byte
fn non_empty_string(node: &Node<'_>, key: &str) -> Result<String> {
    let value = node.required_string(key)?;
    if value.is_empty() {
        return Err(ExtractError::InvalidValue {
            path: node.path().key(key),
            value,
            expected: "a non-empty string",
        });
    }
    Ok(value)
}

fn convert_info(node: &Node<'_>) -> Result<Info> {
    node.as_object()?;

    Ok(Info::builder()
        .title(non_empty_string(node, "title")?)
        .version(non_empty_string(node, "version")?)
        .maybe_summary(node.string("summary")?)
        .maybe_description(node.string("description")?)
        .maybe_terms_of_service(node.string("termsOfService")?)
        .maybe_contact(optional(node, "contact", convert_contact)?)
        .maybe_license(optional(node, "license", convert_license)?)
        .build())
}

fn convert_contact(node: &Node<'_>) -> Result<Contact> {
    node.as_object()?;

    Ok(Contact::builder()
        .maybe_name(node.string("name")?)
        .maybe_url(node.string("url")?)
        .maybe_email(node.string("email")?)
        .build())
}

fn convert_license(node: &Node<'_>) -> Result<License> {
    Ok(License::builder()
        .name(node.required_string("name")?)
        .maybe_identifier(node.string("identifier")?)
        .maybe_url(node.string("url")?)
        .build())
}

/// The `servers` member of a document, path item or operation
fn convert_servers(node: &Node<'_>) -> Result<Option<Vec<Server>>> {
    optional_list(node, "servers", convert_server)
}

fn convert_server(node: &Node<'_>) -> Result<Server> {
    Ok(Server::builder()
        .url(node.required_string("url")?)
        .maybe_description(node.string("description")?)
        .maybe_variables(optional_map(node, "variables", |_, variable| {
            convert_server_variable(variable)
        })?)
        .build())
}

fn convert_server_variable(node: &Node<'_>) -> Result<ServerVariable> {
    Ok(ServerVariable::builder()
        .default(node.required_string("default")?)
        .maybe_enum_values(node.strings("enum")?)
        .maybe_description(node.string("description")?)
        .build())
}

fn convert_external_docs(node: &Node<'_>) -> Result<ExternalDocumentation> {
    Ok(ExternalDocumentation::builder()
        .url(node.required_string("url")?)
        .maybe_description(node.string("description")?)
        .build())
}

fn convert_tag(node: &Node<'_>) -> Result<Tag> {
    Ok(Tag::builder()
        .name(node.required_string("name")?)
        .maybe_description(node.string("description")?)
        .maybe_external_docs(optional(node, "externalDocs", convert_external_docs)?)
        .build())
}

/// The `security` member of a document or operation
///
/// An empty list and empty requirements are kept: both are meaningful.
fn convert_security(node: &Node<'_>) -> Result<Option<Vec<SecurityRequirement>>> {
    optional_list(node, "security", |requirement| {
        map_of(requirement, |_, scopes| scopes.string_list()).map(SecurityRequirement::new)
    })
}
