//! Responses and everything a response body is described with

use super::components::convert_schema_or_ref;
use super::paths::STYLE_VALUES;
use super::{
    convert_server, is_extension, non_empty_map, optional, optional_map, reference_or, Node,
};
use indexmap::IndexMap;
use openapi_extract_common::{
    Encoding, Example, Header, Link, Map, MediaType, ReferenceOr, Response, Responses, Result,
    StatusCode,
};
use tracing::warn;

const DEFAULT_RESPONSE: &str = "default";

/// An operation's `responses` object
///
/// `default` goes to its own slot and is never a status-code key. Returns
/// `None` when neither a default nor any status-code entry is declared.
pub(super) fn convert_responses(node: &Node<'_>) -> Result<Option<Responses>> {
    let mut default = None;
    let mut status_codes = IndexMap::new();

    for (key, entry) in node.entries()? {
        if key == DEFAULT_RESPONSE {
            default = Some(reference_or(&entry, convert_response)?);
            continue;
        }

        match key.parse::<StatusCode>() {
            Ok(code) => {
                let response = reference_or(&entry, convert_response)?;
                if status_codes.insert(code, response).is_some() {
                    warn!(path = %entry.path(), %code, "duplicate status code, keeping the last entry");
                }
            }
            Err(_) if is_extension(key) => {}
            Err(err) => {
                warn!(path = %entry.path(), %err, "skipping response entry that is not a status code");
            }
        }
    }

    if default.is_none() && status_codes.is_empty() {
        return Ok(None);
    }

    Ok(Some(
        Responses::builder()
            .maybe_default(default)
            .maybe_http_status_code_map((!status_codes.is_empty()).then_some(status_codes))
            .build(),
    ))
}

pub(super) fn convert_response(node: &Node<'_>) -> Result<Response> {
    Ok(Response::builder()
        .description(node.required_string("description")?)
        .maybe_headers(convert_headers(node)?)
        .maybe_content(convert_content(node)?)
        .maybe_links(optional_map(node, "links", |_, link| {
            reference_or(link, convert_link)
        })?)
        .build())
}

/// An optional `content` map; an empty one counts as absent
pub(super) fn convert_content(node: &Node<'_>) -> Result<Option<Map<MediaType>>> {
    non_empty_map(node, "content", |_, media_type| convert_media_type(media_type))
}

pub(super) fn convert_media_type(node: &Node<'_>) -> Result<MediaType> {
    node.as_object()?;

    Ok(MediaType::builder()
        .maybe_schema(optional(node, "schema", convert_schema_or_ref)?)
        .maybe_example(node.raw("example")?)
        .maybe_examples(convert_examples(node)?)
        .maybe_encoding(optional_map(node, "encoding", |_, encoding| {
            convert_encoding(encoding)
        })?)
        .build())
}

/// An `examples` map; an empty one counts as absent
pub(super) fn convert_examples(node: &Node<'_>) -> Result<Option<Map<ReferenceOr<Example>>>> {
    non_empty_map(node, "examples", |_, example| {
        reference_or(example, convert_example)
    })
}

pub(super) fn convert_example(node: &Node<'_>) -> Result<Example> {
    Ok(Example::builder()
        .maybe_summary(node.string("summary")?)
        .maybe_description(node.string("description")?)
        .maybe_value(node.raw("value")?)
        .maybe_external_value(node.string("externalValue")?)
        .build())
}

fn convert_headers(node: &Node<'_>) -> Result<Option<Map<ReferenceOr<Header>>>> {
    optional_map(node, "headers", |_, header| reference_or(header, convert_header))
}

pub(super) fn convert_header(node: &Node<'_>) -> Result<Header> {
    node.as_object()?;

    Ok(Header::builder()
        .maybe_description(node.string("description")?)
        .maybe_required(node.bool("required")?)
        .maybe_deprecated(node.bool("deprecated")?)
        .maybe_allow_empty_value(node.bool("allowEmptyValue")?)
        .maybe_style(node.parsed("style", STYLE_VALUES)?)
        .maybe_explode(node.bool("explode")?)
        .maybe_allow_reserved(node.bool("allowReserved")?)
        .maybe_schema(optional(node, "schema", convert_schema_or_ref)?)
        .maybe_example(node.raw("example")?)
        .maybe_examples(convert_examples(node)?)
        .maybe_content(convert_content(node)?)
        .build())
}

fn convert_encoding(node: &Node<'_>) -> Result<Encoding> {
    node.as_object()?;

    Ok(Encoding::builder()
        .maybe_content_type(node.string("contentType")?)
        .maybe_headers(convert_headers(node)?)
        .maybe_style(node.parsed("style", STYLE_VALUES)?)
        .maybe_explode(node.bool("explode")?)
        .maybe_allow_reserved(node.bool("allowReserved")?)
        .build())
}

pub(super) fn convert_link(node: &Node<'_>) -> Result<Link> {
    node.as_object()?;

    Ok(Link::builder()
        .maybe_operation_ref(node.string("operationRef")?)
        .maybe_operation_id(node.string("operationId")?)
        .maybe_parameters(optional_map(node, "parameters", |_, parameter| {
            Ok(parameter.value().clone())
        })?)
        .maybe_request_body(node.raw("requestBody")?)
        .maybe_description(node.string("description")?)
        .maybe_server(optional(node, "server", convert_server)?)
        .build())
}
