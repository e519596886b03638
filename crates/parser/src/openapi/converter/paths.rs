//! Paths, path items, operations and operation inputs

use super::components::convert_schema_or_ref;
use super::responses::{convert_content, convert_examples, convert_media_type, convert_responses};
use super::{
    convert_external_docs, convert_security, convert_servers, is_extension, map_of, optional,
    optional_list, optional_map, reference_or, Node,
};
use openapi_extract_common::{
    Callback, HttpMethod, Map, Operation, Parameter, PathItem, ReferenceOr, RequestBody, Result,
};
use tracing::trace;

const LOCATION_VALUES: &str = "one of path, query, header, cookie";
pub(super) const STYLE_VALUES: &str =
    "one of matrix, label, form, simple, spaceDelimited, pipeDelimited, deepObject";

/// The document's `paths`, in declaration order
///
/// An empty `paths` object yields `None`, the same as an absent one.
pub(super) fn convert_paths(root: &Node<'_>) -> Result<Option<Vec<PathItem>>> {
    let Some(paths) = root.get("paths")? else {
        return Ok(None);
    };

    let items = paths
        .entries()?
        .into_iter()
        .filter(|(path, _)| !is_extension(path))
        .map(|(path, node)| convert_path_item(path, &node))
        .collect::<Result<Vec<_>>>()?;

    Ok((!items.is_empty()).then_some(items))
}

/// A path item declared under `path`
///
/// Also used for webhooks, callback expressions and `components.pathItems`,
/// where `path` is the name or expression the item was keyed by.
pub(super) fn convert_path_item(path: &str, node: &Node<'_>) -> Result<PathItem> {
    node.as_object()?;
    trace!(path, "converting path item");

    let operation = |method: HttpMethod| optional(node, method.as_ref(), convert_operation);

    Ok(PathItem::builder()
        .path(path)
        .maybe_reference(node.string("$ref")?)
        .maybe_summary(node.string("summary")?)
        .maybe_description(node.string("description")?)
        .maybe_get(operation(HttpMethod::Get)?)
        .maybe_put(operation(HttpMethod::Put)?)
        .maybe_post(operation(HttpMethod::Post)?)
        .maybe_delete(operation(HttpMethod::Delete)?)
        .maybe_options(operation(HttpMethod::Options)?)
        .maybe_head(operation(HttpMethod::Head)?)
        .maybe_patch(operation(HttpMethod::Patch)?)
        .maybe_trace(operation(HttpMethod::Trace)?)
        .maybe_servers(convert_servers(node)?)
        .maybe_parameters(convert_parameter_list(node)?)
        .build())
}

/// An operation, boxed for its path item slot
///
/// Callbacks recurse back into path items. They are converted here, in a
/// small frame, and the record itself is assembled by
/// [`assemble_operation`] once the recursion has returned.
fn convert_operation(node: &Node<'_>) -> Result<Box<Operation>> {
    node.as_object()?;

    let callbacks = optional_map(node, "callbacks", |_, callback| {
        reference_or(callback, convert_callback)
    })?;

    assemble_operation(node, callbacks).map(Box::new)
}

#[inline(never)]
fn assemble_operation(
    node: &Node<'_>,
    callbacks: Option<Map<ReferenceOr<Callback>>>,
) -> Result<Operation> {
    let operation_id = node.string("operationId")?;
    trace!(path = %node.path(), operation_id = ?operation_id, "converting operation");

    Ok(Operation::builder()
        .maybe_tags(node.strings("tags")?)
        .maybe_summary(node.string("summary")?)
        .maybe_description(node.string("description")?)
        .maybe_external_docs(optional(node, "externalDocs", convert_external_docs)?)
        .maybe_operation_id(operation_id)
        .maybe_parameters(convert_parameter_list(node)?)
        .maybe_request_body(optional(node, "requestBody", |body| {
            reference_or(body, convert_request_body)
        })?)
        .maybe_responses(optional(node, "responses", convert_responses)?.flatten())
        .maybe_callbacks(callbacks)
        .maybe_deprecated(node.bool("deprecated")?)
        .maybe_security(convert_security(node)?)
        .maybe_servers(convert_servers(node)?)
        .build())
}

/// The `parameters` member of a path item or operation
fn convert_parameter_list(node: &Node<'_>) -> Result<Option<Vec<ReferenceOr<Parameter>>>> {
    optional_list(node, "parameters", |parameter| {
        reference_or(parameter, convert_parameter)
    })
}

pub(super) fn convert_parameter(node: &Node<'_>) -> Result<Parameter> {
    Ok(Parameter::builder()
        .name(node.required_string("name")?)
        .location(node.required_parsed("in", LOCATION_VALUES)?)
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

pub(super) fn convert_request_body(node: &Node<'_>) -> Result<RequestBody> {
    let content = map_of(&node.required("content")?, |_, media_type| {
        convert_media_type(media_type)
    })?;

    Ok(RequestBody::builder()
        .content(content)
        .maybe_description(node.string("description")?)
        .maybe_required(node.bool("required")?)
        .build())
}

/// A callback: runtime expressions mapped to path items
pub(super) fn convert_callback(node: &Node<'_>) -> Result<Callback> {
    node.entries()?
        .into_iter()
        .filter(|(expression, _)| !is_extension(expression))
        .map(|(expression, item)| convert_path_item(expression, &item))
        .collect::<Result<Vec<_>>>()
        .map(Callback::new)
}
