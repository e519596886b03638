//! Components registry, schemas and security schemes

use super::paths::{convert_callback, convert_parameter, convert_request_body};
use super::responses::{convert_example, convert_header, convert_link, convert_response};
use super::{
    convert_external_docs, convert_path_item, map_of, optional, optional_map, reference_or, Node,
};
use openapi_extract_common::{
    ApiKeyLocation, Components, Discriminator, ExtractError, OAuthFlow, OAuthFlows, ReferenceOr,
    Result, Schema, SecurityScheme, Xml,
};
use serde_json::Value;

pub(super) fn convert_components(node: &Node<'_>) -> Result<Components> {
    node.as_object()?;

    Ok(Components::builder()
        .maybe_schemas(optional_map(node, "schemas", |_, schema| {
            convert_schema_or_ref(schema)
        })?)
        .maybe_responses(optional_map(node, "responses", |_, response| {
            reference_or(response, convert_response)
        })?)
        .maybe_parameters(optional_map(node, "parameters", |_, parameter| {
            reference_or(parameter, convert_parameter)
        })?)
        .maybe_examples(optional_map(node, "examples", |_, example| {
            reference_or(example, convert_example)
        })?)
        .maybe_request_bodies(optional_map(node, "requestBodies", |_, body| {
            reference_or(body, convert_request_body)
        })?)
        .maybe_headers(optional_map(node, "headers", |_, header| {
            reference_or(header, convert_header)
        })?)
        .maybe_security_schemes(optional_map(node, "securitySchemes", |_, scheme| {
            reference_or(scheme, convert_security_scheme)
        })?)
        .maybe_links(optional_map(node, "links", |_, link| {
            reference_or(link, convert_link)
        })?)
        .maybe_callbacks(optional_map(node, "callbacks", |_, callback| {
            reference_or(callback, convert_callback)
        })?)
        .maybe_path_items(optional_map(node, "pathItems", |name, item| {
            reference_or(item, |item| convert_path_item(name, item))
        })?)
        .build())
}

/// A schema position: an inline schema, a `$ref`, or a 3.1 boolean schema
pub(super) fn convert_schema_or_ref(node: &Node<'_>) -> Result<ReferenceOr<Schema>> {
    match node.value() {
        Value::Bool(accept) => Ok(ReferenceOr::Item(Schema::boolean(*accept))),
        _ => reference_or(node, convert_schema),
    }
}

fn convert_schema(node: &Node<'_>) -> Result<Schema> {
    Ok(Schema::builder()
        .definition(node.value().clone())
        .maybe_discriminator(optional(node, "discriminator", convert_discriminator)?)
        .maybe_xml(optional(node, "xml", convert_xml)?)
        .maybe_external_docs(optional(node, "externalDocs", convert_external_docs)?)
        .maybe_example(node.raw("example")?)
        .build())
}

fn convert_discriminator(node: &Node<'_>) -> Result<Discriminator> {
    Ok(Discriminator::builder()
        .property_name(node.required_string("propertyName")?)
        .maybe_mapping(optional_map(node, "mapping", |_, target| {
            target.as_str().map(str::to_string)
        })?)
        .build())
}

fn convert_xml(node: &Node<'_>) -> Result<Xml> {
    Ok(Xml::builder()
        .maybe_name(node.string("name")?)
        .maybe_namespace(node.string("namespace")?)
        .maybe_prefix(node.string("prefix")?)
        .attribute(node.bool("attribute")?.unwrap_or(false))
        .wrapped(node.bool("wrapped")?.unwrap_or(false))
        .build())
}

fn convert_security_scheme(node: &Node<'_>) -> Result<SecurityScheme> {
    let kind = node.required("type")?;
    let description = node.string("description")?;

    let scheme = match kind.as_str()? {
        "apiKey" => SecurityScheme::ApiKey {
            name: node.required_string("name")?,
            location: node.required_parsed::<ApiKeyLocation>("in", "one of query, header, cookie")?,
            description,
        },
        "http" => SecurityScheme::Http {
            scheme: node.required_string("scheme")?,
            bearer_format: node.string("bearerFormat")?,
            description,
        },
        "mutualTLS" => SecurityScheme::MutualTls { description },
        "oauth2" => SecurityScheme::OAuth2 {
            flows: convert_oauth_flows(&node.required("flows")?)?,
            description,
        },
        "openIdConnect" => SecurityScheme::OpenIdConnect {
            open_id_connect_url: node.required_string("openIdConnectUrl")?,
            description,
        },
        other => {
            return Err(ExtractError::InvalidValue {
                path: kind.path().clone(),
                value: other.to_string(),
                expected: "one of apiKey, http, mutualTLS, oauth2, openIdConnect",
            })
        }
    };

    Ok(scheme)
}

fn convert_oauth_flows(node: &Node<'_>) -> Result<OAuthFlows> {
    Ok(OAuthFlows::builder()
        .maybe_implicit(optional(node, "implicit", |flow| {
            convert_oauth_flow(flow, true, false)
        })?)
        .maybe_password(optional(node, "password", |flow| {
            convert_oauth_flow(flow, false, true)
        })?)
        .maybe_client_credentials(optional(node, "clientCredentials", |flow| {
            convert_oauth_flow(flow, false, true)
        })?)
        .maybe_authorization_code(optional(node, "authorizationCode", |flow| {
            convert_oauth_flow(flow, true, true)
        })?)
        .build())
}

/// One OAuth flow; which URLs are required depends on the flow kind
fn convert_oauth_flow(
    node: &Node<'_>,
    needs_authorization_url: bool,
    needs_token_url: bool,
) -> Result<OAuthFlow> {
    let url = |key: &str, required: bool| {
        if required {
            node.required_string(key).map(Some)
        } else {
            node.string(key)
        }
    };

    Ok(OAuthFlow::builder()
        .maybe_authorization_url(url("authorizationUrl", needs_authorization_url)?)
        .maybe_token_url(url("tokenUrl", needs_token_url)?)
        .maybe_refresh_url(node.string("refreshUrl")?)
        .scopes(map_of(&node.required("scopes")?, |_, scope| {
            scope.as_str().map(str::to_string)
        })?)
        .build())
}
