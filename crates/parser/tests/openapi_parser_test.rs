//! Integration tests for OpenAPI extraction

use openapi_extract_common::{
    ExtractError, ExtractOptions, FieldPath, HttpMethod, Operation, ParameterLocation,
    ReferenceOr, StatusCode,
};
use openapi_extract_parser::{extract_document, extract_document_with, DocumentExtractor};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn parse(text: &str) -> Value {
    serde_json::from_str(text).expect("fixture is valid JSON")
}

#[test]
fn test_pet_store_end_to_end() {
    let value = parse(
        r#"{"openapi":"3.0.0","info":{"title":"Pet Store","version":"1.0.0"},"paths":{"/pets":{"get":{"operationId":"listPets","responses":{"200":{"description":"OK"}}}}}}"#,
    );

    let document = extract_document(&value).unwrap();
    assert_eq!(document.openapi, "3.0.0");
    assert_eq!(document.info.title, "Pet Store");
    assert_eq!(document.info.version, "1.0.0");

    let paths = document.paths.as_ref().unwrap();
    assert_eq!(paths.len(), 1);
    let pets = &paths[0];
    assert_eq!(pets.path, "/pets");

    let get = pets.get.as_ref().unwrap();
    assert_eq!(get.operation_id.as_deref(), Some("listPets"));
    let responses = get.responses.as_ref().unwrap();
    assert_eq!(responses.default, None);
    let ok = responses.get("200").and_then(ReferenceOr::as_item).unwrap();
    assert_eq!(ok.description, "OK");

    for method in [
        HttpMethod::Put,
        HttpMethod::Post,
        HttpMethod::Delete,
        HttpMethod::Options,
        HttpMethod::Head,
        HttpMethod::Patch,
        HttpMethod::Trace,
    ] {
        assert!(pets.operation(method).is_none(), "{method} should be absent");
    }
}

#[test]
fn test_missing_title() {
    let value = json!({ "openapi": "3.0.0", "info": { "version": "1.0.0" } });

    let err = extract_document(&value).unwrap_err();
    assert_eq!(
        err,
        ExtractError::MissingRequiredField(FieldPath::root().key("info").key("title"))
    );
    assert_eq!(err.path().unwrap().to_string(), "info.title");
}

#[test]
fn test_missing_version_and_info() {
    let value = json!({ "openapi": "3.0.0", "info": { "title": "t" } });
    assert_eq!(
        extract_document(&value).unwrap_err().to_string(),
        "missing required field `info.version`"
    );

    let value = json!({ "openapi": "3.0.0" });
    assert_eq!(
        extract_document(&value).unwrap_err().to_string(),
        "missing required field `info`"
    );

    let value = json!({ "info": { "title": "t", "version": "v" } });
    assert_eq!(
        extract_document(&value).unwrap_err().to_string(),
        "missing required field `openapi`"
    );
}

#[test]
fn test_nested_missing_field_reports_full_path() {
    let value = json!({
        "openapi": "3.0.0",
        "info": { "title": "t", "version": "v" },
        "paths": {
            "/pets": {
                "get": { "responses": { "default": { "content": {} } } }
            }
        }
    });

    let err = extract_document(&value).unwrap_err();
    assert_eq!(
        err.to_string(),
        r#"missing required field `paths["/pets"].get.responses.default.description`"#
    );
}

#[test]
fn test_absent_and_null_optionals_agree() {
    let absent = json!({
        "openapi": "3.1.0",
        "info": { "title": "t", "version": "v" },
        "paths": {
            "/pets": {
                "get": {
                    "responses": { "200": { "description": "OK", "content": { "application/json": {} } } }
                }
            }
        }
    });
    let nulled = json!({
        "openapi": "3.1.0",
        "info": {
            "title": "t", "version": "v", "summary": null, "description": null,
            "termsOfService": null, "contact": null, "license": null
        },
        "jsonSchemaDialect": null,
        "servers": null,
        "webhooks": null,
        "components": null,
        "security": null,
        "tags": null,
        "externalDocs": null,
        "paths": {
            "/pets": {
                "summary": null,
                "put": null,
                "parameters": null,
                "get": {
                    "operationId": null,
                    "requestBody": null,
                    "callbacks": null,
                    "responses": {
                        "200": {
                            "description": "OK",
                            "headers": null,
                            "links": null,
                            "content": {
                                "application/json": {
                                    "schema": null, "example": null,
                                    "examples": null, "encoding": null
                                }
                            }
                        }
                    }
                }
            }
        }
    });

    assert_eq!(extract_document(&absent), extract_document(&nulled));
}

#[test]
fn test_info_strings_are_not_normalized() {
    for (title, version) in [
        ("Pet Store", "1.0.0"),
        ("  padded  ", "v2"),
        ("Ünïcödé API ✓", "2024-01-01"),
        ("line\nbreak", "1.0.0-rc.1+build.5"),
    ] {
        let value = json!({ "openapi": "3.0.3", "info": { "title": title, "version": version } });
        let document = extract_document(&value).unwrap();
        assert_eq!(document.info.title, title);
        assert_eq!(document.info.version, version);
    }
}

#[test]
fn test_reference_wins_over_siblings() {
    let value = json!({
        "openapi": "3.0.0",
        "info": { "title": "t", "version": "v" },
        "paths": {
            "/pets": {
                "get": {
                    "responses": {
                        "200": {
                            "$ref": "#/components/responses/PetList",
                            "description": "ignored sibling",
                            "content": { "application/json": {} }
                        },
                        "400": {
                            "description": "Bad request",
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/Error", "type": "object" }
                                }
                            }
                        }
                    }
                }
            }
        }
    });

    let document = extract_document(&value).unwrap();
    let responses = document.paths.as_ref().unwrap()[0]
        .get
        .as_ref()
        .unwrap()
        .responses
        .as_ref()
        .unwrap();

    match responses.get("200").unwrap() {
        ReferenceOr::Reference(reference) => {
            assert_eq!(reference.reference, "#/components/responses/PetList");
        }
        ReferenceOr::Item(_) => panic!("a $ref entry must be a reference"),
    }

    let bad_request = match responses.get("400").unwrap() {
        ReferenceOr::Item(response) => response,
        ReferenceOr::Reference(_) => panic!("an entry without $ref must be concrete"),
    };
    let schema = bad_request.content.as_ref().unwrap()["application/json"]
        .schema
        .as_ref()
        .unwrap();
    assert_eq!(
        schema.as_reference().map(|r| r.reference.as_str()),
        Some("#/components/schemas/Error")
    );
}

#[test]
fn test_paths_keep_declaration_order() {
    let value = parse(
        r#"{
            "openapi": "3.0.0",
            "info": { "title": "t", "version": "v" },
            "paths": { "/a": {}, "/b": {}, "/c": {} }
        }"#,
    );
    let reversed = parse(
        r#"{
            "openapi": "3.0.0",
            "info": { "title": "t", "version": "v" },
            "paths": { "/c": {}, "/b": {}, "/a": {} }
        }"#,
    );

    let order = |value: &Value| -> Vec<String> {
        extract_document(value)
            .unwrap()
            .paths
            .unwrap()
            .into_iter()
            .map(|item| item.path)
            .collect()
    };
    assert_eq!(order(&value), ["/a", "/b", "/c"]);
    assert_eq!(order(&reversed), ["/c", "/b", "/a"]);
}

#[test]
fn test_status_code_map_excludes_default() {
    let value = json!({
        "openapi": "3.0.0",
        "info": { "title": "t", "version": "v" },
        "paths": {
            "/pets": {
                "get": {
                    "responses": {
                        "200": { "description": "OK" },
                        "404": { "description": "Not found" },
                        "default": { "description": "Error" }
                    }
                }
            }
        }
    });

    let document = extract_document(&value).unwrap();
    let get = document.path("/pets").unwrap().get.as_ref().unwrap();
    let responses = get.responses.as_ref().unwrap();

    let default = responses.default.as_ref().and_then(ReferenceOr::as_item).unwrap();
    assert_eq!(default.description, "Error");

    let map = responses.http_status_code_map.as_ref().unwrap();
    assert_eq!(map.len(), 2);
    assert!(map.contains_key(&StatusCode::Exact(200)));
    assert!(map.contains_key(&StatusCode::Exact(404)));
    assert!(responses.status_codes().all(|code| code.to_string() != "default"));
}

#[test]
fn test_full_document() {
    let value = parse(
        r##"{
            "openapi": "3.1.0",
            "info": {
                "title": "Swagger Petstore",
                "version": "1.0.0",
                "license": { "name": "MIT", "identifier": "MIT" }
            },
            "jsonSchemaDialect": "https://spec.openapis.org/oas/3.1/dialect/base",
            "servers": [{ "url": "https://petstore.example.com/v1" }],
            "tags": [{ "name": "pets", "description": "Everything about pets" }],
            "security": [{ "api_key": [] }],
            "paths": {
                "/pets/{petId}": {
                    "parameters": [
                        { "name": "petId", "in": "path", "required": true, "schema": { "type": "string" } }
                    ],
                    "get": {
                        "tags": ["pets"],
                        "operationId": "showPetById",
                        "responses": {
                            "200": {
                                "description": "Expected response to a valid request",
                                "headers": {
                                    "X-Rate-Limit": { "schema": { "type": "integer" } }
                                },
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/Pet" },
                                        "examples": {
                                            "rex": { "value": { "id": 1, "name": "Rex" } }
                                        }
                                    }
                                }
                            },
                            "default": { "$ref": "#/components/responses/Error" }
                        }
                    },
                    "delete": {
                        "operationId": "deletePet",
                        "security": [],
                        "responses": { "204": { "description": "Deleted" } }
                    }
                }
            },
            "webhooks": {
                "newPet": {
                    "post": {
                        "requestBody": {
                            "content": { "application/json": { "schema": { "$ref": "#/components/schemas/Pet" } } }
                        },
                        "responses": { "200": { "description": "ack" } }
                    }
                }
            },
            "components": {
                "schemas": {
                    "Pet": {
                        "type": "object",
                        "required": ["id", "name"],
                        "properties": { "id": { "type": "integer" }, "name": { "type": "string" } }
                    }
                },
                "responses": {
                    "Error": { "description": "unexpected error" }
                },
                "securitySchemes": {
                    "api_key": { "type": "apiKey", "name": "api_key", "in": "header" }
                }
            }
        }"##,
    );

    let document = DocumentExtractor::new().extract(&value).unwrap();

    assert_eq!(
        document.json_schema_dialect.as_deref(),
        Some("https://spec.openapis.org/oas/3.1/dialect/base")
    );
    assert_eq!(document.servers.as_ref().unwrap()[0].url, "https://petstore.example.com/v1");
    assert_eq!(document.tags.as_ref().unwrap()[0].name, "pets");
    assert_eq!(
        document.security.as_ref().unwrap()[0].scopes("api_key"),
        Some(&[] as &[String])
    );
    assert_eq!(
        document.info.license.as_ref().and_then(|l| l.identifier.as_deref()),
        Some("MIT")
    );

    let item = document.path("/pets/{petId}").unwrap();
    let parameter = item.parameters.as_ref().unwrap()[0].as_item().unwrap();
    assert_eq!(parameter.location, ParameterLocation::Path);
    assert_eq!(parameter.required, Some(true));

    let get = item.get.as_ref().unwrap();
    let responses = get.responses.as_ref().unwrap();
    assert!(responses.default.as_ref().unwrap().is_reference());
    let ok = responses.get("200").and_then(ReferenceOr::as_item).unwrap();
    assert!(ok.headers.as_ref().unwrap().contains_key("X-Rate-Limit"));
    let media_type = &ok.content.as_ref().unwrap()["application/json"];
    let rex = media_type.examples.as_ref().unwrap()["rex"].as_item().unwrap();
    assert_eq!(rex.value, Some(json!({ "id": 1, "name": "Rex" })));

    let delete = item.delete.as_ref().unwrap();
    assert_eq!(delete.security, Some(vec![]));
    assert!(delete.responses.as_ref().unwrap().get("204").is_some());

    let webhook = document.webhooks.as_ref().unwrap()["newPet"].as_item().unwrap();
    assert_eq!(webhook.path, "newPet");
    let body = webhook.post.as_ref().unwrap().request_body.as_ref().unwrap();
    assert!(body.as_item().unwrap().content.contains_key("application/json"));

    let components = document.components.as_ref().unwrap();
    let pet = components.schemas.as_ref().unwrap()["Pet"].as_item().unwrap();
    assert_eq!(pet.definition["required"], json!(["id", "name"]));
    assert!(components.responses.as_ref().unwrap()["Error"].as_item().is_some());
    assert_eq!(
        components.security_schemes.as_ref().unwrap()["api_key"]
            .as_item()
            .map(|scheme| scheme.type_name()),
        Some("apiKey")
    );
}

#[test]
fn test_unknown_keys_are_ignored() {
    let value = json!({
        "openapi": "3.0.0",
        "x-generator": "hand-written",
        "futureTopLevel": { "anything": [1, 2, 3] },
        "info": { "title": "t", "version": "v", "x-logo": { "url": "logo.png" } },
        "paths": {
            "/pets": { "get": { "x-internal": true, "operationId": "listPets" } }
        }
    });

    let document = extract_document(&value).unwrap();
    assert_eq!(
        document.path("/pets").unwrap().get.as_ref().unwrap().operation_id.as_deref(),
        Some("listPets")
    );
}

#[test]
fn test_malformed_union_value() {
    let value = json!({
        "openapi": "3.0.0",
        "info": { "title": "t", "version": "v" },
        "paths": { "/pets": { "get": { "parameters": ["limit"] } } }
    });

    let err = extract_document(&value).unwrap_err();
    assert_eq!(
        err,
        ExtractError::MalformedUnionValue(
            FieldPath::root()
                .key("paths")
                .key("/pets")
                .key("get")
                .key("parameters")
                .index(0)
        )
    );
}

#[test]
fn test_wrong_type_for_optional_field() {
    let value = json!({
        "openapi": "3.0.0",
        "info": { "title": "t", "version": "v" },
        "tags": { "name": "not-a-list" }
    });

    let err = extract_document(&value).unwrap_err();
    assert_eq!(err.to_string(), "expected array at `tags`, found object");
}

#[test]
fn test_root_must_be_an_object() {
    let err = extract_document(&json!(["openapi"])).unwrap_err();
    assert_eq!(err.to_string(), "expected object at `(root)`, found array");
}

#[test]
fn test_input_is_not_modified() {
    let value = json!({
        "openapi": "3.0.0",
        "info": { "title": "t", "version": "v" },
        "paths": { "/a": { "get": { "responses": { "default": { "description": "d" } } } } }
    });
    let before = value.clone();

    let first = extract_document(&value).unwrap();
    let second = extract_document(&value).unwrap();
    assert_eq!(value, before);
    assert_eq!(first, second);
}

#[test]
fn test_documents_extract_concurrently() {
    let extractor = &DocumentExtractor::new();
    let documents: Vec<Value> = (0..4)
        .map(|i| {
            json!({
                "openapi": "3.0.0",
                "info": { "title": format!("API {i}"), "version": "v" }
            })
        })
        .collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = documents
            .iter()
            .map(|value| scope.spawn(move || extractor.extract(value)))
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            let document = handle.join().unwrap().unwrap();
            assert_eq!(document.info.title, format!("API {i}"));
        }
    });
}

/// `paths["/p"].get` with `levels` callbacks nested inside each other
///
/// Every level adds four path segments (`callbacks`, name, expression,
/// `post`); the innermost operation carries `operationId: "leaf"`.
fn nested_callbacks(levels: usize) -> Value {
    let mut operation = json!({ "operationId": "leaf" });
    for level in 0..levels {
        operation = json!({
            "operationId": format!("level{level}"),
            "callbacks": { "cb": { "{$url}": { "post": operation } } }
        });
    }

    json!({
        "openapi": "3.1.0",
        "info": { "title": "t", "version": "v" },
        "paths": { "/p": { "get": operation } }
    })
}

/// Deepest nesting whose `operationId` still sits within the default limit
fn deepest_callback_nesting() -> usize {
    (ExtractOptions::DEFAULT_MAX_DEPTH - 4) / 4
}

#[test]
fn test_nested_callbacks_up_to_default_depth() {
    let levels = deepest_callback_nesting();
    let document = extract_document(&nested_callbacks(levels)).unwrap();

    let mut operation: &Operation = document.path("/p").unwrap().get.as_deref().unwrap();
    for _ in 0..levels {
        let callbacks = operation.callbacks.as_ref().unwrap();
        let callback = callbacks["cb"].as_item().unwrap();
        operation = callback
            .expression("{$url}")
            .and_then(|item| item.post.as_deref())
            .unwrap();
    }
    assert_eq!(operation.operation_id.as_deref(), Some("leaf"));
}

#[test]
fn test_nested_callbacks_past_default_depth() {
    let levels = deepest_callback_nesting() + 1;

    let err = extract_document(&nested_callbacks(levels)).unwrap_err();
    match err {
        ExtractError::DepthLimitExceeded { path, limit } => {
            assert_eq!(limit, ExtractOptions::DEFAULT_MAX_DEPTH);
            assert_eq!(path.depth(), limit + 1);
        }
        other => panic!("expected DepthLimitExceeded, got {other:?}"),
    }
}

#[test]
fn test_callback_nesting_never_overflows() {
    for levels in 0..=deepest_callback_nesting() + 8 {
        match extract_document(&nested_callbacks(levels)) {
            Ok(_) | Err(ExtractError::DepthLimitExceeded { .. }) => {}
            Err(other) => panic!("{levels} levels: unexpected error {other}"),
        }
    }
}

#[test]
fn test_nested_webhook_callbacks_respect_custom_limit() {
    let webhook = |operation: Value| json!({ "post": operation });
    let value = json!({
        "openapi": "3.1.0",
        "info": { "title": "t", "version": "v" },
        "webhooks": {
            "event": webhook(json!({
                "callbacks": { "cb": { "{$url}": webhook(json!({ "operationId": "inner" })) } }
            }))
        }
    });

    let path_of = |limit| {
        extract_document_with(&value, ExtractOptions::builder().max_depth(limit).build())
            .err()
            .and_then(|err| err.path().map(ToString::to_string))
    };

    assert_eq!(path_of(8), None);
    assert_eq!(
        path_of(7),
        Some(r#"webhooks.event.post.callbacks.cb["{$url}"].post.operationId"#.to_string())
    );
}

#[test]
fn test_encoding_header_nesting_never_overflows() {
    let deepest = ExtractOptions::DEFAULT_MAX_DEPTH / 6 + 4;
    let mut reached_limit = false;

    for levels in 0..=deepest {
        let mut header = json!({ "schema": { "type": "string" } });
        for _ in 0..levels {
            header = json!({
                "content": {
                    "text/plain": { "encoding": { "part": { "headers": { "X-Nested": header } } } }
                }
            });
        }
        let value = json!({
            "openapi": "3.1.0",
            "info": { "title": "t", "version": "v" },
            "components": { "headers": { "X-Nested": header } }
        });

        match extract_document(&value) {
            Ok(_) => {}
            Err(ExtractError::DepthLimitExceeded { .. }) => reached_limit = true,
            Err(other) => panic!("{levels} levels: unexpected error {other}"),
        }
    }

    assert!(reached_limit);
}
