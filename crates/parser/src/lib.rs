//! Typed extraction of OpenAPI 3.x documents
//!
//! This crate turns an untyped, already-parsed JSON tree (as produced by
//! `serde_json`) into the OpenAPI object model defined in
//! `openapi-extract-common`.
//!
//! ## Extraction Rules
//!
//! - Absent and `null` optional members both become `None`
//! - Every "object or `$ref`" position becomes a `ReferenceOr`, decided by
//!   the presence of a `$ref` key
//! - Path items keep their declaration order
//! - Empty `paths`, `responses`, `content` and `examples` objects count as
//!   absent
//! - Unknown keys are ignored
//!
//! Key order is only observable when `serde_json` was built with its
//! `preserve_order` feature, which this workspace enables.

pub mod openapi;

pub use openapi::DocumentExtractor;

use openapi_extract_common::{Document, ExtractOptions, Result};
use serde_json::Value;

/// Extract a document with default options
pub fn extract_document(value: &Value) -> Result<Document> {
    DocumentExtractor::new().extract(value)
}

/// Extract a document with the given options
pub fn extract_document_with(value: &Value, options: ExtractOptions) -> Result<Document> {
    DocumentExtractor::new().with_options(options).extract(value)
}
