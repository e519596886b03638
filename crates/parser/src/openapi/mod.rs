//! OpenAPI 3.x extraction
//!
//! Walks an already-parsed JSON document top-down and builds the typed
//! object model from `openapi-extract-common`. Nothing is resolved: `$ref`s
//! become [`Reference`](openapi_extract_common::Reference) values carrying
//! the verbatim pointer.
//!
//! ## Usage
//! ```rust,ignore
//! use openapi_extract_parser::openapi::DocumentExtractor;
//!
//! let value: serde_json::Value = serde_json::from_str(&text)?;
//! let document = DocumentExtractor::new().extract(&value)?;
//! ```

mod converter;
mod node;
mod parser;

pub use parser::DocumentExtractor;
