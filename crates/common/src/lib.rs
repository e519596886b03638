//! Common types for openapi-extract
//!
//! This crate holds the OpenAPI 3.x object model produced by the extractor,
//! the error taxonomy shared by every conversion routine, and the options
//! that tune an extraction run.

pub mod model;
mod options;
mod path;

pub use model::*;
pub use options::ExtractOptions;
pub use path::{FieldPath, Segment};

use thiserror::Error;

/// Errors that can occur while extracting a document
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("missing required field `{0}`")]
    MissingRequiredField(FieldPath),

    #[error("`{0}` is neither an object nor a $ref")]
    MalformedUnionValue(FieldPath),

    #[error("expected {expected} at `{path}`, found {found}")]
    UnexpectedType {
        path: FieldPath,
        expected: &'static str,
        found: &'static str,
    },

    #[error("invalid value {value:?} at `{path}`, expected {expected}")]
    InvalidValue {
        path: FieldPath,
        value: String,
        expected: &'static str,
    },

    #[error("unsupported OpenAPI version {0:?}")]
    UnsupportedVersion(String),

    #[error("document nesting exceeds {limit} levels at `{path}`")]
    DepthLimitExceeded { path: FieldPath, limit: usize },
}

impl ExtractError {
    /// Location of the offending value, when the error has one
    pub fn path(&self) -> Option<&FieldPath> {
        match self {
            Self::MissingRequiredField(path) | Self::MalformedUnionValue(path) => Some(path),
            Self::UnexpectedType { path, .. }
            | Self::InvalidValue { path, .. }
            | Self::DepthLimitExceeded { path, .. } => Some(path),
            Self::UnsupportedVersion(_) => None,
        }
    }
}

/// Result type for extraction
pub type Result<T> = std::result::Result<T, ExtractError>;
