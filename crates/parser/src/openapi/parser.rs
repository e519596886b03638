//! Extraction entry point

use super::converter;
use super::node::Node;
use openapi_extract_common::{Document, ExtractError, ExtractOptions, OpenApiVersion, Result};
use serde_json::Value;
use tracing::debug;

/// Turns untyped OpenAPI JSON into a [`Document`]
///
/// Holds only its options; one extractor can convert any number of
/// documents, from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct DocumentExtractor {
    options: ExtractOptions,
}

impl DocumentExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the extraction options
    ///
    /// # Example
    /// ```rust,ignore
    /// let extractor = DocumentExtractor::new()
    ///     .with_options(ExtractOptions::builder().strict_version(true).build());
    /// ```
    pub fn with_options(mut self, options: ExtractOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Convert a parsed OpenAPI document
    ///
    /// The input is only read. The first structural problem aborts the
    /// conversion and is reported with the path of the offending value.
    pub fn extract(&self, value: &Value) -> Result<Document> {
        let root = Node::root(value, self.options.max_depth);

        if self.options.strict_version {
            let version = root.required_string("openapi")?;
            if version.parse::<OpenApiVersion>().is_err() {
                return Err(ExtractError::UnsupportedVersion(version));
            }
        }

        let document = converter::convert_document(&root)?;
        debug!(
            openapi = %document.openapi,
            title = %document.info.title,
            paths = document.paths.as_ref().map_or(0, Vec::len),
            "extracted OpenAPI document"
        );

        Ok(document)
    }
}
