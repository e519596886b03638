//! Extraction options

use serde::Deserialize;

/// Knobs for a single extraction run
///
/// Hosts usually embed this in their own configuration file, so it
/// deserializes with every field defaulted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, bon::Builder)]
#[serde(default)]
pub struct ExtractOptions {
    /// Deepest field path the extractor will descend into
    #[builder(default = ExtractOptions::DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Reject documents whose `openapi` field is not 3.0.x or 3.1.x
    #[builder(default)]
    pub strict_version: bool,
}

impl ExtractOptions {
    /// Same as `serde_json`'s own parser recursion limit, so the default
    /// never rejects a document `serde_json::from_str` accepted.
    pub const DEFAULT_MAX_DEPTH: usize = 128;
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
            strict_version: false,
        }
    }
}
