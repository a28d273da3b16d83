//! Error types for box rendering and box documents.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when building or rendering a box.
///
/// Rendering typed items through [`TextBox::render`](crate::TextBox::render)
/// never fails. These errors come from the dynamic paths: box documents,
/// style names and color specifications.
#[derive(Debug, Error)]
pub enum BoxError {
    /// A top-level content item is neither plain text nor a section.
    #[error("unsupported content type at item {index}: {kind}")]
    UnsupportedContent { index: usize, kind: &'static str },

    /// A style name that matches none of the predefined border styles.
    #[error("unknown box style: {0}")]
    UnknownStyle(String),

    /// A color specification that could not be parsed.
    #[error("invalid color '{spec}': {reason}")]
    InvalidColor { spec: String, reason: String },

    /// YAML document could not be parsed.
    #[error("invalid YAML document: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON document could not be parsed.
    #[error("invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),

    /// A document file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A document file extension that maps to no known format.
    #[error(
        "unsupported document format: {0} (expected one of: {exts})",
        exts = crate::document::DOCUMENT_EXTENSIONS.join(", ")
    )]
    UnsupportedFormat(String),

    /// A margin or padding in a document above [`MAX_SPACING`](crate::MAX_SPACING).
    #[error("{field} of {value} exceeds the maximum of {}", crate::MAX_SPACING)]
    InvalidNumber { field: &'static str, value: usize },
}

/// Result type for box operations.
pub type Result<T> = std::result::Result<T, BoxError>;
