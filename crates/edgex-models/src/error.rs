//! Error types for the models crate.

use thiserror::Error;

/// Result type for encoding and decoding operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the structured encode/decode entry points.
///
/// The `Display` impls of the records never produce these; they fall back
/// to the underlying error message instead.
#[derive(Debug, Error)]
pub enum Error {
    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML encoding or decoding failed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
