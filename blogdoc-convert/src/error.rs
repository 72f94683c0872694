//! Error types for document (de)serialization.
//!
//! Conversion between markup and documents never fails; these errors only
//! surface when loading or storing the editor's JSON form.

/// Result type for document JSON operations.
pub type DocumentResult<T> = Result<T, DocumentError>;

/// Errors that can occur while reading or writing document JSON.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
  #[error("Invalid document JSON: {0}")]
  Json(#[from] serde_json::Error),
}
