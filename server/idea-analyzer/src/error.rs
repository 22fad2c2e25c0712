//! Structured error types for the idea analyzer.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyzerError {
  #[error("unsupported language: {0:?} (expected en|ar)")]
  UnsupportedLanguage(String),

  #[error("validation: {field}: {reason}")]
  Validation { field: String, reason: String },

  #[error("json: {0}")]
  Json(#[from] serde_json::Error),
}

impl AnalyzerError {
  pub fn validation(field: &str, reason: &str) -> Self {
    Self::Validation {
      field: field.to_string(),
      reason: reason.to_string(),
    }
  }

  /// Field name for errors tied to one input field.
  pub fn field(&self) -> Option<&str> {
    match self {
      Self::UnsupportedLanguage(_) => Some("language"),
      Self::Validation { field, .. } => Some(field),
      Self::Json(_) => None,
    }
  }
}
