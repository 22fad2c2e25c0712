//! Error types for the history service.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
  #[error("io: {0}")]
  Io(#[from] std::io::Error),

  #[error("json: {0}")]
  Json(#[from] serde_json::Error),

  #[error("config: {var}: {reason}")]
  Config { var: String, reason: String },
}

impl ServiceError {
  pub fn config(var: &str, reason: impl Into<String>) -> Self {
    Self::Config {
      var: var.to_string(),
      reason: reason.into(),
    }
  }
}
