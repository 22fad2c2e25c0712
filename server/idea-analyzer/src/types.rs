//! Core types for the idea analyzer (JSON contracts + language tag).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AnalyzerError;

// ---------------------------------------------------------------------------
// Language
// ---------------------------------------------------------------------------

/// Supported analysis languages. Anything else is rejected, never defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
  En,
  Ar,
}

impl Language {
  pub const ALL: [Language; 2] = [Language::En, Language::Ar];

  pub fn as_str(self) -> &'static str {
    match self {
      Self::En => "en",
      Self::Ar => "ar",
    }
  }
}

impl fmt::Display for Language {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Language {
  type Err = AnalyzerError;

  /// Accepts `en`/`ar` in any case, surrounding whitespace ignored.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "en" => Ok(Self::En),
      "ar" => Ok(Self::Ar),
      _ => Err(AnalyzerError::UnsupportedLanguage(s.to_string())),
    }
  }
}

// ---------------------------------------------------------------------------
// Inbound (what the caller sends)
// ---------------------------------------------------------------------------

/// One analysis request. `language` stays a string so unsupported tags
/// surface as `UnsupportedLanguage` rather than a generic parse error.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
  pub text: String,
  pub language: String,
  /// Raw reply text from the external analysis provider, when one was reached.
  #[serde(default)]
  pub provider_reply: Option<String>,
}

impl AnalyzeRequest {
  pub fn language(&self) -> Result<Language, AnalyzerError> {
    self.language.parse()
  }
}

// ---------------------------------------------------------------------------
// Outbound (what we emit)
// ---------------------------------------------------------------------------

/// The result of one analysis. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRecord {
  pub id: String,
  pub input: String,
  pub score: u8,
  pub issues: Vec<String>,
  pub recommendations: Vec<String>,
  pub timestamp: DateTime<Utc>,
  pub language: Language,
}

/// Structured error output for rejected requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
  pub error: bool,
  pub message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub field: Option<String>,
}

impl ErrorOutput {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      error: true,
      message: message.into(),
      field: None,
    }
  }

  pub fn with_field(mut self, field: impl Into<String>) -> Self {
    self.field = Some(field.into());
    self
  }
}

impl From<&AnalyzerError> for ErrorOutput {
  fn from(e: &AnalyzerError) -> Self {
    let out = ErrorOutput::new(e.to_string());
    match e.field() {
      Some(field) => out.with_field(field),
      None => out,
    }
  }
}
