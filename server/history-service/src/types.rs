//! Request/response types for the history service.

use idea_analyzer::{AnalysisRecord, InputQuality};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct QualityOutput {
  pub level: InputQuality,
  pub label: String,
  pub characters: usize,
  /// Localized counter text, e.g. "40 characters".
  pub characters_label: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
  pub record: AnalysisRecord,
  pub quality: QualityOutput,
}

#[derive(Debug, Deserialize)]
pub struct EnhanceRequest {
  pub text: String,
}

#[derive(Debug, Serialize)]
pub struct EnhanceResponse {
  pub enhanced: String,
}

#[derive(Debug, Serialize)]
pub struct IdeaResponse {
  pub idea: &'static str,
}
