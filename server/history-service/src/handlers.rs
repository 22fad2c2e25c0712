//! HTTP handlers for the history service.

use axum::{
  extract::State,
  http::{header, StatusCode},
  response::IntoResponse,
  Json,
};
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};

use idea_analyzer::{
  assess_input, characters_label, fallback_enhancement, random_idea, AnalysisRecord,
  AnalyzeRequest, ErrorOutput,
};

use crate::date;
use crate::state::AppState;
use crate::types::{AnalyzeResponse, EnhanceRequest, EnhanceResponse, IdeaResponse, QualityOutput};

pub type ApiError = (StatusCode, Json<ErrorOutput>);

fn bad_request(out: ErrorOutput) -> ApiError {
  (StatusCode::BAD_REQUEST, Json(out))
}

pub async fn health() -> &'static str {
  "ok"
}

pub async fn analyze(
  State(state): State<Arc<AppState>>,
  Json(payload): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
  if payload.text.trim().is_empty() {
    return Err(bad_request(
      ErrorOutput::new("must not be empty").with_field("text"),
    ));
  }
  let characters = payload.text.chars().count();
  if characters > state.max_input_chars {
    return Err(bad_request(
      ErrorOutput::new(format!(
        "{} characters exceeds the limit of {}",
        characters, state.max_input_chars
      ))
      .with_field("text"),
    ));
  }

  let record = state.analyzer.handle(&payload).map_err(|e| {
    warn!(error = %e, "analyze: rejected request");
    bad_request(ErrorOutput::from(&e))
  })?;

  let catalog = state.analyzer.catalog();
  let level = assess_input(&payload.text);
  let quality = QualityOutput {
    level,
    label: level.label(catalog, record.language),
    characters,
    characters_label: characters_label(catalog, record.language, characters),
  };

  state.history().push(record.clone());
  state.persist().await;
  info!(id = %record.id, score = record.score, language = %record.language, "analyze: stored");

  Ok(Json(AnalyzeResponse { record, quality }))
}

pub async fn list_history(State(state): State<Arc<AppState>>) -> Json<Vec<AnalysisRecord>> {
  Json(state.history().records().to_vec())
}

pub async fn clear_history(State(state): State<Arc<AppState>>) -> StatusCode {
  state.history().clear();
  state.persist().await;
  info!("history cleared");
  StatusCode::NO_CONTENT
}

pub async fn export_history(
  State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
  let body = state.history().export_json().map_err(|e| {
    (
      StatusCode::INTERNAL_SERVER_ERROR,
      Json(ErrorOutput::new(e.to_string())),
    )
  })?;
  let disposition = format!(
    "attachment; filename=\"{}\"",
    date::export_filename(Utc::now())
  );
  Ok((
    [
      (header::CONTENT_TYPE, "application/json".to_string()),
      (header::CONTENT_DISPOSITION, disposition),
    ],
    body,
  ))
}

/// Offline enhancement of the idea text; blank text is rejected.
pub async fn enhance(
  Json(payload): Json<EnhanceRequest>,
) -> Result<Json<EnhanceResponse>, ApiError> {
  if payload.text.trim().is_empty() {
    return Err(bad_request(
      ErrorOutput::new("must not be empty").with_field("text"),
    ));
  }
  Ok(Json(EnhanceResponse {
    enhanced: fallback_enhancement(&payload.text),
  }))
}

pub async fn generate_idea() -> Json<IdeaResponse> {
  Json(IdeaResponse { idea: random_idea() })
}
