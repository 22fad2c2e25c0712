//! SaasCan History Service
//!
//! HTTP service that runs idea analyses and keeps the capped, newest-first
//! result history (clear, export, optional file persistence). Also serves
//! the offline idea enhancement and a random canned idea.
//! Bind to 127.0.0.1 by default (internal only).

mod config;
mod date;
mod error;
mod handlers;
mod history;
mod state;
mod types;

use axum::{routing::get, routing::post, Router};
use std::sync::Arc;

pub use config::ServiceConfig;
pub use error::ServiceError;
pub use handlers::{
  analyze, clear_history, enhance, export_history, generate_idea, health, list_history,
};
pub use history::History;
pub use state::AppState;
pub use types::{AnalyzeResponse, EnhanceRequest, EnhanceResponse, IdeaResponse, QualityOutput};

pub fn router(state: Arc<AppState>) -> Router {
  Router::new()
    .route("/health", get(health))
    .route("/analyze", post(analyze))
    .route("/history", get(list_history).delete(clear_history))
    .route("/history/export", get(export_history))
    .route("/enhance", post(enhance))
    .route("/idea", get(generate_idea))
    .with_state(state)
}
