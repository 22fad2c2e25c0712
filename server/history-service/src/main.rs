//! Binary entrypoint for the history service.

use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use history_service::{AppState, History, ServiceConfig};
use idea_analyzer::{Analyzer, Config, Tables};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  tracing_subscriber::fmt().with_env_filter(filter).init();

  let config = ServiceConfig::from_env()?;

  let analyzer = match &config.tables_path {
    Some(path) => {
      let raw = std::fs::read_to_string(path)?;
      Analyzer::new(Config::default(), Tables::from_json(&raw)?)?
    }
    None => Analyzer::with_defaults(),
  };

  let history = match &config.history_path {
    Some(path) => History::load(path, config.history_cap).unwrap_or_else(|e| {
      warn!(path = %path.display(), error = %e, "unreadable history, starting empty");
      History::new(config.history_cap)
    }),
    None => History::new(config.history_cap),
  };
  info!(records = history.len(), cap = history.cap(), "history loaded");

  let mut state = AppState::new(analyzer, history, config.max_input_chars);
  if let Some(path) = config.history_path.clone() {
    state = state.with_history_path(path);
  }

  let app = history_service::router(Arc::new(state)).layer(CorsLayer::permissive());

  let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
  info!("history-service listening on http://{}", addr);

  let listener = tokio::net::TcpListener::bind(addr).await?;
  axum::serve(listener, app).await?;

  Ok(())
}
