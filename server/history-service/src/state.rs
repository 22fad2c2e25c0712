//! Shared application state.

use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

use idea_analyzer::Analyzer;
use tracing::error;

use crate::history::History;

pub struct AppState {
  pub analyzer: Analyzer,
  pub history: Mutex<History>,
  pub history_path: Option<PathBuf>,
  pub max_input_chars: usize,
  // Serializes file writes so an older snapshot never lands after a newer one.
  persist_lock: tokio::sync::Mutex<()>,
}

impl AppState {
  pub fn new(analyzer: Analyzer, history: History, max_input_chars: usize) -> Self {
    Self {
      analyzer,
      history: Mutex::new(history),
      history_path: None,
      max_input_chars,
      persist_lock: tokio::sync::Mutex::new(()),
    }
  }

  pub fn with_history_path(mut self, path: PathBuf) -> Self {
    self.history_path = Some(path);
    self
  }

  /// History is plain data, so a poisoned lock still holds a usable list.
  /// Never hold the guard across an `.await`.
  pub fn history(&self) -> MutexGuard<'_, History> {
    self.history.lock().unwrap_or_else(|e| e.into_inner())
  }

  /// Write the current history to disk when persistence is configured.
  ///
  /// The snapshot is taken after the write lock is acquired and the file I/O
  /// runs on the blocking pool. Failures are logged; the in-memory list stays
  /// authoritative.
  pub async fn persist(&self) {
    let Some(path) = self.history_path.clone() else {
      return;
    };
    let _writing = self.persist_lock.lock().await;
    let snapshot = self.history().clone();
    let written = tokio::task::spawn_blocking(move || snapshot.save(&path).map_err(|e| (path, e)));
    match written.await {
      Ok(Ok(())) => {}
      Ok(Err((path, e))) => {
        error!(path = %path.display(), error = %e, "failed to persist history");
      }
      Err(e) => error!(error = %e, "history write task failed"),
    }
  }
}
