//! Binary entrypoint: read one JSON request from stdin, write one JSON object to stdout.
//!
//! Output is an AnalysisRecord, or an ErrorOutput (exit code 1) when the
//! request is malformed or names an unsupported language. Logs go to stderr.

use idea_analyzer::{AnalyzeRequest, Analyzer, AnalyzerError, Config, ErrorOutput, Tables};
use std::io::{self, Read, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Optional path to a replacement keyword/pool tables JSON file.
const TABLES_ENV: &str = "IDEA_ANALYZER_TABLES";

fn main() {
  init_tracing();
  match run_binary() {
    Ok(true) => {}
    Ok(false) => std::process::exit(1),
    Err(e) => {
      error!("idea-analyzer error: {}", e);
      std::process::exit(1);
    }
  }
}

fn init_tracing() {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(io::stderr)
    .init();
}

fn load_analyzer() -> Result<Analyzer, Box<dyn std::error::Error>> {
  match std::env::var(TABLES_ENV) {
    Ok(path) => {
      let raw = std::fs::read_to_string(&path)?;
      let analyzer = Analyzer::new(Config::default(), Tables::from_json(&raw)?)?;
      info!(%path, "loaded tables");
      Ok(analyzer)
    }
    Err(_) => Ok(Analyzer::with_defaults()),
  }
}

/// Returns `Ok(false)` when a structured error was written instead of a record.
fn run_binary() -> Result<bool, Box<dyn std::error::Error>> {
  let analyzer = load_analyzer()?;

  let mut raw = String::new();
  io::stdin().lock().read_to_string(&mut raw)?;

  let result = serde_json::from_str::<AnalyzeRequest>(&raw)
    .map_err(AnalyzerError::from)
    .and_then(|request| analyzer.handle(&request));

  let mut out = io::stdout().lock();
  let ok = match result {
    Ok(record) => {
      serde_json::to_writer(&mut out, &record)?;
      true
    }
    Err(e) => {
      error!(error = %e, "rejected request");
      serde_json::to_writer(&mut out, &ErrorOutput::from(&e))?;
      false
    }
  };
  writeln!(out)?;
  out.flush()?;
  Ok(ok)
}
