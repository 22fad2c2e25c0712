//! Service configuration from environment variables.

use std::path::PathBuf;

use crate::error::ServiceError;

pub const DEFAULT_PORT: u16 = 5005;
pub const DEFAULT_HISTORY_CAP: usize = 50;
pub const DEFAULT_MAX_INPUT_CHARS: usize = 5000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
  pub port: u16,
  /// JSON file the history is persisted to; in-memory only when unset.
  pub history_path: Option<PathBuf>,
  /// Most records kept, newest first.
  pub history_cap: usize,
  /// Longest idea text accepted by `/analyze`, in characters.
  pub max_input_chars: usize,
  /// Replacement keyword/pool tables for the analyzer.
  pub tables_path: Option<PathBuf>,
}

impl Default for ServiceConfig {
  fn default() -> Self {
    Self {
      port: DEFAULT_PORT,
      history_path: None,
      history_cap: DEFAULT_HISTORY_CAP,
      max_input_chars: DEFAULT_MAX_INPUT_CHARS,
      tables_path: None,
    }
  }
}

impl ServiceConfig {
  /// `PORT`, `HISTORY_PATH`, `HISTORY_CAP`, `MAX_INPUT_CHARS`, `IDEA_ANALYZER_TABLES`.
  pub fn from_env() -> Result<Self, ServiceError> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ServiceError> {
    let defaults = Self::default();
    let config = Self {
      port: parse_or("PORT", get("PORT"), defaults.port)?,
      history_path: get("HISTORY_PATH").filter(|p| !p.is_empty()).map(PathBuf::from),
      history_cap: parse_or("HISTORY_CAP", get("HISTORY_CAP"), defaults.history_cap)?,
      max_input_chars: parse_or(
        "MAX_INPUT_CHARS",
        get("MAX_INPUT_CHARS"),
        defaults.max_input_chars,
      )?,
      tables_path: get("IDEA_ANALYZER_TABLES")
        .filter(|p| !p.is_empty())
        .map(PathBuf::from),
    };
    if config.history_cap == 0 {
      return Err(ServiceError::config("HISTORY_CAP", "must be positive"));
    }
    if config.max_input_chars == 0 {
      return Err(ServiceError::config("MAX_INPUT_CHARS", "must be positive"));
    }
    Ok(config)
  }
}

fn parse_or<T: std::str::FromStr>(
  var: &str,
  raw: Option<String>,
  default: T,
) -> Result<T, ServiceError>
where
  T::Err: std::fmt::Display,
{
  match raw {
    Some(s) => s
      .trim()
      .parse()
      .map_err(|e: T::Err| ServiceError::config(var, e.to_string())),
    None => Ok(default),
  }
}
