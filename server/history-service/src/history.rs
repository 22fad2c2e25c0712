//! Capped, newest-first analysis history with JSON file persistence.

use std::fs;
use std::path::Path;

use idea_analyzer::AnalysisRecord;

use crate::error::ServiceError;

#[derive(Debug, Clone)]
pub struct History {
  cap: usize,
  records: Vec<AnalysisRecord>,
}

impl History {
  pub fn new(cap: usize) -> Self {
    Self {
      cap,
      records: Vec::new(),
    }
  }

  /// Read a persisted history. A missing file is an empty history; lists
  /// longer than `cap` keep their newest `cap` entries.
  pub fn load(path: &Path, cap: usize) -> Result<Self, ServiceError> {
    let raw = match fs::read_to_string(path) {
      Ok(raw) => raw,
      Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::new(cap)),
      Err(e) => return Err(e.into()),
    };
    let mut records: Vec<AnalysisRecord> = serde_json::from_str(&raw)?;
    records.truncate(cap);
    Ok(Self { cap, records })
  }

  /// Write the whole list, replacing the previous file via rename.
  pub fn save(&self, path: &Path) -> Result<(), ServiceError> {
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, serde_json::to_vec(&self.records)?)?;
    fs::rename(&tmp, path)?;
    Ok(())
  }

  /// Insert at the front; the oldest entries beyond `cap` are dropped.
  pub fn push(&mut self, record: AnalysisRecord) {
    self.records.insert(0, record);
    self.records.truncate(self.cap);
  }

  pub fn clear(&mut self) {
    self.records.clear();
  }

  pub fn records(&self) -> &[AnalysisRecord] {
    &self.records
  }

  pub fn len(&self) -> usize {
    self.records.len()
  }

  pub fn is_empty(&self) -> bool {
    self.records.is_empty()
  }

  pub fn cap(&self) -> usize {
    self.cap
  }

  /// Pretty-printed JSON array, as offered for download.
  pub fn export_json(&self) -> Result<String, ServiceError> {
    Ok(serde_json::to_string_pretty(&self.records)?)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use idea_analyzer::{Analyzer, Language};
  use std::path::PathBuf;

  fn record(text: &str) -> AnalysisRecord {
    Analyzer::with_defaults().analyze(text, Language::En)
  }

  fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("history-service-{}-{}.json", name, std::process::id()))
  }

  #[test]
  fn push_is_newest_first() {
    let mut history = History::new(50);
    history.push(record("first"));
    history.push(record("second"));
    assert_eq!(history.records()[0].input, "second");
    assert_eq!(history.records()[1].input, "first");
  }

  #[test]
  fn push_caps_length() {
    let mut history = History::new(3);
    for i in 0..5 {
      history.push(record(&format!("idea {}", i)));
    }
    assert_eq!(history.len(), 3);
    let inputs: Vec<_> = history.records().iter().map(|r| r.input.as_str()).collect();
    assert_eq!(inputs, vec!["idea 4", "idea 3", "idea 2"]);
  }

  #[test]
  fn clear_empties() {
    let mut history = History::new(5);
    history.push(record("x"));
    history.clear();
    assert!(history.is_empty());
  }

  #[test]
  fn missing_file_loads_empty() {
    let history = History::load(&temp_path("missing"), 50).unwrap();
    assert!(history.is_empty());
    assert_eq!(history.cap(), 50);
  }

  #[test]
  fn save_then_load_preserves_records() {
    let path = temp_path("roundtrip");
    let mut history = History::new(50);
    history.push(record("slow checkout"));
    history.push(record("easy onboarding"));
    history.save(&path).unwrap();

    let loaded = History::load(&path, 50).unwrap();
    assert_eq!(loaded.records(), history.records());

    let truncated = History::load(&path, 1).unwrap();
    assert_eq!(truncated.len(), 1);
    assert_eq!(truncated.records()[0].input, "easy onboarding");
    let _ = fs::remove_file(&path);
  }

  #[test]
  fn corrupt_file_is_error() {
    let path = temp_path("corrupt");
    fs::write(&path, "not json").unwrap();
    assert!(matches!(History::load(&path, 50), Err(ServiceError::Json(_))));
    let _ = fs::remove_file(&path);
  }

  #[test]
  fn export_is_pretty_array() {
    let mut history = History::new(5);
    history.push(record("x"));
    let exported = history.export_json().unwrap();
    assert!(exported.starts_with("[\n"));
    let back: Vec<AnalysisRecord> = serde_json::from_str(&exported).unwrap();
    assert_eq!(back, history.records());
  }
}
