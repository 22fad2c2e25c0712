//! Date formatting utilities.

use chrono::{DateTime, Utc};

/// Download name for a history export taken at `now`: `saascan-results-YYYY-MM-DD.json` (UTC).
pub fn export_filename(now: DateTime<Utc>) -> String {
  format!("saascan-results-{}.json", now.format("%Y-%m-%d"))
}
