//! Normalize the raw reply of the external analysis provider.
//!
//! The provider is asked for `{"score": n, "issues": [...], "recommendations": [...]}`
//! but replies are free text: often fenced in Markdown, sometimes missing
//! fields, occasionally not JSON at all.

use serde_json::Value;

use crate::error::AnalyzerError;

pub const PROVIDER_MIN_SCORE: f64 = 40.0;
pub const PROVIDER_MAX_SCORE: f64 = 95.0;
pub const PROVIDER_DEFAULT_SCORE: u8 = 75;

/// Provider fields after normalization. `None` lists mean "use the localized default".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderReply {
  pub score: u8,
  pub issues: Option<Vec<String>>,
  pub recommendations: Option<Vec<String>>,
}

/// Drop Markdown code fences (```` ```json ```` and ```` ``` ````) and surrounding whitespace.
pub fn strip_fences(raw: &str) -> &str {
  let s = raw.trim();
  let s = s
    .strip_prefix("```json")
    .or_else(|| s.strip_prefix("```"))
    .unwrap_or(s);
  let s = s.strip_suffix("```").unwrap_or(s);
  s.trim()
}

/// Parse a provider reply. Errors mean the caller should fall back to the
/// local analysis.
pub fn parse_reply(raw: &str) -> Result<ProviderReply, AnalyzerError> {
  let value: Value = serde_json::from_str(strip_fences(raw))?;
  let Value::Object(obj) = value else {
    return Err(AnalyzerError::validation("provider_reply", "expected a JSON object"));
  };

  let score = obj
    .get("score")
    .and_then(Value::as_f64)
    .map(|s| s.round().clamp(PROVIDER_MIN_SCORE, PROVIDER_MAX_SCORE) as u8)
    .unwrap_or(PROVIDER_DEFAULT_SCORE);

  Ok(ProviderReply {
    score,
    issues: string_list(obj.get("issues")),
    recommendations: string_list(obj.get("recommendations")),
  })
}

/// String elements of a JSON array; `None` when absent or not an array.
/// Non-string elements are dropped, so `[]` and `[1, 2]` both yield `Some(vec![])`.
fn string_list(value: Option<&Value>) -> Option<Vec<String>> {
  let items = value?
    .as_array()?
    .iter()
    .filter_map(|v| v.as_str().map(str::to_string))
    .collect();
  Some(items)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn plain_json_reply() {
    let reply = parse_reply(r#"{"score": 82, "issues": ["a", "b"], "recommendations": ["c"]}"#)
      .unwrap();
    assert_eq!(reply.score, 82);
    assert_eq!(reply.issues, Some(vec!["a".to_string(), "b".to_string()]));
    assert_eq!(reply.recommendations, Some(vec!["c".to_string()]));
  }

  #[test]
  fn fenced_reply() {
    let raw = "```json\n{\"score\": 60.6, \"issues\": [\"x\"]}\n```\n";
    let reply = parse_reply(raw).unwrap();
    assert_eq!(reply.score, 61);
    assert_eq!(reply.recommendations, None);
  }

  #[test]
  fn bare_fence_reply() {
    let reply = parse_reply("```\n{\"score\": 90}\n```").unwrap();
    assert_eq!(reply.score, 90);
  }

  #[test]
  fn score_clamped_and_defaulted() {
    assert_eq!(parse_reply(r#"{"score": 12}"#).unwrap().score, 40);
    assert_eq!(parse_reply(r#"{"score": 120}"#).unwrap().score, 95);
    assert_eq!(parse_reply(r#"{"score": "high"}"#).unwrap().score, 75);
    assert_eq!(parse_reply(r#"{}"#).unwrap().score, 75);
  }

  #[test]
  fn non_array_lists_are_defaulted() {
    let reply = parse_reply(r#"{"issues": "one big issue"}"#).unwrap();
    assert_eq!(reply.issues, None);
    assert_eq!(reply.recommendations, None);
  }

  #[test]
  fn empty_arrays_are_kept_empty() {
    let reply = parse_reply(r#"{"score": 70, "issues": [], "recommendations": []}"#).unwrap();
    assert_eq!(reply.score, 70);
    assert_eq!(reply.issues, Some(vec![]));
    assert_eq!(reply.recommendations, Some(vec![]));
  }

  #[test]
  fn non_string_elements_are_dropped() {
    let reply = parse_reply(r#"{"issues": ["churn", 3, null], "recommendations": [1, 2]}"#)
      .unwrap();
    assert_eq!(reply.issues, Some(vec!["churn".to_string()]));
    assert_eq!(reply.recommendations, Some(vec![]));
  }

  #[test]
  fn unparsable_reply_is_error() {
    assert!(matches!(
      parse_reply("Sure! Here is my analysis..."),
      Err(AnalyzerError::Json(_))
    ));
    assert!(parse_reply("[1, 2, 3]").is_err());
  }
}
