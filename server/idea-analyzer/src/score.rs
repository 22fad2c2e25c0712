//! Viability score from keyword presence.
//!
//! Illustrative heuristic, not a validated model: it only exists so the
//! product has an offline answer when the real provider is unreachable.

use crate::config::Config;
use crate::tables::LanguageTables;

/// Unclamped score: base, minus a penalty per problem keyword present, plus a
/// bonus per positive keyword present. Each keyword counts at most once.
///
/// Matching is plain substring search on the lower-cased text, so "broken"
/// also fires inside "unbroken".
pub fn raw_score(text: &str, keywords: &LanguageTables, config: &Config) -> i32 {
  let lower = text.to_lowercase();
  let mut score = config.base_score;
  for keyword in &keywords.problem_keywords {
    if lower.contains(keyword.as_str()) {
      score -= config.problem_penalty;
    }
  }
  for keyword in &keywords.positive_keywords {
    if lower.contains(keyword.as_str()) {
      score += config.positive_bonus;
    }
  }
  score
}

/// Score clamped to `[min_score, max_score]`.
pub fn compute_score(text: &str, keywords: &LanguageTables, config: &Config) -> u8 {
  raw_score(text, keywords, config).clamp(config.min_score as i32, config.max_score as i32) as u8
}
