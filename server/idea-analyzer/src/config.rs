//! Scoring configuration with the reference defaults.

use crate::error::AnalyzerError;

/// Tunable constants for the keyword scorer and the content sampler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
  /// Score every analysis starts from.
  pub base_score: i32,
  /// Subtracted once per problem keyword found in the text.
  pub problem_penalty: i32,
  /// Added once per positive keyword found in the text.
  pub positive_bonus: i32,
  /// Inclusive lower clamp for the final score.
  pub min_score: u8,
  /// Inclusive upper clamp for the final score.
  pub max_score: u8,
  /// Divisor applied to `100 - score` to derive the item count.
  pub count_divisor: u8,
  /// Fewest issues/recommendations listed per record.
  pub min_items: usize,
  /// Most issues/recommendations listed per record.
  pub max_items: usize,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      base_score: 85,
      problem_penalty: 5,
      positive_bonus: 3,
      min_score: 35,
      max_score: 95,
      count_divisor: 15,
      min_items: 2,
      max_items: 5,
    }
  }
}

impl Config {
  /// Reject combinations the scorer and sampler cannot honor.
  pub fn validate(&self) -> Result<(), AnalyzerError> {
    if self.min_score > self.max_score {
      return Err(AnalyzerError::validation(
        "config.min_score",
        "must not exceed max_score",
      ));
    }
    if self.max_score > 100 {
      return Err(AnalyzerError::validation("config.max_score", "must be at most 100"));
    }
    if self.count_divisor == 0 {
      return Err(AnalyzerError::validation("config.count_divisor", "must be positive"));
    }
    if self.min_items == 0 || self.min_items > self.max_items {
      return Err(AnalyzerError::validation(
        "config.min_items",
        "must be positive and not exceed max_items",
      ));
    }
    Ok(())
  }
}
