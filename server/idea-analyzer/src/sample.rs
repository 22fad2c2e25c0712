//! Sampling of canned issues and recommendations.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::Config;
use crate::tables::LanguageTables;

/// How many issues (and recommendations) a score earns:
/// `clamp(floor((100 - score) / divisor), min_items, max_items)`.
pub fn item_count(score: u8, config: &Config) -> usize {
  let headroom = 100u8.saturating_sub(score) / config.count_divisor;
  (headroom as usize).clamp(config.min_items, config.max_items)
}

/// Shuffle a copy of `pool` and keep the first `count` entries.
pub fn sample<R: Rng + ?Sized>(pool: &[String], count: usize, rng: &mut R) -> Vec<String> {
  let mut shuffled: Vec<&String> = pool.iter().collect();
  shuffled.shuffle(rng);
  shuffled.into_iter().take(count).cloned().collect()
}

/// Issues and recommendations for one record. The two lists are drawn
/// independently; `issues[i]` is not paired with `recommendations[i]`.
pub fn sample_content<R: Rng + ?Sized>(
  score: u8,
  tables: &LanguageTables,
  config: &Config,
  rng: &mut R,
) -> (Vec<String>, Vec<String>) {
  let count = item_count(score, config);
  let issues = sample(&tables.issues, count, rng);
  let recommendations = sample(&tables.recommendations, count, rng);
  (issues, recommendations)
}
