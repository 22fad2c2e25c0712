//! Record identifiers and creation timestamps.

use chrono::{DateTime, SubsecRound, Utc};
use rand::distributions::Alphanumeric;
use rand::Rng;

const SUFFIX_LEN: usize = 9;

/// `analysis_<unix millis>_<9 lowercase alphanumerics>`. Not a wire format;
/// callers should treat it as opaque.
pub fn new_id<R: Rng + ?Sized>(now: DateTime<Utc>, rng: &mut R) -> String {
  let suffix: String = (0..SUFFIX_LEN)
    .map(|_| char::from(rng.sample(Alphanumeric)).to_ascii_lowercase())
    .collect();
  format!("analysis_{}_{}", now.timestamp_millis(), suffix)
}

/// Current UTC instant at millisecond precision.
pub fn now_millis() -> DateTime<Utc> {
  Utc::now().trunc_subsecs(3)
}

#[cfg(test)]
mod tests {
  use super::*;
  use rand::rngs::StdRng;
  use rand::SeedableRng;

  #[test]
  fn id_shape() {
    let now = DateTime::parse_from_rfc3339("2025-01-15T10:30:00.123Z")
      .unwrap()
      .with_timezone(&Utc);
    let id = new_id(now, &mut StdRng::seed_from_u64(3));
    let suffix = id.strip_prefix("analysis_1736937000123_").unwrap();
    assert_eq!(suffix.len(), SUFFIX_LEN);
    assert!(suffix
      .chars()
      .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
  }

  #[test]
  fn timestamp_has_millisecond_precision() {
    let ts = now_millis();
    assert_eq!(ts.timestamp_subsec_nanos() % 1_000_000, 0);
  }
}
