//! Advisory input-length assessment shown next to the idea textarea.

use serde::Serialize;

use crate::i18n::Catalog;
use crate::types::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputQuality {
  TooShort,
  NeedsDetail,
  GoodLength,
  Detailed,
}

impl InputQuality {
  pub fn catalog_key(self) -> &'static str {
    match self {
      Self::TooShort => "quality.tooShort",
      Self::NeedsDetail => "quality.needsDetail",
      Self::GoodLength => "quality.goodLength",
      Self::Detailed => "quality.detailed",
    }
  }

  pub fn label(self, catalog: &Catalog, language: Language) -> String {
    catalog.t(language, self.catalog_key())
  }
}

/// Localized character counter, e.g. "40 characters".
pub fn characters_label(catalog: &Catalog, language: Language, count: usize) -> String {
  catalog.translate(language, "quality.characters", &[("count", &count.to_string())])
}

/// Classify by character count: <20, <50, <100, and longer.
pub fn assess_input(text: &str) -> InputQuality {
  match text.chars().count() {
    0..=19 => InputQuality::TooShort,
    20..=49 => InputQuality::NeedsDetail,
    50..=99 => InputQuality::GoodLength,
    _ => InputQuality::Detailed,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn thresholds() {
    assert_eq!(assess_input(""), InputQuality::TooShort);
    assert_eq!(assess_input(&"a".repeat(19)), InputQuality::TooShort);
    assert_eq!(assess_input(&"a".repeat(20)), InputQuality::NeedsDetail);
    assert_eq!(assess_input(&"a".repeat(50)), InputQuality::GoodLength);
    assert_eq!(assess_input(&"a".repeat(100)), InputQuality::Detailed);
  }

  #[test]
  fn counts_characters_not_bytes() {
    // 19 Arabic letters are 38 bytes.
    assert_eq!(assess_input(&"م".repeat(19)), InputQuality::TooShort);
  }

  #[test]
  fn labels_are_localized() {
    let catalog = Catalog::builtin();
    assert_eq!(InputQuality::GoodLength.label(&catalog, Language::En), "Good Length");
    assert_eq!(InputQuality::GoodLength.label(&catalog, Language::Ar), "طول جيد");
  }

  #[test]
  fn characters_label_fills_count() {
    let catalog = Catalog::builtin();
    assert_eq!(characters_label(&catalog, Language::En, 40), "40 characters");
    assert_eq!(characters_label(&catalog, Language::Ar, 7), "7 حرف");
  }
}
