//! Key-path translation lookup with English fallback.

use serde_json::{json, Value};

use crate::error::AnalyzerError;
use crate::types::Language;

/// Nested string catalogs, one JSON object per language.
#[derive(Debug, Clone)]
pub struct Catalog {
  en: Value,
  ar: Value,
}

impl Catalog {
  pub fn new(en: Value, ar: Value) -> Self {
    Self { en, ar }
  }

  /// Build from two JSON documents (e.g. `locales/en/common.json`, `locales/ar/common.json`).
  pub fn from_json(en: &str, ar: &str) -> Result<Self, AnalyzerError> {
    Ok(Self::new(serde_json::from_str(en)?, serde_json::from_str(ar)?))
  }

  /// Strings used by the analyzer and the history service.
  pub fn builtin() -> Self {
    Self::new(
      json!({
        "provider": {
          "noIssues": "No specific issues identified",
          "defaultRecommendation": "Focus on market validation"
        },
        "quality": {
          "tooShort": "Too Short",
          "needsDetail": "Add More Details",
          "goodLength": "Good Length",
          "detailed": "Detailed Description",
          "characters": "{count} characters"
        }
      }),
      json!({
        "provider": {
          "noIssues": "لم يتم تحديد مشاكل محددة",
          "defaultRecommendation": "ركز على التحقق من السوق"
        },
        "quality": {
          "tooShort": "قصير جداً",
          "needsDetail": "أضف المزيد من التفاصيل",
          "goodLength": "طول جيد",
          "detailed": "وصف مفصل",
          "characters": "{count} حرف"
        }
      }),
    )
  }

  fn root(&self, language: Language) -> &Value {
    match language {
      Language::En => &self.en,
      Language::Ar => &self.ar,
    }
  }

  /// Resolve a dotted key (`quality.tooShort`). Falls back to English when the
  /// active language lacks the key, and to the key itself when neither has a
  /// string there. Every `{name}` is replaced with its value from `replacements`.
  pub fn translate(&self, language: Language, key: &str, replacements: &[(&str, &str)]) -> String {
    let found = lookup(self.root(language), key).or_else(|| lookup(&self.en, key));
    let Some(template) = found else {
      return key.to_string();
    };
    replacements
      .iter()
      .fold(template.to_string(), |s, (name, value)| {
        s.replace(&format!("{{{}}}", name), value)
      })
  }

  pub fn t(&self, language: Language, key: &str) -> String {
    self.translate(language, key, &[])
  }
}

fn lookup<'a>(root: &'a Value, key: &str) -> Option<&'a str> {
  key
    .split('.')
    .try_fold(root, |node, segment| node.as_object()?.get(segment))?
    .as_str()
}
