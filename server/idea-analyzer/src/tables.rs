//! Per-language keyword and canned-content tables.
//!
//! Tables are plain data handed to the analyzer at construction. They are
//! validated once and never written afterwards.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::config::Config;
use crate::error::AnalyzerError;
use crate::types::Language;

/// Keywords and pools for one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageTables {
  pub problem_keywords: Vec<String>,
  pub positive_keywords: Vec<String>,
  pub issues: Vec<String>,
  pub recommendations: Vec<String>,
}

/// Tables for every supported language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tables {
  pub en: LanguageTables,
  pub ar: LanguageTables,
}

impl Tables {
  /// Reference keyword lists and pools (10 issues, 10 recommendations per language).
  pub fn builtin() -> Self {
    Self {
      en: LanguageTables {
        problem_keywords: strings(&[
          "problem",
          "issue",
          "difficult",
          "confusing",
          "abandon",
          "error",
          "slow",
          "broken",
        ]),
        positive_keywords: strings(&[
          "good",
          "easy",
          "clear",
          "simple",
          "fast",
          "intuitive",
          "user-friendly",
        ]),
        issues: strings(&[
          "Complex navigation structure may confuse users",
          "Too many required form fields could cause abandonment",
          "Lack of clear call-to-action buttons",
          "Insufficient visual hierarchy in content layout",
          "Missing feedback for user actions",
          "Poor mobile responsiveness detected",
          "Long loading times may impact user experience",
          "Unclear error messages and validation",
          "Inconsistent design patterns across pages",
          "Accessibility concerns for screen readers",
        ]),
        recommendations: strings(&[
          "Simplify navigation with clear menu categories",
          "Reduce form fields to essential information only",
          "Add prominent, contrasting call-to-action buttons",
          "Implement clear visual hierarchy with proper spacing",
          "Provide immediate feedback for all user interactions",
          "Optimize layout for mobile-first design approach",
          "Implement progressive loading and performance optimization",
          "Write clear, actionable error messages",
          "Establish consistent design system and style guide",
          "Add ARIA labels and improve semantic HTML structure",
        ]),
      },
      ar: LanguageTables {
        problem_keywords: strings(&["مشكلة", "صعوبة", "مربك", "هجر", "خطأ", "بطيء", "معطل"]),
        positive_keywords: strings(&[
          "جيد",
          "سهل",
          "واضح",
          "بسيط",
          "سريع",
          "بديهي",
          "سهل الاستخدام",
        ]),
        issues: strings(&[
          "هيكل التنقل المعقد قد يربك المستخدمين",
          "كثرة الحقول المطلوبة في النموذج قد تسبب الهجر",
          "نقص في أزرار الدعوة للعمل الواضحة",
          "عدم كفاية التسلسل الهرمي المرئي في تخطيط المحتوى",
          "نقص في التغذية الراجعة لأعمال المستخدم",
          "ضعف في الاستجابة للأجهزة المحمولة",
          "أوقات التحميل الطويلة قد تؤثر على تجربة المستخدم",
          "رسائل خطأ غير واضحة والتحقق من الصحة",
          "أنماط تصميم غير متسقة عبر الصفحات",
          "مخاوف إمكانية الوصول لقارئات الشاشة",
        ]),
        recommendations: strings(&[
          "تبسيط التنقل بفئات قائمة واضحة",
          "تقليل حقول النموذج للمعلومات الأساسية فقط",
          "إضافة أزرار دعوة للعمل بارزة ومتباينة",
          "تنفيذ التسلسل الهرمي المرئي الواضح مع التباعد المناسب",
          "توفير تغذية راجعة فورية لجميع تفاعلات المستخدم",
          "تحسين التخطيط لنهج التصميم المحمول أولاً",
          "تنفيذ التحميل التدريجي وتحسين الأداء",
          "كتابة رسائل خطأ واضحة وقابلة للتنفيذ",
          "إنشاء نظام تصميم متسق ودليل أسلوب",
          "إضافة تسميات ARIA وتحسين هيكل HTML الدلالي",
        ]),
      },
    }
  }

  /// Load a replacement table set supplied by the localization layer.
  /// Keywords are lower-cased here so scoring can match against lower-cased text.
  pub fn from_json(raw: &str) -> Result<Self, AnalyzerError> {
    let mut tables: Tables = serde_json::from_str(raw)?;
    for lang in Language::ALL {
      let t = tables.for_language_mut(lang);
      lowercase_all(&mut t.problem_keywords);
      lowercase_all(&mut t.positive_keywords);
    }
    Ok(tables)
  }

  pub fn for_language(&self, language: Language) -> &LanguageTables {
    match language {
      Language::En => &self.en,
      Language::Ar => &self.ar,
    }
  }

  fn for_language_mut(&mut self, language: Language) -> &mut LanguageTables {
    match language {
      Language::En => &mut self.en,
      Language::Ar => &mut self.ar,
    }
  }

  /// Check every language against what the sampler will ask of it.
  pub fn validate(&self, config: &Config) -> Result<(), AnalyzerError> {
    for lang in Language::ALL {
      let t = self.for_language(lang);
      check_keywords(lang, "problem_keywords", &t.problem_keywords)?;
      check_keywords(lang, "positive_keywords", &t.positive_keywords)?;
      check_pool(lang, "issues", &t.issues, config.max_items)?;
      check_pool(lang, "recommendations", &t.recommendations, config.max_items)?;
    }
    Ok(())
  }
}

fn strings(items: &[&str]) -> Vec<String> {
  items.iter().map(|s| s.to_string()).collect()
}

fn lowercase_all(items: &mut [String]) {
  for item in items.iter_mut() {
    *item = item.to_lowercase();
  }
}

fn check_keywords(lang: Language, name: &str, keywords: &[String]) -> Result<(), AnalyzerError> {
  // A blank keyword is a substring of every text and would fire on all input.
  if keywords.iter().any(|k| k.trim().is_empty()) {
    return Err(AnalyzerError::validation(
      &format!("tables.{}.{}", lang, name),
      "keywords must not be blank",
    ));
  }
  Ok(())
}

fn check_pool(
  lang: Language,
  name: &str,
  pool: &[String],
  max_items: usize,
) -> Result<(), AnalyzerError> {
  let field = format!("tables.{}.{}", lang, name);
  if pool.len() < max_items {
    return Err(AnalyzerError::validation(
      &field,
      &format!("pool has {} entries, need at least {}", pool.len(), max_items),
    ));
  }
  let mut seen = HashSet::new();
  for item in pool {
    if !seen.insert(item.as_str()) {
      return Err(AnalyzerError::validation(
        &field,
        &format!("duplicate entry {:?}", item),
      ));
    }
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn builtin_tables_are_valid() {
    let tables = Tables::builtin();
    assert!(tables.validate(&Config::default()).is_ok());
    for lang in Language::ALL {
      assert_eq!(tables.for_language(lang).issues.len(), 10);
      assert_eq!(tables.for_language(lang).recommendations.len(), 10);
    }
  }

  #[test]
  fn duplicate_pool_entry_rejected() {
    let mut tables = Tables::builtin();
    tables.ar.issues[1] = tables.ar.issues[0].clone();
    let err = tables.validate(&Config::default()).unwrap_err();
    assert!(err.to_string().contains("tables.ar.issues"));
    assert!(err.to_string().contains("duplicate"));
  }

  #[test]
  fn short_pool_rejected() {
    let mut tables = Tables::builtin();
    tables.en.recommendations.truncate(3);
    let err = tables.validate(&Config::default()).unwrap_err();
    assert_eq!(err.field(), Some("tables.en.recommendations"));
  }

  #[test]
  fn blank_keyword_rejected() {
    let mut tables = Tables::builtin();
    tables.en.positive_keywords.push("  ".into());
    assert!(tables.validate(&Config::default()).is_err());
  }

  #[test]
  fn from_json_lowercases_keywords() {
    let mut tables = Tables::builtin();
    tables.en.problem_keywords = vec!["Checkout".into(), "LAG".into()];
    let raw = serde_json::to_string(&tables).unwrap();

    let loaded = Tables::from_json(&raw).unwrap();
    assert_eq!(loaded.en.problem_keywords, vec!["checkout", "lag"]);
    assert_eq!(loaded.ar, Tables::builtin().ar);
  }

  #[test]
  fn from_json_missing_language_is_error() {
    let raw = serde_json::json!({ "en": Tables::builtin().en }).to_string();
    assert!(matches!(Tables::from_json(&raw), Err(AnalyzerError::Json(_))));
  }
}
