//! Core engine: holds the read-only tables and assembles analysis records.

use rand::Rng;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::AnalyzerError;
use crate::i18n::Catalog;
use crate::ident;
use crate::provider;
use crate::sample;
use crate::score;
use crate::tables::Tables;
use crate::types::{AnalysisRecord, AnalyzeRequest, Language};

/// The fallback analyzer. Immutable after construction, so one instance can
/// be shared across threads and requests.
#[derive(Debug, Clone)]
pub struct Analyzer {
  config: Config,
  tables: Tables,
  catalog: Catalog,
}

impl Analyzer {
  /// Validate `config` and `tables` together; a failure here is a
  /// configuration defect, not a runtime condition.
  pub fn new(config: Config, tables: Tables) -> Result<Self, AnalyzerError> {
    config.validate()?;
    tables.validate(&config)?;
    Ok(Self {
      config,
      tables,
      catalog: Catalog::builtin(),
    })
  }

  /// Reference configuration and built-in tables.
  pub fn with_defaults() -> Self {
    Self {
      config: Config::default(),
      tables: Tables::builtin(),
      catalog: Catalog::builtin(),
    }
  }

  pub fn with_catalog(mut self, catalog: Catalog) -> Self {
    self.catalog = catalog;
    self
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  pub fn tables(&self) -> &Tables {
    &self.tables
  }

  pub fn catalog(&self) -> &Catalog {
    &self.catalog
  }

  /// Local analysis with the thread-local random source.
  pub fn analyze(&self, text: &str, language: Language) -> AnalysisRecord {
    self.analyze_with_rng(text, language, &mut rand::thread_rng())
  }

  /// Local analysis with a caller-supplied random source (seed it for
  /// reproducible output).
  pub fn analyze_with_rng<R: Rng + ?Sized>(
    &self,
    text: &str,
    language: Language,
    rng: &mut R,
  ) -> AnalysisRecord {
    let keywords = self.tables.for_language(language);
    let score = score::compute_score(text, keywords, &self.config);
    let (issues, recommendations) = sample::sample_content(score, keywords, &self.config, rng);
    debug!(%language, score, items = issues.len(), "local analysis");
    self.assemble(text, language, score, issues, recommendations, rng)
  }

  /// Build a record from the provider's raw reply, falling back to the local
  /// analysis when the reply cannot be parsed.
  pub fn from_provider_reply(&self, text: &str, language: Language, reply: &str) -> AnalysisRecord {
    self.from_provider_reply_with_rng(text, language, reply, &mut rand::thread_rng())
  }

  pub fn from_provider_reply_with_rng<R: Rng + ?Sized>(
    &self,
    text: &str,
    language: Language,
    reply: &str,
    rng: &mut R,
  ) -> AnalysisRecord {
    let parsed = match provider::parse_reply(reply) {
      Ok(p) => p,
      Err(e) => {
        warn!(error = %e, "provider reply unusable, using local analysis");
        return self.analyze_with_rng(text, language, rng);
      }
    };
    let issues = parsed
      .issues
      .unwrap_or_else(|| vec![self.catalog.t(language, "provider.noIssues")]);
    let recommendations = parsed
      .recommendations
      .unwrap_or_else(|| vec![self.catalog.t(language, "provider.defaultRecommendation")]);
    debug!(%language, score = parsed.score, "provider analysis");
    self.assemble(text, language, parsed.score, issues, recommendations, rng)
  }

  /// Dispatch one request: provider reply when present, local analysis otherwise.
  pub fn handle(&self, request: &AnalyzeRequest) -> Result<AnalysisRecord, AnalyzerError> {
    let language = request.language()?;
    let record = match &request.provider_reply {
      Some(reply) => self.from_provider_reply(&request.text, language, reply),
      None => self.analyze(&request.text, language),
    };
    Ok(record)
  }

  fn assemble<R: Rng + ?Sized>(
    &self,
    text: &str,
    language: Language,
    score: u8,
    issues: Vec<String>,
    recommendations: Vec<String>,
    rng: &mut R,
  ) -> AnalysisRecord {
    let timestamp = ident::now_millis();
    AnalysisRecord {
      id: ident::new_id(timestamp, rng),
      input: text.to_string(),
      score,
      issues,
      recommendations,
      timestamp,
      language,
    }
  }
}
