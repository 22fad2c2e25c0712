//! SaasCan Idea Analyzer: local fallback analysis that runs fully offline.
//!
//! Scores a free-text SaaS idea with keyword heuristics, samples canned
//! issues and recommendations for the chosen language, and returns one
//! `AnalysisRecord`. Also normalizes raw replies from the external analysis
//! provider into the same record shape so callers can treat both uniformly,
//! and carries the offline idea enhancement and canned idea pool.
//!
//! Used by the binary for stdin/stdout; can also be called as a library.

pub mod config;
pub mod engine;
pub mod enhance;
pub mod error;
pub mod i18n;
pub mod ident;
pub mod ideas;
pub mod provider;
pub mod quality;
pub mod sample;
pub mod score;
pub mod tables;
pub mod types;

pub use config::Config;
pub use engine::Analyzer;
pub use enhance::fallback_enhancement;
pub use error::AnalyzerError;
pub use i18n::Catalog;
pub use ideas::{random_idea, random_idea_with_rng};
pub use quality::{assess_input, characters_label, InputQuality};
pub use tables::{LanguageTables, Tables};
pub use types::{AnalysisRecord, AnalyzeRequest, ErrorOutput, Language};
