//! Candidate extraction.
//!
//! An [`Extractor`] turns file text into raw matches in scan order. The
//! shared [`extract_candidates`] step then applies the validity filter and
//! keeps the first occurrence of each text, so every strategy gets the same
//! filtering and deduplication rules.
//!
//! ## Module Structure
//!
//! - `filter`: TextFilter (length, numeric, stoplist and capitalization checks)
//! - `pattern`: PatternExtractor (regex heuristics)
//! - `ast`: AstExtractor (swc TSX syntax tree)

pub mod ast;
pub mod filter;
pub mod pattern;

use std::collections::HashSet;

use anyhow::Result;
use enum_dispatch::enum_dispatch;

pub use ast::AstExtractor;
pub use filter::TextFilter;
pub use pattern::PatternExtractor;

use crate::config::{Config, Strategy};
use crate::core::candidate::Candidate;

/// Names the extractors look for.
#[derive(Debug, Clone)]
pub struct ExtractorOptions {
    /// JSX attributes whose string values are candidates.
    pub checked_attributes: Vec<String>,
    /// Object-literal keys whose string values are candidates.
    pub message_keys: Vec<String>,
}

impl Default for ExtractorOptions {
    fn default() -> Self {
        let config = Config::default();
        Self {
            checked_attributes: config.checked_attributes,
            message_keys: config.message_keys,
        }
    }
}

impl From<&Config> for ExtractorOptions {
    fn from(config: &Config) -> Self {
        Self {
            checked_attributes: config.checked_attributes.clone(),
            message_keys: config.message_keys.clone(),
        }
    }
}

/// Finds raw candidate strings in one file's text.
#[enum_dispatch]
pub trait Extractor {
    /// Return every raw match, trimmed, in scan order: all JSX text first,
    /// then attribute values, then message literals.
    ///
    /// No filtering or deduplication happens here.
    fn scan(&self, source: &str) -> Result<Vec<Candidate>>;
}

#[enum_dispatch(Extractor)]
pub enum ExtractorKind {
    Pattern(PatternExtractor),
    Ast(AstExtractor),
}

impl ExtractorKind {
    pub fn new(strategy: Strategy, options: &ExtractorOptions) -> Result<Self> {
        Ok(match strategy {
            Strategy::Pattern => PatternExtractor::new(options)?.into(),
            Strategy::Ast => AstExtractor::new(options).into(),
        })
    }
}

/// Run an extractor and keep the valid, first-seen candidates.
///
/// Output order is the scan order of the first occurrence of each text.
pub fn extract_candidates(
    extractor: &impl Extractor,
    source: &str,
    filter: &TextFilter,
) -> Result<Vec<Candidate>> {
    let raw = extractor.scan(source)?;
    Ok(dedup_by_text(
        raw.into_iter().filter(|c| filter.accepts(&c.text)),
    ))
}

fn dedup_by_text(candidates: impl IntoIterator<Item = Candidate>) -> Vec<Candidate> {
    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|c| seen.insert(c.text.clone()))
        .collect()
}
