//! Regex-based extractor.
//!
//! Three independent passes over the raw text:
//! 1. text content between `>` and `<`
//! 2. double-quoted values of checked attributes (`title="..."`)
//! 3. object-literal message payloads (`title: "..."`, `description: '...'`)
//!
//! Each pass reports the line of the match start, so multi-line JSX text
//! that opens on the line of its `>` is attributed to that line.

use anyhow::{Context, Result};
use regex::Regex;

use super::{Extractor, ExtractorOptions};
use crate::core::candidate::{Candidate, OriginKind};
use crate::utils::{build_line_index, offset_to_line};

/// Uppercase-led run of letters, digits, whitespace and light punctuation,
/// at least 4 characters long.
const JSX_TEXT_PATTERN: &str = r#">\s*([A-Z][a-zA-Z0-9\s,.'"&;!?\-()]{3,})\s*<"#;

pub struct PatternExtractor {
    jsx_text: Regex,
    /// `None` when no attributes are checked.
    attribute_value: Option<Regex>,
    /// `None` when no message keys are checked.
    message_literal: Option<Regex>,
}

impl PatternExtractor {
    pub fn new(options: &ExtractorOptions) -> Result<Self> {
        let jsx_text = Regex::new(JSX_TEXT_PATTERN).context("Invalid JSX text pattern")?;

        let attribute_value = alternation(&options.checked_attributes)
            .map(|names| Regex::new(&format!(r#"\b(?:{})\s*=\s*"([^"]+)""#, names)))
            .transpose()
            .context("Invalid attribute pattern")?;

        let message_literal = alternation(&options.message_keys)
            .map(|names| Regex::new(&format!(r#"\b(?:{}):\s*["']([^"']+)["']"#, names)))
            .transpose()
            .context("Invalid message literal pattern")?;

        Ok(Self {
            jsx_text,
            attribute_value,
            message_literal,
        })
    }
}

impl Extractor for PatternExtractor {
    fn scan(&self, source: &str) -> Result<Vec<Candidate>> {
        let line_index = build_line_index(source);
        let passes = [
            (Some(&self.jsx_text), OriginKind::JsxText),
            (self.attribute_value.as_ref(), OriginKind::AttributeValue),
            (self.message_literal.as_ref(), OriginKind::MessageLiteral),
        ];

        let mut found = Vec::new();
        for (regex, kind) in passes {
            let Some(regex) = regex else {
                continue;
            };
            for caps in regex.captures_iter(source) {
                let (Some(whole), Some(text)) = (caps.get(0), caps.get(1)) else {
                    continue;
                };
                let line = offset_to_line(&line_index, whole.start());
                found.push(Candidate::new(text.as_str().trim(), kind, line));
            }
        }

        Ok(found)
    }
}

/// `["title", "aria-label"]` -> `title|aria\-label`
///
/// Longer names come first so `aria-label` wins over `label` at the same spot.
/// Returns `None` for an empty list, since an empty alternation matches any name.
fn alternation(names: &[String]) -> Option<String> {
    let mut names: Vec<&str> = names
        .iter()
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .collect();
    if names.is_empty() {
        return None;
    }
    names.sort_by(|a, b| b.len().cmp(&a.len()));
    Some(
        names
            .iter()
            .map(|name| regex::escape(name))
            .collect::<Vec<_>>()
            .join("|"),
    )
}
