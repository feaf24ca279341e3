//! Validity filter applied to every raw match before it becomes a candidate.

use std::collections::HashSet;

/// Bare markup tag names that are never translatable on their own.
pub const MARKUP_STOPLIST: &[&str] = &[
    "div", "span", "button", "input", "label", "form", "table", "svg", "path",
];

/// Shortest accepted text, in characters.
pub const MIN_TEXT_CHARS: usize = 3;

#[derive(Debug, Clone, Default)]
pub struct TextFilter {
    /// Extra texts from the `ignoreTexts` config, matched exactly.
    ignore_texts: HashSet<String>,
}

impl TextFilter {
    pub fn new(ignore_texts: &[String]) -> Self {
        Self {
            ignore_texts: ignore_texts.iter().map(|t| t.trim().to_string()).collect(),
        }
    }

    /// Returns true if the text looks like human-readable copy.
    ///
    /// The text is trimmed before any check.
    pub fn accepts(&self, text: &str) -> bool {
        let text = text.trim();

        if text.chars().count() < MIN_TEXT_CHARS {
            return false;
        }

        if is_numeric_like(text) {
            return false;
        }

        let lowered = text.to_lowercase();
        if MARKUP_STOPLIST.contains(&lowered.as_str()) || self.ignore_texts.contains(text) {
            return false;
        }

        let starts_upper = text.chars().next().is_some_and(char::is_uppercase);
        starts_upper || text.matches(' ').count() >= 2
    }
}

/// `"1 000.50"` and `"3.14"` are numbers, `"..."` is not.
fn is_numeric_like(text: &str) -> bool {
    let mut digits = text.chars().filter(|c| *c != ' ' && *c != '.').peekable();
    digits.peek().is_some() && digits.all(|c| c.is_ascii_digit())
}
