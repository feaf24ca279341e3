//! Candidate strings proposed for translation.

use std::fmt;

/// Where in the source a candidate string was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OriginKind {
    /// Text between a closing `>` and the next `<`: `<h1>Welcome</h1>`
    JsxText,
    /// Double-quoted value of a checked attribute: `title="Welcome"`
    AttributeValue,
    /// Object-literal message payload: `toast({ title: "Saved" })`
    MessageLiteral,
}

impl fmt::Display for OriginKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OriginKind::JsxText => write!(f, "jsx-text"),
            OriginKind::AttributeValue => write!(f, "attribute-value"),
            OriginKind::MessageLiteral => write!(f, "message-literal"),
        }
    }
}

/// A piece of human-readable text found in a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Trimmed text. Also the identity used for deduplication.
    pub text: String,
    pub kind: OriginKind,
    /// 1-based line of the match start.
    pub line: usize,
}

impl Candidate {
    pub fn new(text: impl Into<String>, kind: OriginKind, line: usize) -> Self {
        Self {
            text: text.into(),
            kind,
            line,
        }
    }
}
