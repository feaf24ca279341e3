//! Plain-text extraction report.
//!
//! Purely derived display data: one block per file, never read back in.

use std::fmt::Write;

use crate::core::candidate::Candidate;
use crate::core::keys::derive_key;

pub const REPORT_TITLE: &str = "i18n String Extraction Report";

const RULE_WIDTH: usize = 60;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Render one file's block: a banner followed by one numbered entry per
/// candidate.
///
/// The suggested key is derived from the text again here rather than taken
/// from the assembled keys, so collisions are visible as repeated keys.
pub fn render_file_block(file: &str, candidates: &[Candidate]) -> String {
    let mut block = String::new();
    let _ = write!(block, "\n{}\nFile: {}\n{}\n\n", rule(), file, rule());

    for (i, candidate) in candidates.iter().enumerate() {
        let _ = write!(
            block,
            "{}. Line {}: \"{}\"\n   Type: {}\n   Suggested key: {}\n\n",
            i + 1,
            candidate.line,
            candidate.text,
            candidate.kind,
            derive_key(&candidate.text)
        );
    }

    block
}

/// Concatenated file blocks under a title banner.
#[derive(Debug, Default)]
pub struct ExtractionReport {
    blocks: Vec<String>,
}

impl ExtractionReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&mut self, file: &str, candidates: &[Candidate]) {
        self.blocks.push(render_file_block(file, candidates));
    }

    pub fn file_count(&self) -> usize {
        self.blocks.len()
    }

    pub fn render(&self) -> String {
        let mut out = format!("{}\n{}\n\n", REPORT_TITLE, rule());
        for block in &self.blocks {
            out.push_str(block);
        }
        out
    }
}
