use crate::config::Strategy;
use crate::core::candidate::Candidate;
use crate::core::keys::TranslationKeys;
use crate::core::locale::StoreChanges;

/// A scanned file and what came out of it.
#[derive(Debug)]
pub struct FileOutcome {
    pub file: String,
    pub candidates: Vec<Candidate>,
    pub keys: TranslationKeys,
}

/// A file that could not be scanned.
#[derive(Debug)]
pub struct SkippedFile {
    pub file: String,
    pub reason: String,
}

/// Changes merged into one locale file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleUpdate {
    pub locale: String,
    /// Path relative to the project root when possible.
    pub file: String,
    pub changes: StoreChanges,
}

/// What happened to the locale files.
#[derive(Debug, PartialEq, Eq)]
pub enum MergeOutcome {
    /// No keys were produced, so the locale files were not touched.
    Nothing,
    /// Dry run: merged in memory only.
    Pending(Vec<LocaleUpdate>),
    /// Merged and written.
    Applied(Vec<LocaleUpdate>),
}

/// Result of one `extract` run.
#[derive(Debug)]
pub struct ExtractSummary {
    pub strategy: Strategy,
    /// Config file was found; false when running on defaults.
    pub from_file: bool,
    pub files: Vec<FileOutcome>,
    pub skipped: Vec<SkippedFile>,
    /// Discovery problems (missing include directory, bad glob).
    pub warnings: Vec<String>,
    pub report_file: String,
    pub merge: MergeOutcome,
}

impl ExtractSummary {
    pub fn candidate_count(&self) -> usize {
        self.files.iter().map(|f| f.candidates.len()).sum()
    }

    pub fn key_count(&self) -> usize {
        self.files.iter().map(|f| f.keys.len()).sum()
    }

    /// Files that produced at least one candidate.
    pub fn files_with_candidates(&self) -> usize {
        self.files.iter().filter(|f| !f.candidates.is_empty()).count()
    }
}
