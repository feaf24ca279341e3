//! Translation key derivation and assembly.

use std::{collections::HashMap, path::Path};

use crate::core::candidate::Candidate;

/// Derived keys are cut to this many characters.
pub const MAX_KEY_LEN: usize = 50;

/// Turn display text into a snake_case key.
///
/// Everything except ASCII word characters and whitespace is dropped, the
/// rest is lowercased and joined with `_`, then hard-cut at [`MAX_KEY_LEN`].
/// Distinct texts may produce the same key.
///
/// ```
/// use i18n_seed::core::keys::derive_key;
///
/// assert_eq!(derive_key("Welcome Home"), "welcome_home");
/// assert_eq!(derive_key("Don't miss out!"), "dont_miss_out");
/// ```
pub fn derive_key(text: &str) -> String {
    let stripped: String = text
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect();
    let joined = stripped
        .split_whitespace()
        .map(|word| word.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join("_");
    joined.chars().take(MAX_KEY_LEN).collect()
}

/// Section for a source file: its lowercased file stem.
///
/// `src/pages/ContactSales.tsx` -> `contactsales`
pub fn section_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

/// Two candidates in one section that derived the same key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCollision {
    pub key: String,
    /// Value that was overwritten.
    pub previous: String,
    /// Value that was kept.
    pub current: String,
}

/// Full dotted keys (`section.key`) mapped to their original text, in first
/// insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationKeys {
    section: String,
    entries: Vec<(String, String)>,
    positions: HashMap<String, usize>,
    collisions: Vec<KeyCollision>,
}

impl TranslationKeys {
    pub fn new(section: impl Into<String>) -> Self {
        Self {
            section: section.into(),
            ..Default::default()
        }
    }

    /// Build the keys for one file's candidates.
    ///
    /// When two candidates derive the same key the later one wins; the entry
    /// keeps its original position and the collision is recorded.
    pub fn assemble(section: &str, candidates: &[Candidate]) -> Self {
        let mut keys = Self::new(section);
        for candidate in candidates {
            keys.insert(&derive_key(&candidate.text), &candidate.text);
        }
        keys
    }

    /// Insert `section.<key>` -> `text`.
    pub fn insert(&mut self, key: &str, text: &str) {
        let full_key = format!("{}.{}", self.section, key);
        match self.positions.get(&full_key) {
            Some(&index) => {
                let previous = std::mem::replace(&mut self.entries[index].1, text.to_string());
                if previous != text {
                    self.collisions.push(KeyCollision {
                        key: full_key,
                        previous,
                        current: text.to_string(),
                    });
                }
            }
            None => {
                self.positions.insert(full_key.clone(), self.entries.len());
                self.entries.push((full_key, text.to_string()));
            }
        }
    }

    pub fn section(&self) -> &str {
        &self.section
    }

    pub fn get(&self, full_key: &str) -> Option<&str> {
        self.positions
            .get(full_key)
            .map(|&index| self.entries[index].1.as_str())
    }

    /// `(full_key, text)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn collisions(&self) -> &[KeyCollision] {
        &self.collisions
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
