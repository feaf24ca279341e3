//! Locale stores and the paired source/target merge.
//!
//! The source store receives original text and the target store receives
//! placeholders. Both go through the same path derivation, so every key this
//! tool inserts lives at the same nested path in both files.

pub mod placeholder;
pub mod store;

use std::path::Path;

use anyhow::Result;
use serde_json::Value;

pub use placeholder::{PLACEHOLDER_MARKER, placeholder_translation};
pub use store::{KeyAction, LocaleStore, StoreChanges};

use crate::config::Config;
use crate::core::keys::TranslationKeys;

/// Source and target locale stores, loaded, merged and persisted together.
pub struct LocalePair {
    pub source: LocaleStore,
    pub target: LocaleStore,
}

impl LocalePair {
    /// Load both stores before touching either.
    ///
    /// If either file fails to parse nothing is returned, so nothing can be
    /// written.
    pub fn load(
        source_path: &Path,
        source_locale: &str,
        target_path: &Path,
        target_locale: &str,
    ) -> Result<Self> {
        let source = LocaleStore::open_or_create(source_path, source_locale)?;
        let target = LocaleStore::open_or_create(target_path, target_locale)?;
        Ok(Self { source, target })
    }

    pub fn from_config(config: &Config, root: &Path) -> Result<Self> {
        Self::load(
            &config.source_locale_file(root),
            &config.source_locale,
            &config.target_locale_file(root),
            &config.target_locale,
        )
    }

    /// Merge one section's keys into both stores, in memory only.
    ///
    /// The part of each full key after `<section>.` becomes a single field
    /// inside the section's object.
    pub fn merge(&mut self, keys: &TranslationKeys) -> Result<()> {
        let section = keys.section();
        let prefix = format!("{}.", section);

        for (full_key, text) in keys.iter() {
            let field = full_key.strip_prefix(&prefix).unwrap_or(full_key);
            self.source
                .insert(section, field, Value::String(text.to_string()))?;
            self.target
                .insert(section, field, Value::String(placeholder_translation(text)))?;
        }

        Ok(())
    }

    /// Write both stores. Call only after every merge succeeded.
    pub fn persist(&self) -> Result<()> {
        self.source.save()?;
        self.target.save()
    }
}

/// Load, merge every section, then persist, as one step.
///
/// Any load or merge failure returns before either file is written.
pub fn merge_into_locales(
    source_path: &Path,
    source_locale: &str,
    target_path: &Path,
    target_locale: &str,
    sections: &[TranslationKeys],
) -> Result<LocalePair> {
    let mut pair = LocalePair::load(source_path, source_locale, target_path, target_locale)?;
    for keys in sections {
        pair.merge(keys)?;
    }
    pair.persist()?;
    Ok(pair)
}
