use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};

use crate::utils::write_atomic;

/// Action taken on a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Added,
    Updated,
}

/// Counts of keys touched in one store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreChanges {
    pub added: usize,
    pub updated: usize,
}

impl StoreChanges {
    pub fn total(&self) -> usize {
        self.added + self.updated
    }

    fn record(&mut self, action: KeyAction) {
        match action {
            KeyAction::Added => self.added += 1,
            KeyAction::Updated => self.updated += 1,
        }
    }
}

/// One locale JSON file held fully in memory.
pub struct LocaleStore {
    locale: String,
    file_path: PathBuf,
    data: Map<String, Value>,
    changes: StoreChanges,
}

impl LocaleStore {
    /// Load an existing locale file, or start empty if it doesn't exist.
    ///
    /// Unparsable JSON or a non-object root is an error.
    pub fn open_or_create(path: &Path, locale: &str) -> Result<Self> {
        let data = if path.exists() {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read file: {}", path.display()))?;
            let value: Value = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON: {}", path.display()))?;
            match value {
                Value::Object(map) => map,
                _ => bail!("Root of JSON file must be an object: {}", path.display()),
            }
        } else {
            Map::new()
        };

        Ok(Self {
            locale: locale.to_string(),
            file_path: path.to_path_buf(),
            data,
            changes: StoreChanges::default(),
        })
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub fn changes(&self) -> StoreChanges {
        self.changes
    }

    /// Store `value` under `field` inside the object at `section`.
    ///
    /// Section format: "pricing" or "pages.pricing". Intermediate objects are
    /// created as needed; `field` is stored as-is, dots included.
    pub fn insert(&mut self, section: &str, field: &str, value: Value) -> Result<KeyAction> {
        let mut current = &mut self.data;
        for part in section.split('.').filter(|p| !p.is_empty()) {
            let next_level = current
                .entry(part.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            current = match next_level {
                Value::Object(map) => map,
                _ => bail!(
                    "Cannot nest \"{}\" under \"{}\" in {}: existing value is not an object",
                    field,
                    section,
                    self.file_path.display()
                ),
            };
        }

        let action = if current.contains_key(field) {
            KeyAction::Updated
        } else {
            KeyAction::Added
        };
        current.insert(field.to_string(), value);
        self.changes.record(action);
        Ok(action)
    }

    /// Look up a value by path segments.
    pub fn get(&self, path: &[&str]) -> Option<&Value> {
        let (last, parents) = path.split_last()?;
        let mut current = &self.data;
        for part in parents {
            current = current.get(*part)?.as_object()?;
        }
        current.get(*last)
    }

    /// Path segments of every non-object value, depth first.
    pub fn leaf_paths(&self) -> Vec<Vec<String>> {
        let mut paths = Vec::new();
        collect_leaf_paths(&self.data, &mut Vec::new(), &mut paths);
        paths
    }

    /// Pretty JSON with 2-space indentation and a trailing newline.
    ///
    /// Non-ASCII text is written literally.
    pub fn to_json_string(&self) -> Result<String> {
        let content = serde_json::to_string_pretty(&self.data)
            .with_context(|| format!("Failed to serialize JSON: {}", self.file_path.display()))?;
        Ok(format!("{}\n", content))
    }

    /// Replace the file on disk with the in-memory content.
    pub fn save(&self) -> Result<()> {
        write_atomic(&self.file_path, &self.to_json_string()?)
    }
}

fn collect_leaf_paths(
    map: &Map<String, Value>,
    prefix: &mut Vec<String>,
    paths: &mut Vec<Vec<String>>,
) {
    for (key, value) in map {
        prefix.push(key.clone());
        match value {
            Value::Object(inner) => collect_leaf_paths(inner, prefix, paths),
            _ => paths.push(prefix.clone()),
        }
        prefix.pop();
    }
}
