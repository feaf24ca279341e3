use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use clap::ValueEnum;
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".i18nseedrc.json";

pub const TEST_FILE_PATTERNS: &[&str] = &[
    "**/*.test.tsx",
    "**/*.test.ts",
    "**/*.test.jsx",
    "**/*.test.js",
    "**/*.spec.tsx",
    "**/*.spec.ts",
    "**/*.spec.jsx",
    "**/*.spec.js",
    "**/__tests__/**",
];

/// How candidate strings are pulled out of a source file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Regex heuristics over the raw text.
    #[default]
    Pattern,
    /// Walk the TSX syntax tree.
    Ast,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_locales_dir")]
    pub locales_dir: String,
    #[serde(default = "default_source_locale")]
    pub source_locale: String,
    #[serde(default = "default_target_locale")]
    pub target_locale: String,
    #[serde(default)]
    pub files: Vec<String>,
    #[serde(default = "default_includes")]
    pub includes: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default = "default_ignore_test_files")]
    pub ignore_test_files: bool,
    #[serde(default = "default_checked_attributes")]
    pub checked_attributes: Vec<String>,
    #[serde(default = "default_message_keys")]
    pub message_keys: Vec<String>,
    #[serde(default)]
    pub ignore_texts: Vec<String>,
    #[serde(default = "default_report_file")]
    pub report_file: String,
    #[serde(default)]
    pub strategy: Strategy,
}

fn default_locales_dir() -> String {
    "src/locales".to_string()
}

fn default_source_locale() -> String {
    "en".to_string()
}

fn default_target_locale() -> String {
    "zh".to_string()
}

fn default_includes() -> Vec<String> {
    vec!["src".to_string()]
}

fn default_ignore_test_files() -> bool {
    true
}

fn default_checked_attributes() -> Vec<String> {
    ["title", "placeholder", "description", "label", "aria-label"]
        .map(String::from)
        .to_vec()
}

fn default_message_keys() -> Vec<String> {
    ["title", "description"].map(String::from).to_vec()
}

fn default_report_file() -> String {
    "i18n_extraction_report.txt".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locales_dir: default_locales_dir(),
            source_locale: default_source_locale(),
            target_locale: default_target_locale(),
            files: Vec::new(),
            includes: default_includes(),
            ignores: Vec::new(),
            ignore_test_files: default_ignore_test_files(),
            checked_attributes: default_checked_attributes(),
            message_keys: default_message_keys(),
            ignore_texts: Vec::new(),
            report_file: default_report_file(),
            strategy: Strategy::default(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error for invalid glob patterns, empty or identical locale
    /// names, and empty attribute or message key names.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        if self.source_locale.trim().is_empty() || self.target_locale.trim().is_empty() {
            bail!("'sourceLocale' and 'targetLocale' must not be empty");
        }
        if self.source_locale == self.target_locale {
            bail!(
                "'sourceLocale' and 'targetLocale' must differ (both are \"{}\")",
                self.source_locale
            );
        }

        if self.checked_attributes.iter().any(|a| a.trim().is_empty()) {
            bail!("Empty attribute name in 'checkedAttributes'");
        }
        if self.message_keys.iter().any(|k| k.trim().is_empty()) {
            bail!("Empty key name in 'messageKeys'");
        }

        Ok(())
    }

    /// Locale file holding the original text, e.g. `<root>/src/locales/en.json`.
    pub fn source_locale_file(&self, root: &Path) -> PathBuf {
        self.locale_file(root, &self.source_locale)
    }

    /// Locale file holding the placeholder translations.
    pub fn target_locale_file(&self, root: &Path) -> PathBuf {
        self.locale_file(root, &self.target_locale)
    }

    pub fn report_path(&self, root: &Path) -> PathBuf {
        resolve_path(root, &self.report_file)
    }

    fn locale_file(&self, root: &Path, locale: &str) -> PathBuf {
        resolve_path(root, &self.locales_dir).join(format!("{}.json", locale))
    }
}

/// Join a relative path onto `root`, leaving absolute paths alone.
pub fn resolve_path(root: &Path, path: &str) -> PathBuf {
    let path = Path::new(path);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}

#[cfg(test)]
mod tests {
    use crate::config::*;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.locales_dir, "src/locales");
        assert_eq!(config.source_locale, "en");
        assert_eq!(config.target_locale, "zh");
        assert!(config.files.is_empty());
        assert_eq!(config.strategy, Strategy::Pattern);
        assert_eq!(
            config.checked_attributes,
            vec!["title", "placeholder", "description", "label", "aria-label"]
        );
        assert_eq!(config.message_keys, vec!["title", "description"]);
    }

    #[test]
    fn test_parse_config() {
        let json = r#"{
              "localesDir": "locales",
              "targetLocale": "ja",
              "files": ["src/pages/Pricing.tsx"],
              "strategy": "ast"
          }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.locales_dir, "locales");
        assert_eq!(config.target_locale, "ja");
        assert_eq!(config.files, vec!["src/pages/Pricing.tsx"]);
        assert_eq!(config.strategy, Strategy::Ast);
        // untouched fields keep defaults
        assert_eq!(config.source_locale, "en");
        assert_eq!(config.report_file, "i18n_extraction_report.txt");
    }

    #[test]
    fn test_unknown_strategy_fails() {
        let json = r#"{ "strategy": "magic" }"#;
        assert!(serde_json::from_str::<Config>(json).is_err());
    }

    #[test]
    fn test_locale_file_paths() {
        let config = Config::default();
        let root = Path::new("/project");
        assert_eq!(
            config.source_locale_file(root),
            PathBuf::from("/project/src/locales/en.json")
        );
        assert_eq!(
            config.target_locale_file(root),
            PathBuf::from("/project/src/locales/zh.json")
        );
        assert_eq!(
            config.report_path(root),
            PathBuf::from("/project/i18n_extraction_report.txt")
        );
    }

    #[test]
    fn test_absolute_locales_dir_is_kept() {
        let config = Config {
            locales_dir: "/abs/locales".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.source_locale_file(Path::new("/project")),
            PathBuf::from("/abs/locales/en.json")
        );
    }

    #[test]
    fn test_find_config_file() {
        let dir = tempdir().unwrap();
        let sub_dir = dir.path().join("src").join("components");
        fs::create_dir_all(&sub_dir).unwrap();

        let config_path = dir.path().join(CONFIG_FILE_NAME);
        File::create(&config_path).unwrap();

        let found = find_config_file(&sub_dir);
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_not_found() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();

        assert!(find_config_file(dir.path()).is_none());
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"{ "ignores": ["**/legacy/**"] }"#,
        )
        .unwrap();

        let result = load_config(dir.path()).unwrap();
        assert!(result.from_file);
        assert_eq!(result.config.ignores, vec!["**/legacy/**"]);
    }

    #[test]
    fn test_load_config_default_when_not_found() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();

        let result = load_config(dir.path()).unwrap();
        assert!(!result.from_file);
        assert_eq!(result.config.includes, default_includes());
    }

    #[test]
    fn test_validate_invalid_ignore_pattern() {
        let config = Config {
            ignores: vec!["[invalid".to_string()],
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("ignores"));
    }

    #[test]
    fn test_validate_same_locales() {
        let config = Config {
            target_locale: "en".to_string(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("must differ"));
    }

    #[test]
    fn test_validate_empty_attribute() {
        let config = Config {
            checked_attributes: vec!["title".to_string(), " ".to_string()],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_config_with_invalid_json_fails() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "{ not json").unwrap();

        let err = load_config(dir.path()).err().expect("invalid JSON should fail");
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_serialization_uses_camel_case() {
        let json = default_config_json().unwrap();
        assert!(json.contains("\"localesDir\""));
        assert!(json.contains("\"checkedAttributes\""));
        assert!(json.contains("\"strategy\": \"pattern\""));
    }
}
