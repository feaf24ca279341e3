//! Input file selection.
//!
//! Files come from an explicit list (CLI arguments or the `files` config),
//! or are discovered by walking the `includes` directories.

use std::path::{Path, PathBuf};

use glob::{Pattern, glob};
use walkdir::WalkDir;

use crate::config::{TEST_FILE_PATTERNS, resolve_path};

/// A source file to scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFile {
    /// Path as shown in output and the report.
    pub display: String,
    /// Path used for reading.
    pub path: PathBuf,
}

/// Result of resolving input files.
#[derive(Debug, Default)]
pub struct ScanResult {
    pub files: Vec<InputFile>,
    /// Non-fatal problems (bad include, unreadable directory entry).
    pub warnings: Vec<String>,
}

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal directory paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Resolve an explicit file list against `root`, keeping caller order.
///
/// Existence is not checked here; missing files are reported when read.
pub fn explicit_files(root: &Path, paths: &[String]) -> Vec<InputFile> {
    paths
        .iter()
        .map(|p| InputFile {
            display: p.clone(),
            path: resolve_path(root, p),
        })
        .collect()
}

/// Walk the include directories under `root` and collect TSX/TS/JSX/JS files.
///
/// Ignore globs are matched against the root-relative path. The result is
/// sorted so runs are reproducible.
pub fn scan_files(
    root: &Path,
    includes: &[String],
    ignore_patterns: &[String],
    ignore_test_files: bool,
) -> ScanResult {
    let mut result = ScanResult::default();

    let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
    let mut glob_patterns: Vec<Pattern> = Vec::new();

    for p in ignore_patterns {
        if is_glob_pattern(p) {
            match Pattern::new(p) {
                Ok(pattern) => glob_patterns.push(pattern),
                Err(e) => result
                    .warnings
                    .push(format!("Invalid ignore pattern '{}': {}", p, e)),
            }
        } else {
            literal_ignore_paths.push(root.join(p));
        }
    }

    if ignore_test_files {
        glob_patterns.extend(TEST_FILE_PATTERNS.iter().filter_map(|p| Pattern::new(p).ok()));
    }

    let dirs_to_scan: Vec<PathBuf> = if includes.is_empty() {
        vec![root.to_path_buf()]
    } else {
        let mut paths = Vec::new();
        for inc in includes {
            if is_glob_pattern(inc) {
                let full_pattern = root.join(inc);
                match glob(&full_pattern.to_string_lossy()) {
                    Ok(entries) => paths.extend(entries.flatten().filter(|e| e.is_dir())),
                    Err(e) => result
                        .warnings
                        .push(format!("Invalid glob pattern '{}': {}", inc, e)),
                }
            } else {
                let path = root.join(inc);
                if path.exists() {
                    paths.push(path);
                } else {
                    result
                        .warnings
                        .push(format!("Include path does not exist: {}", path.display()));
                }
            }
        }
        paths
    };

    for dir in dirs_to_scan {
        for entry in WalkDir::new(dir) {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    result.warnings.push(format!("Cannot access path: {}", e));
                    continue;
                }
            };
            let path = entry.path();

            if literal_ignore_paths
                .iter()
                .any(|ignore_path| path.starts_with(ignore_path))
            {
                continue;
            }

            let relative = path.strip_prefix(root).unwrap_or(path);
            let relative_str = relative.to_string_lossy().replace('\\', "/");
            if glob_patterns.iter().any(|p| p.matches(&relative_str)) {
                continue;
            }

            if path.is_file() && is_scannable_file(path) {
                result.files.push(InputFile {
                    display: relative_str,
                    path: path.to_path_buf(),
                });
            }
        }
    }

    result.files.sort_by(|a, b| a.display.cmp(&b.display));
    result.files.dedup_by(|a, b| a.path == b.path);
    result
}

fn is_scannable_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("tsx" | "ts" | "jsx" | "js")
    )
}
