use std::{
    fs, io,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use super::super::{args::ExtractCommand, exit_status::ExitStatus, report::print_extract};
use super::{ExtractSummary, FileOutcome, LocaleUpdate, MergeOutcome, SkippedFile};
use crate::{
    config::{Config, ConfigLoadResult, load_config},
    core::{
        discover::{InputFile, explicit_files, scan_files},
        extract::{ExtractorKind, ExtractorOptions, TextFilter, extract_candidates},
        keys::{TranslationKeys, section_name},
        locale::{LocalePair, LocaleStore},
        report::ExtractionReport,
    },
    utils::write_atomic,
};

pub fn extract(cmd: ExtractCommand) -> Result<ExitStatus> {
    let root = resolve_root(cmd.common.root.as_deref())?;
    let ConfigLoadResult { mut config, from_file } = load_config(&root)?;
    apply_overrides(&mut config, &cmd);
    config.validate()?;

    let summary = run_extract(&root, &config, from_file, &cmd.files, cmd.apply)?;
    print_extract(&summary, cmd.common.verbose);

    Ok(ExitStatus::Success)
}

fn resolve_root(root: Option<&Path>) -> Result<PathBuf> {
    match root {
        Some(path) => path
            .canonicalize()
            .with_context(|| format!("Root directory not found: {}", path.display())),
        None => std::env::current_dir().context("Failed to read current directory"),
    }
}

fn apply_overrides(config: &mut Config, cmd: &ExtractCommand) {
    if let Some(dir) = &cmd.locales_dir {
        config.locales_dir = dir.clone();
    }
    if let Some(locale) = &cmd.source_locale {
        config.source_locale = locale.clone();
    }
    if let Some(locale) = &cmd.target_locale {
        config.target_locale = locale.clone();
    }
    if let Some(report) = &cmd.report {
        config.report_file = report.clone();
    }
    if let Some(strategy) = cmd.strategy {
        config.strategy = strategy;
    }
}

/// Explicit files win over the config `files` list, which wins over discovery.
fn resolve_inputs(root: &Path, config: &Config, files: &[String]) -> (Vec<InputFile>, Vec<String>) {
    if !files.is_empty() {
        (explicit_files(root, files), Vec::new())
    } else if !config.files.is_empty() {
        (explicit_files(root, &config.files), Vec::new())
    } else {
        let scan = scan_files(
            root,
            &config.includes,
            &config.ignores,
            config.ignore_test_files,
        );
        (scan.files, scan.warnings)
    }
}

/// Scan every input file, write the report, and merge the keys into the
/// locale stores.
///
/// The locale stores are always loaded and merged in memory so a malformed
/// store fails the dry run too; they are written only when `apply` is set.
pub fn run_extract(
    root: &Path,
    config: &Config,
    from_file: bool,
    files: &[String],
    apply: bool,
) -> Result<ExtractSummary> {
    let (inputs, warnings) = resolve_inputs(root, config, files);
    let extractor = ExtractorKind::new(config.strategy, &ExtractorOptions::from(config))?;
    let filter = TextFilter::new(&config.ignore_texts);

    let mut outcomes = Vec::new();
    let mut skipped = Vec::new();
    let mut report = ExtractionReport::new();

    for input in inputs {
        let source = match fs::read_to_string(&input.path) {
            Ok(source) => source,
            Err(e) => {
                let reason = if e.kind() == io::ErrorKind::NotFound {
                    "file not found".to_string()
                } else {
                    e.to_string()
                };
                skipped.push(SkippedFile {
                    file: input.display,
                    reason,
                });
                continue;
            }
        };

        let candidates = match extract_candidates(&extractor, &source, &filter) {
            Ok(candidates) => candidates,
            Err(e) => {
                skipped.push(SkippedFile {
                    file: input.display,
                    reason: e.to_string(),
                });
                continue;
            }
        };

        if !candidates.is_empty() {
            report.add_file(&input.display, &candidates);
        }
        let keys = TranslationKeys::assemble(&section_name(&input.path), &candidates);
        outcomes.push(FileOutcome {
            file: input.display,
            candidates,
            keys,
        });
    }

    write_atomic(&config.report_path(root), &report.render())?;

    let merge = merge_locales(root, config, &outcomes, apply)?;

    Ok(ExtractSummary {
        strategy: config.strategy,
        from_file,
        files: outcomes,
        skipped,
        warnings,
        report_file: config.report_file.clone(),
        merge,
    })
}

fn merge_locales(
    root: &Path,
    config: &Config,
    outcomes: &[FileOutcome],
    apply: bool,
) -> Result<MergeOutcome> {
    if outcomes.iter().all(|o| o.keys.is_empty()) {
        return Ok(MergeOutcome::Nothing);
    }

    let mut pair = LocalePair::from_config(config, root)?;
    for outcome in outcomes {
        pair.merge(&outcome.keys)?;
    }

    let updates = vec![
        locale_update(root, &pair.source),
        locale_update(root, &pair.target),
    ];

    if apply {
        pair.persist()?;
        Ok(MergeOutcome::Applied(updates))
    } else {
        Ok(MergeOutcome::Pending(updates))
    }
}

fn locale_update(root: &Path, store: &LocaleStore) -> LocaleUpdate {
    let path = store.file_path();
    LocaleUpdate {
        locale: store.locale().to_string(),
        file: path.strip_prefix(root).unwrap_or(path).display().to_string(),
        changes: store.changes(),
    }
}
