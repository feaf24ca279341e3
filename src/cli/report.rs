//! Console output for CLI commands.
//!
//! Progress and warnings go to stdout; fatal errors are printed by `main`.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{ExtractSummary, FileOutcome, LocaleUpdate, MergeOutcome};
use crate::config::CONFIG_FILE_NAME;
use crate::core::keys::derive_key;
use crate::core::locale::PLACEHOLDER_MARKER;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{} {}", count, word)
    } else {
        format!("{} {}s", count, word)
    }
}

fn print_warning_to<W: Write>(writer: &mut W, message: &str) {
    let _ = writeln!(writer, "{} {}", "warning:".bold().yellow(), message);
}

/// Print the outcome of an `extract` run to stdout.
pub fn print_extract(summary: &ExtractSummary, verbose: bool) {
    print_extract_to(summary, verbose, &mut io::stdout().lock());
}

/// Print the outcome of an `extract` run to a custom writer.
pub fn print_extract_to<W: Write>(summary: &ExtractSummary, verbose: bool, writer: &mut W) {
    if verbose {
        if !summary.from_file {
            let _ = writeln!(writer, "No {} found, using defaults", CONFIG_FILE_NAME);
        }
        let _ = writeln!(
            writer,
            "Scanning {} (strategy: {:?})",
            plural(summary.files.len() + summary.skipped.len(), "file"),
            summary.strategy
        );
    }

    for warning in &summary.warnings {
        print_warning_to(writer, warning);
    }

    for skipped in &summary.skipped {
        print_warning_to(
            writer,
            &format!("Skipping {}: {}", skipped.file, skipped.reason),
        );
    }

    for file in &summary.files {
        print_file_outcome_to(file, verbose, writer);
    }

    let _ = writeln!(
        writer,
        "Found {} in {}",
        plural(summary.candidate_count(), "string"),
        plural(summary.files_with_candidates(), "file")
    );
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Report saved to {}", summary.report_file).green()
    );

    print_merge_outcome_to(&summary.merge, writer);
}

fn print_file_outcome_to<W: Write>(file: &FileOutcome, verbose: bool, writer: &mut W) {
    if file.candidates.is_empty() {
        if verbose {
            let _ = writeln!(writer, "{}: no hard-coded strings found", file.file);
        }
        return;
    }

    let _ = writeln!(
        writer,
        "{}: {}",
        file.file.bold(),
        plural(file.candidates.len(), "string")
    );

    if verbose {
        for candidate in &file.candidates {
            let _ = writeln!(
                writer,
                "  {:>4}  {:<16} \"{}\" -> {}.{}",
                candidate.line,
                candidate.kind.to_string(),
                candidate.text,
                file.keys.section(),
                derive_key(&candidate.text)
            );
        }
    }

    for collision in file.keys.collisions() {
        print_warning_to(
            writer,
            &format!(
                "Key {} in {} derived from both \"{}\" and \"{}\"; keeping \"{}\"",
                collision.key, file.file, collision.previous, collision.current, collision.current
            ),
        );
    }
}

fn print_merge_outcome_to<W: Write>(merge: &MergeOutcome, writer: &mut W) {
    match merge {
        MergeOutcome::Nothing => {
            let _ = writeln!(writer, "No keys to write; locale files unchanged");
        }
        MergeOutcome::Pending(updates) => {
            for update in updates {
                let _ = writeln!(
                    writer,
                    "{} {} ({})",
                    "Would update".yellow().bold(),
                    update.file,
                    describe_changes(update)
                );
            }
            let _ = writeln!(
                writer,
                "Run with {} to write the locale files",
                "--apply".cyan()
            );
        }
        MergeOutcome::Applied(updates) => {
            for update in updates {
                let _ = writeln!(
                    writer,
                    "{} {}",
                    SUCCESS_MARK.green(),
                    format!("Updated {} ({})", update.file, describe_changes(update)).green()
                );
            }
            if let Some(target) = updates.last() {
                let _ = writeln!(
                    writer,
                    "Review entries marked [{}: ...] in {}",
                    PLACEHOLDER_MARKER, target.file
                );
            }
        }
    }
}

fn describe_changes(update: &LocaleUpdate) -> String {
    format!(
        "{} added, {} updated",
        update.changes.added, update.changes.updated
    )
}
