//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `extract`: Scan source files, write the extraction report and (with
//!   `--apply`) seed the locale files
//! - `init`: Initialize the configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::config::Strategy;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project root; relative paths resolve against it (default: current directory)
    #[arg(long, env = "I18N_SEED_ROOT")]
    pub root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    /// Source files to scan (overrides `files` and `includes` from the config file)
    pub files: Vec<String>,

    #[command(flatten)]
    pub common: CommonArgs,

    /// Locale directory (overrides config file)
    #[arg(long)]
    pub locales_dir: Option<String>,

    /// Locale receiving the original text (overrides config file)
    #[arg(long)]
    pub source_locale: Option<String>,

    /// Locale receiving placeholder translations (overrides config file)
    #[arg(long)]
    pub target_locale: Option<String>,

    /// Report file path (overrides config file)
    #[arg(long)]
    pub report: Option<String>,

    /// Extraction strategy (overrides config file)
    #[arg(long, value_enum)]
    pub strategy: Option<Strategy>,

    /// Actually write the locale files (default is dry-run)
    #[arg(long)]
    pub apply: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract hard-coded strings and seed the source and target locale files
    Extract(ExtractCommand),
    /// Initialize a new .i18nseedrc.json configuration file
    Init,
}
