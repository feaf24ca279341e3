//! i18n-seed - bootstrap an i18n migration for TSX/JSX projects
//!
//! i18n-seed scans source files for hard-coded English text (JSX text, common
//! attributes, toast/alert message literals), proposes snake_case translation
//! keys, and seeds a source and a target locale file with the original text
//! and `[需要翻译: ...]` placeholders.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, commands, console output)
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction pipeline (candidates, keys, locale stores, report)
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod utils;
