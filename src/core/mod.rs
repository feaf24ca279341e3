//! Extraction pipeline.
//!
//! file text -> candidates (`extract`) -> keys (`keys`) -> locale stores
//! (`locale`), with the per-file report (`report`) rendered alongside.
//!
//! ## Module Structure
//!
//! - `candidate`: Candidate strings and their origin kinds
//! - `discover`: Input file selection
//! - `extract`: Pattern and AST extractors, validity filter, deduplication
//! - `keys`: Key derivation and per-file key assembly
//! - `locale`: Placeholder translations and the paired locale store merge
//! - `parsers`: TSX parsing for the AST extractor
//! - `report`: Plain-text extraction report

pub mod candidate;
pub mod discover;
pub mod extract;
pub mod keys;
pub mod locale;
pub mod parsers;
pub mod report;
