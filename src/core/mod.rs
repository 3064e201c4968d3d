//! Core key analysis, free of console output.
//!
//! ## Module Structure
//!
//! - `flatten`: nested document -> dot-separated key paths
//! - `locale`: locale file discovery and loading
//! - `missing`: missing-key diffs against the base locale
//! - `source_scan`: translation-call discovery in source files
//! - `prune`: removal of key paths from locale files

pub mod flatten;
pub mod locale;
pub mod missing;
pub mod prune;
pub mod source_scan;

pub use flatten::{ArrayPolicy, FlatKeys, flatten, key_set};
pub use locale::{LocaleFile, load_document};
