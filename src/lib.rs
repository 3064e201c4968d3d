//! i18n-keys - translation key maintenance for JSON locale files
//!
//! Compares locale dictionaries against a base locale and against the keys
//! referenced from source code, and prunes unused keys from locale files.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, commands, reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Flattening, diffing, source scanning and pruning

pub mod cli;
pub mod config;
pub mod core;
