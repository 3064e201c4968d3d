use std::path::PathBuf;

use crate::core::{
    locale::LocaleFile,
    missing::BaseComparison,
    prune::PruneOutcome,
    source_scan::{LocaleCheck, SourceScan},
};

#[derive(Debug)]
pub enum CommandSummary {
    Check(CheckSummary),
    Scan(ScanSummary),
    Unused(UnusedSummary),
    Prune(PruneSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct CheckSummary {
    pub comparison: BaseComparison,
}

#[derive(Debug)]
pub struct ScanSummary {
    pub source_root: PathBuf,
    pub scan: SourceScan,
    pub checks: Vec<LocaleCheck>,
}

#[derive(Debug)]
pub struct UnusedSummary {
    pub base: LocaleFile,
    pub scan: SourceScan,
    pub unused_keys: Vec<String>,
    /// File the key list was written to, if any.
    pub output: Option<PathBuf>,
}

#[derive(Debug)]
pub struct PruneSummary {
    pub key_count: usize,
    pub outcomes: Vec<PruneOutcome>,
    /// Locales of the fixed list with no file on disk.
    pub skipped: Vec<LocaleFile>,
    pub dry_run: bool,
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
}

/// Result of running a command.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Findings that count against the run (missing keys).
    pub error_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    /// If false, findings are informational and the exit code stays 0.
    pub exit_on_errors: bool,
}
