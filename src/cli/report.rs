//! Console reporting for command results.
//!
//! Separate from core logic so the library can be used without printing.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{
    CheckSummary, CommandResult, CommandSummary, InitSummary, PruneSummary, ScanSummary,
    UnusedSummary,
};
use crate::core::{
    locale::LocaleFile,
    source_scan::{CallShape, LocaleCheck, ScanWarning, SourceScan},
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

const SINGLE_ARGUMENT_NOTE: &str = "only literal keys passed as the sole argument of \
t(\"...\") or <name>.t(\"...\") are detected; calls with more than one argument, \
such as t(\"key\", { count }), and keys built from variables, template strings or \
concatenation are missed, and unrelated calls of the same shape are counted";

const FIRST_ARGUMENT_NOTE: &str = "literal keys passed as the first argument of \
t(\"...\") or <name>.t(\"...\") count as used; keys built from variables, template \
strings or concatenation are not seen and are reported as unused";

fn heuristic_note(calls: CallShape) -> &'static str {
    match calls {
        CallShape::SingleArgument => SINGLE_ARGUMENT_NOTE,
        CallShape::FirstArgument => FIRST_ARGUMENT_NOTE,
    }
}

/// Print a command result: findings on stdout, warnings on stderr.
pub fn print(result: &CommandResult, verbose: bool) {
    print_to(
        result,
        verbose,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
}

/// Print a command result to custom writers.
pub fn print_to<O: Write, E: Write>(
    result: &CommandResult,
    verbose: bool,
    out: &mut O,
    err: &mut E,
) {
    match &result.summary {
        CommandSummary::Check(summary) => print_check(summary, verbose, out),
        CommandSummary::Scan(summary) => print_scan(summary, verbose, out, err),
        CommandSummary::Unused(summary) => print_unused(summary, verbose, out, err),
        CommandSummary::Prune(summary) => print_prune(summary, verbose, out, err),
        CommandSummary::Init(summary) => print_init(summary, out),
    }
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{} {}", count, word)
    } else {
        format!("{} {}s", count, word)
    }
}

fn print_loaded<O: Write>(file: &LocaleFile, out: &mut O) {
    let _ = writeln!(out, "{} {}", "loaded".dimmed(), file.path.display());
}

fn print_key_list<O: Write>(keys: &[String], out: &mut O) {
    for key in keys {
        let _ = writeln!(out, "    - {}", key);
    }
}

fn print_check<O: Write>(summary: &CheckSummary, verbose: bool, out: &mut O) {
    let comparison = &summary.comparison;
    let base_name = comparison.base.file_name();

    if verbose {
        print_loaded(&comparison.base, out);
        for locale in &comparison.locales {
            print_loaded(&locale.file, out);
        }
    }
    let _ = writeln!(
        out,
        "Base locale ({}) has {}.",
        comparison.base.locale,
        plural(comparison.base_key_count, "key")
    );
    let _ = writeln!(out);

    for locale in &comparison.locales {
        let file_name = locale.file.file_name();
        let _ = writeln!(out, "Checking {}...", file_name);
        if locale.is_complete() {
            let _ = writeln!(out, "  {} No missing keys.", SUCCESS_MARK.green());
        } else {
            let _ = writeln!(
                out,
                "  {} {} missing in {}:",
                FAILURE_MARK.red(),
                plural(locale.missing.len(), "key").red().bold(),
                file_name
            );
            print_key_list(&locale.missing, out);
        }
        let _ = writeln!(out);
    }

    if comparison.has_missing() {
        let incomplete = comparison
            .locales
            .iter()
            .filter(|l| !l.is_complete())
            .count();
        let _ = writeln!(
            out,
            "{} {}",
            FAILURE_MARK.red(),
            format!(
                "{} out of date with {}.",
                plural(incomplete, "locale file"),
                base_name
            )
            .red()
        );
    } else {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("All locales are up to date with {}.", comparison.base.locale).green()
        );
    }
}

fn print_scan_header<O: Write, E: Write>(
    scan: &SourceScan,
    verbose: bool,
    out: &mut O,
    err: &mut E,
) {
    if verbose {
        for file in &scan.files {
            let _ = writeln!(out, "{} {}", "scanned".dimmed(), file.display());
        }
    }
    let _ = writeln!(
        out,
        "Found {} in {}.",
        plural(scan.keys.len(), "key"),
        plural(scan.files.len(), "source file")
    );
    let _ = writeln!(out, "{} {}", "note:".bold(), heuristic_note(scan.calls));
    let _ = writeln!(out);
    print_scan_warnings(&scan.warnings, verbose, err);
}

fn print_scan_warnings<E: Write>(warnings: &[ScanWarning], verbose: bool, err: &mut E) {
    if warnings.is_empty() {
        return;
    }
    if verbose {
        for warning in warnings {
            let _ = writeln!(
                err,
                "{} Cannot read {}: {}",
                "warning:".bold().yellow(),
                warning.path,
                warning.error
            );
        }
    } else {
        let _ = writeln!(
            err,
            "{} {} could not be read (use {} for details)",
            "warning:".bold().yellow(),
            plural(warnings.len(), "source file"),
            "-v".cyan()
        );
    }
}

fn print_scan<O: Write, E: Write>(
    summary: &ScanSummary,
    verbose: bool,
    out: &mut O,
    err: &mut E,
) {
    if verbose {
        let _ = writeln!(out, "Scanning {}", summary.source_root.display());
    }
    print_scan_header(&summary.scan, verbose, out, err);

    for check in &summary.checks {
        match check {
            LocaleCheck::Skipped(file) => {
                let _ = writeln!(
                    err,
                    "{} {} not found, skipped",
                    "warning:".bold().yellow(),
                    file.path.display()
                );
            }
            LocaleCheck::Checked(result) => {
                if verbose {
                    print_loaded(&result.file, out);
                }
                let file_name = result.file.file_name();
                let _ = writeln!(out, "Checking {}...", file_name);
                if result.is_complete() {
                    let _ = writeln!(
                        out,
                        "  {} All used keys are present.",
                        SUCCESS_MARK.green()
                    );
                } else {
                    let _ = writeln!(
                        out,
                        "  {} {} used in code but missing in {}:",
                        FAILURE_MARK.red(),
                        plural(result.missing.len(), "key").red().bold(),
                        file_name
                    );
                    print_key_list(&result.missing, out);
                }
                let _ = writeln!(out);
            }
        }
    }
}

fn print_unused<O: Write, E: Write>(
    summary: &UnusedSummary,
    verbose: bool,
    out: &mut O,
    err: &mut E,
) {
    print_scan_header(&summary.scan, verbose, out, err);
    if verbose {
        print_loaded(&summary.base, out);
    }

    let base_name = summary.base.file_name();
    if summary.unused_keys.is_empty() {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Every key in {} is used.", base_name).green()
        );
    } else {
        let _ = writeln!(
            out,
            "{} {} in {} never used:",
            "warning:".bold().yellow(),
            plural(summary.unused_keys.len(), "key"),
            base_name
        );
        print_key_list(&summary.unused_keys, out);
    }

    if let Some(path) = &summary.output {
        let _ = writeln!(
            out,
            "Wrote {} to {}.",
            plural(summary.unused_keys.len(), "key"),
            path.display()
        );
    }
}

fn print_prune<O: Write, E: Write>(
    summary: &PruneSummary,
    verbose: bool,
    out: &mut O,
    err: &mut E,
) {
    if verbose {
        for file in &summary.skipped {
            let _ = writeln!(
                err,
                "{} {} not found, skipped",
                "note:".bold(),
                file.path.display()
            );
        }
    }

    for outcome in &summary.outcomes {
        if verbose {
            print_loaded(&outcome.file, out);
        }
        let verb = if outcome.written {
            "Processed"
        } else {
            "Would process"
        };
        let _ = writeln!(
            out,
            "{} {}: reduced size from {} to {} characters.",
            verb,
            outcome.file.file_name(),
            outcome.size_before,
            outcome.size_after
        );
    }

    let keys = plural(summary.key_count, "key");
    let files = plural(summary.outcomes.len(), "locale file");
    if summary.dry_run {
        let _ = writeln!(
            out,
            "{} Would prune {} from {}. Run without {} to write changes.",
            "dry run:".yellow().bold(),
            keys,
            files,
            "--dry-run".cyan()
        );
    } else {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Pruned {} from {}.", keys, files).green()
        );
    }
}

fn print_init<O: Write>(summary: &InitSummary, out: &mut O) {
    let _ = writeln!(
        out,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", summary.path.display()).green()
    );
}
