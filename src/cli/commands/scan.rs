use anyhow::Result;

use super::{CommandResult, CommandSummary, ScanSummary, context::CommandContext};
use crate::{
    cli::args::ScanCommand,
    core::source_scan::{CallShape, LocaleCheck, compare_with_source, scan_source_tree},
};

/// Check the fixed locale list against the keys referenced from source code.
///
/// Findings are reported but never fail the run.
pub fn scan(cmd: ScanCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?
        .with_source(&cmd.source)
        .with_locales(&cmd.locales);
    ctx.require_locales_dir()?;

    let scan = scan_source_tree(
        &ctx.config.source_root,
        &ctx.config.scan,
        CallShape::SingleArgument,
    )?;
    let checks = compare_with_source(&ctx.locale_files(), &scan.keys, cmd.arrays)?;

    let error_count = checks
        .iter()
        .map(|check| match check {
            LocaleCheck::Checked(result) => result.missing.len(),
            LocaleCheck::Skipped(_) => 0,
        })
        .sum();

    Ok(CommandResult {
        summary: CommandSummary::Scan(ScanSummary {
            source_root: ctx.config.source_root.clone(),
            scan,
            checks,
        }),
        error_count,
        exit_on_errors: false,
    })
}
