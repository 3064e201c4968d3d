use anyhow::Result;

use super::{CheckSummary, CommandResult, CommandSummary, context::CommandContext};
use crate::{cli::args::CheckCommand, core::missing::compare_with_base};

/// Compare every locale file against the base locale.
///
/// Missing keys make the run fail.
pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    let comparison = compare_with_base(
        &ctx.config.locales_dir,
        &ctx.config.base_locale,
        cmd.arrays,
    )?;

    let error_count = comparison
        .locales
        .iter()
        .map(|locale| locale.missing.len())
        .sum();

    Ok(CommandResult {
        summary: CommandSummary::Check(CheckSummary { comparison }),
        error_count,
        exit_on_errors: true,
    })
}
