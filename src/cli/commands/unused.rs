use std::fs;

use anyhow::{Context, Result};

use super::{CommandResult, CommandSummary, UnusedSummary, context::CommandContext};
use crate::{
    cli::args::UnusedCommand,
    core::{
        prune::format_key_list,
        source_scan::{CallShape, scan_source_tree, unused_keys},
    },
};

/// List base-locale keys never referenced from source code, optionally
/// writing them as a key list for `prune`.
///
/// A key passed as the first of several arguments, as in `t("key", { count })`,
/// counts as used.
pub fn unused(cmd: UnusedCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?.with_source(&cmd.source);
    ctx.require_locales_dir()?;
    let base = ctx.config.base_file();

    let scan = scan_source_tree(
        &ctx.config.source_root,
        &ctx.config.scan,
        CallShape::FirstArgument,
    )?;
    let unused_keys = unused_keys(&base, &scan.keys, cmd.arrays)?;

    let output = match &cmd.output {
        Some(path) => {
            let path = ctx.dir.join(path);
            fs::write(&path, format_key_list(&unused_keys))
                .with_context(|| format!("Failed to write file: {}", path.display()))?;
            Some(path)
        }
        None => None,
    };

    Ok(CommandResult {
        error_count: unused_keys.len(),
        summary: CommandSummary::Unused(UnusedSummary {
            base,
            scan,
            unused_keys,
            output,
        }),
        exit_on_errors: false,
    })
}
