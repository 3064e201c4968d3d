use std::collections::HashSet;

use anyhow::{Result, bail};

use super::{CommandResult, CommandSummary, PruneSummary, context::CommandContext};
use crate::{
    cli::args::PruneCommand,
    core::prune::{load_key_list, prune_locales},
};

/// Remove the listed keys from every existing file of the fixed locale list.
pub fn prune(cmd: PruneCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?.with_locales(&cmd.locales);
    ctx.require_locales_dir()?;

    let keys: HashSet<String> = if !cmd.keys.is_empty() {
        cmd.keys.iter().map(|k| k.trim().to_string()).collect()
    } else {
        let path = match &cmd.keys_file {
            Some(path) => ctx.dir.join(path),
            None => ctx.config.unused_keys_file.clone(),
        };
        load_key_list(&path)?.into_iter().collect()
    };

    if keys.is_empty() {
        bail!(
            "No keys to prune.\n\
             Hint: List keys in the key list file or pass them with --key."
        );
    }

    let files = ctx.locale_files();
    let outcomes = prune_locales(&files, &keys, cmd.dry_run)?;
    let skipped = files.into_iter().filter(|f| !f.exists()).collect();

    Ok(CommandResult {
        summary: CommandSummary::Prune(PruneSummary {
            key_count: keys.len(),
            outcomes,
            skipped,
            dry_run: cmd.dry_run,
        }),
        error_count: 0,
        exit_on_errors: false,
    })
}
