use std::fs;

use anyhow::{Result, bail};

use super::{CommandResult, CommandSummary, InitSummary};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

pub fn init() -> Result<CommandResult> {
    let path = std::env::current_dir()?.join(CONFIG_FILE_NAME);

    if path.exists() {
        bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(&path, format!("{}\n", default_config_json()?))?;

    Ok(CommandResult {
        summary: CommandSummary::Init(InitSummary { path }),
        error_count: 0,
        exit_on_errors: true,
    })
}
