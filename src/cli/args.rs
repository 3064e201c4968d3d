//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Compare every locale against the base locale
//! - `scan`: Compare the fixed locale list against keys used in source code
//! - `unused`: List base-locale keys that source code never references
//! - `prune`: Remove listed keys from the fixed locale list
//! - `init`: Write a default configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::core::ArrayPolicy;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Scan(cmd)) => cmd.common.verbose,
            Some(Command::Unused(cmd)) => cmd.common.verbose,
            Some(Command::Prune(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Locales directory (overrides config file)
    #[arg(long)]
    pub locales_dir: Option<PathBuf>,

    /// Base locale, e.g. en_US (overrides config file)
    #[arg(long)]
    pub base_locale: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Source tree selection for commands that scan code.
#[derive(Debug, Clone, Default, Args)]
pub struct SourceArgs {
    /// Source code root directory (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,
}

/// Fixed locale list selection.
#[derive(Debug, Clone, Default, Args)]
pub struct LocaleListArgs {
    /// Locale to process, with or without `.json` (overrides config file)
    /// Can be specified multiple times: --locale en_US --locale zh_CN
    #[arg(long = "locale")]
    pub locales: Vec<String>,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// How arrays contribute keys
    #[arg(long, value_enum, default_value = "descend")]
    pub arrays: ArrayPolicy,
}

#[derive(Debug, Args)]
pub struct ScanCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub locales: LocaleListArgs,

    /// How arrays contribute keys
    #[arg(long, value_enum, default_value = "skip")]
    pub arrays: ArrayPolicy,
}

#[derive(Debug, Args)]
pub struct UnusedCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(flatten)]
    pub source: SourceArgs,

    /// How arrays contribute keys
    #[arg(long, value_enum, default_value = "skip")]
    pub arrays: ArrayPolicy,

    /// Write the unused keys to this file (one key per line), for `prune`
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct PruneCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(flatten)]
    pub locales: LocaleListArgs,

    /// File listing the keys to remove (overrides config file)
    #[arg(long)]
    pub keys_file: Option<PathBuf>,

    /// Key path to remove; replaces the key list file when given
    /// Can be specified multiple times: --key app.lang --key common.unknown
    #[arg(long = "key")]
    pub keys: Vec<String>,

    /// Report what would be removed without writing any file
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Report keys of the base locale missing from every other locale file
    Check(CheckCommand),
    /// Report keys used in source code but missing from each locale file
    Scan(ScanCommand),
    /// List base-locale keys that no source file references
    Unused(UnusedCommand),
    /// Remove listed keys (and emptied parents) from each locale file, in place
    Prune(PruneCommand),
    /// Initialize a new .i18nkeysrc.json configuration file
    Init,
}
