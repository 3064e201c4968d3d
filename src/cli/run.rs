use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{
        CommandResult, check::check, init::init, prune::prune, scan::scan, unused::unused,
    },
};

/// Dispatch to the handler of the parsed command.
///
/// # Returns
/// - `Ok(CommandResult)` with the findings and exit behavior
/// - `Err` if the command aborts (configuration, I/O or JSON parse errors)
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Scan(cmd)) => scan(cmd),
        Some(Command::Unused(cmd)) => unused(cmd),
        Some(Command::Prune(cmd)) => prune(cmd),
        Some(Command::Init) => init(),
        None => bail!("No command provided. Use --help to see available commands."),
    }
}
