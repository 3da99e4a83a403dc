use super::{
    args::{Arguments, Command},
    commands::{CommandResult, diff::diff, extract::extract, init::init, merge::merge},
};
use anyhow::Result;

/// Dispatch to the handler of the parsed command.
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Diff(cmd)) => diff(cmd),
        Some(Command::Extract(cmd)) => extract(cmd),
        Some(Command::Merge(cmd)) => merge(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
