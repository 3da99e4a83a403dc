//! Command-line interface layer.
//!
//! - `args`: clap argument definitions
//! - `commands`: one handler per subcommand
//! - `report`: console output
//! - `exit_status`: process exit codes

pub mod args;
pub mod commands;
mod exit_status;
pub mod report;
mod run;

use std::io;

use anyhow::Result;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose();

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    let result = run::run(args)?;
    report::print(&result, verbose, &mut io::stdout().lock());

    Ok(ExitStatus::from_result(&result))
}
