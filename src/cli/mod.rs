//! Command-line interface layer.

use anyhow::Result;

mod args;
mod exit_status;

pub use args::{Arguments, CheckCommand, Command, CommonArgs, FixCommand, ReportCommand};
pub use exit_status::ExitStatus;

use crate::commands;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };
    let Some(command) = args.command else {
        return Ok(ExitStatus::Success);
    };

    match command {
        Command::Check(cmd) => commands::check(cmd),
        Command::Report(cmd) => commands::report(cmd),
        Command::Fix(cmd) => commands::fix(cmd),
        Command::Init => commands::init(),
    }
}
