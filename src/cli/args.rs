//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: print a styled missing-key report to the terminal
//! - `report`: write a plain Markdown report to `localization_report.md`
//! - `fix`: rewrite localization files so every file carries every key
//! - `init`: initialize a locsync configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

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
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Directory containing the localization files (overrides config file)
    pub dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ReportCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Existing directory to write localization_report.md into
    /// (overrides config file)
    #[arg(long)]
    pub dest: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct FixCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Actually rewrite the files (default is dry-run)
    #[arg(long)]
    pub apply: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Report missing keys across localization files
    Check(CheckCommand),
    /// Write a Markdown missing-key report to a directory
    Report(ReportCommand),
    /// Rewrite localization files so every file contains every key
    Fix(FixCommand),
    /// Initialize a new .locsyncrc.json configuration file
    Init,
}
