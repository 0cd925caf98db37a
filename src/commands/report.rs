//! `locsync report`: plain Markdown report written to a directory.

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;

use crate::cli::{ExitStatus, ReportCommand};
use crate::commands::context::RunContext;
use crate::error::LocalizationError;
use crate::report::{ReportStyle, SUCCESS_MARK, render};

pub const REPORT_FILE_NAME: &str = "localization_report.md";

pub(crate) fn report(cmd: ReportCommand) -> Result<ExitStatus> {
    let ctx = RunContext::load(&cmd.common)?;

    let dest = cmd
        .dest
        .unwrap_or_else(|| PathBuf::from(&ctx.config.report_root));
    if !dest.is_dir() {
        return Err(LocalizationError::InvalidReportDestination { path: dest }.into());
    }

    let content = render(&ctx.aggregator, ReportStyle::Markdown);
    let path = dest.join(REPORT_FILE_NAME);
    fs::write(&path, &content).map_err(|e| LocalizationError::write(&path, e))?;

    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Report written to {}", path.display()).green()
    );

    if ctx.aggregator.is_fully_synchronized() {
        Ok(ExitStatus::Success)
    } else {
        Ok(ExitStatus::Failure)
    }
}
