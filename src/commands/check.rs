//! `locsync check`: styled missing-key report on stdout.

use anyhow::Result;

use crate::cli::{CheckCommand, ExitStatus};
use crate::commands::context::RunContext;
use crate::report::{ReportStyle, render};

pub(crate) fn check(cmd: CheckCommand) -> Result<ExitStatus> {
    let ctx = RunContext::load(&cmd.common)?;

    if cmd.common.verbose {
        println!(
            "Scanned {} localization file(s) in {}\n",
            ctx.files.len(),
            ctx.dir.display()
        );
    }

    print!("{}", render(&ctx.aggregator, ReportStyle::Terminal));

    if ctx.aggregator.is_fully_synchronized() {
        Ok(ExitStatus::Success)
    } else {
        Ok(ExitStatus::Failure)
    }
}
