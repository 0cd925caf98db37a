//! `locsync fix`: rewrite files so every file carries every key.
//!
//! Dry-run by default, `--apply` performs the rewrite. The correction pass has
//! no cross-file rollback: a failed write aborts the run and leaves files
//! already rewritten in place.

use anyhow::Result;
use colored::Colorize;

use crate::cli::{ExitStatus, FixCommand};
use crate::commands::context::RunContext;
use crate::corrector::correct_files;
use crate::report::{ALL_SYNCHRONIZED, SUCCESS_MARK};

pub(crate) fn fix(cmd: FixCommand) -> Result<ExitStatus> {
    let mut ctx = RunContext::load(&cmd.common)?;

    // The rewrite itself is unconditional: even a file with no missing keys
    // gets re-serialized into canonical sorted form. Only the dry-run summary
    // short-circuits when there is nothing to add.
    if !cmd.apply {
        if ctx.aggregator.is_fully_synchronized() {
            println!("{} {}", SUCCESS_MARK.green(), ALL_SYNCHRONIZED.green());
            return Ok(ExitStatus::Success);
        }
        let mut missing_total = 0;
        let mut files_with_gaps = 0;
        for file in ctx.aggregator.sorted_files() {
            let missing = ctx.aggregator.missing_for(file);
            if missing.is_empty() {
                continue;
            }
            missing_total += missing.len();
            files_with_gaps += 1;
            if cmd.common.verbose {
                let mut keys: Vec<String> = missing.into_iter().collect();
                keys.sort_unstable();
                println!("{}: would add {}", file, keys.join(", "));
            } else {
                println!("{}: {} missing key(s)", file, missing.len());
            }
        }
        println!(
            "{} {} missing key(s) across {} file(s)",
            "Would fix".yellow().bold(),
            missing_total,
            files_with_gaps
        );
        println!("Run with {} to rewrite the files.", "--apply".cyan());
        return Ok(ExitStatus::Failure);
    }

    let values_by_file = ctx.values_by_file();
    let outcome = correct_files(&ctx.files, &values_by_file, &mut ctx.aggregator)?;

    println!(
        "{} {} file(s), added {} missing key(s)",
        "Corrected".green().bold(),
        outcome.files_rewritten,
        outcome.keys_added
    );

    Ok(ExitStatus::Success)
}
