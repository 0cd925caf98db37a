//! Gap report rendering.
//!
//! One structure, two surfaces: a styled variant for the terminal and a plain
//! Markdown variant for writing to disk. Both keep missing keys on their own
//! backtick-quoted lines so either output can be parsed back into the same
//! (file → missing keys) structure.

use std::fmt::Write;

use colored::Colorize;

use crate::aggregator::KeySetAggregator;

/// Success mark for consistent output formatting
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓
/// Failure mark for consistent output formatting
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub const REPORT_TITLE: &str = "Final report";
pub const MISSING_SECTION_TITLE: &str = "Missing strings in localization files";
pub const ALL_SYNCHRONIZED: &str = "All localization files are synchronized";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportStyle {
    /// ANSI emphasis for stdout.
    Terminal,
    /// Markdown headings for the report file.
    Markdown,
}

/// Render the full report for the aggregated state.
///
/// Files are visited in lexicographic order; complete files are skipped in the
/// detail section. When every file is complete the report is the title plus a
/// single success line.
pub fn render(aggregator: &KeySetAggregator, style: ReportStyle) -> String {
    let mut out = String::new();

    match style {
        ReportStyle::Terminal => {
            let _ = writeln!(out, "{}", REPORT_TITLE.bold());
        }
        ReportStyle::Markdown => {
            let _ = writeln!(out, "## {}", REPORT_TITLE);
        }
    }
    out.push('\n');

    if aggregator.is_fully_synchronized() {
        match style {
            ReportStyle::Terminal => {
                let _ = writeln!(out, "{} {}", SUCCESS_MARK.green(), ALL_SYNCHRONIZED.green());
            }
            ReportStyle::Markdown => {
                let _ = writeln!(out, "{}", ALL_SYNCHRONIZED);
            }
        }
        return out;
    }

    match style {
        ReportStyle::Terminal => {
            let _ = writeln!(out, "{} {}", FAILURE_MARK.red(), MISSING_SECTION_TITLE.bold());
        }
        ReportStyle::Markdown => {
            let _ = writeln!(out, "### {}", MISSING_SECTION_TITLE);
        }
    }

    for file in aggregator.sorted_files() {
        let missing = aggregator.missing_for(file);
        if missing.is_empty() {
            continue;
        }
        let mut keys: Vec<String> = missing.into_iter().collect();
        keys.sort_unstable();

        out.push('\n');
        match style {
            ReportStyle::Terminal => {
                let _ = writeln!(out, "{}", file.bold().cyan());
            }
            ReportStyle::Markdown => {
                let _ = writeln!(out, "**{}**", file);
            }
        }
        out.push('\n');
        for key in keys {
            let quoted = format!("`{}`", key);
            match style {
                ReportStyle::Terminal => {
                    let _ = writeln!(out, "- {}", quoted.yellow());
                }
                ReportStyle::Markdown => {
                    let _ = writeln!(out, "- {}", quoted);
                }
            }
        }
    }

    out
}
