//! File correction: rewriting localization files to close key gaps.
//!
//! Correction regenerates each file from scratch: one line per union key,
//! sorted ascending, existing values carried over and missing keys filled with
//! empty placeholders. Comments and blank lines do not survive a rewrite.

use std::collections::{HashMap, HashSet};
use std::fs;

use crate::aggregator::KeySetAggregator;
use crate::error::{LocalizationError, Result};
use crate::scanner::LocalizationFile;

/// Totals from one correction pass, for the CLI summary.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CorrectionOutcome {
    pub files_rewritten: usize,
    pub keys_added: usize,
}

/// Serialize the canonical body for one file: every union key on its own
/// `"<key>" = "<value>";` line, ascending by key, unknown values empty.
pub fn canonical_body(union: &HashSet<String>, values: &HashMap<String, String>) -> String {
    let mut keys: Vec<&str> = union.iter().map(String::as_str).collect();
    keys.sort_unstable();

    let mut body = String::new();
    for key in keys {
        let value = values.get(key).map(String::as_str).unwrap_or("");
        body.push_str(&format!("\"{}\" = \"{}\";\n", key, value));
    }
    body
}

/// Rewrite every scanned file so it carries the full union key set.
///
/// `values_by_file` holds the key→value pairs parsed from each file before
/// correction. Aborts on the first write failure; files already rewritten are
/// not rolled back. On success the aggregator's in-memory sets are updated to
/// reflect the now-complete files.
pub fn correct_files(
    files: &[LocalizationFile],
    values_by_file: &HashMap<String, HashMap<String, String>>,
    aggregator: &mut KeySetAggregator,
) -> Result<CorrectionOutcome> {
    let union = aggregator.union_keys();
    let mut outcome = CorrectionOutcome::default();

    for file in files {
        let empty = HashMap::new();
        let values = values_by_file.get(&file.name).unwrap_or(&empty);
        let body = canonical_body(&union, values);

        fs::write(&file.path, &body).map_err(|e| LocalizationError::write(&file.path, e))?;

        outcome.keys_added += aggregator.missing_for(&file.name).len();
        outcome.files_rewritten += 1;
        aggregator.mark_complete(&file.name);
    }

    Ok(outcome)
}
