//! Line parser for `"key" = "value";` localization files.
//!
//! The grammar is deliberately minimal: keys are recovered by splitting a line
//! on double quotes, values by splitting on `=`. Malformed lines never error,
//! they simply contribute nothing. This leniency matches how the files are
//! authored in practice (comments and blank lines are common) but it also means
//! a stray `=` inside a translated value silently drops that line from the
//! value map.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::io;
use std::path::Path;

use crate::error::{LocalizationError, Result};

/// Read a localization file into a UTF-8 string.
///
/// Empty and unreadable files are both `Read` errors; bytes that are not valid
/// UTF-8 are a `Decode` error.
pub fn read_file(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| LocalizationError::read(path, e))?;
    if bytes.is_empty() {
        return Err(LocalizationError::read(
            path,
            io::Error::new(io::ErrorKind::UnexpectedEof, "file is empty"),
        ));
    }
    String::from_utf8(bytes).map_err(|_| LocalizationError::Decode {
        path: path.to_path_buf(),
    })
}

/// Extract the translation key from a single line.
///
/// The key is the text between the first opening quote and its closing quote.
/// Lines without both quotes contribute no key.
pub fn extract_key(line: &str) -> Option<&str> {
    let mut segments = line.split('"');
    segments.next()?;
    let key = segments.next()?;
    // A closing quote must exist, otherwise the segment is just a dangling tail.
    segments.next()?;
    Some(key)
}

/// Parse the set of keys present in a file's text.
pub fn parse_keys(text: &str) -> HashSet<String> {
    text.lines()
        .filter_map(extract_key)
        .map(str::to_string)
        .collect()
}

/// Parse the key→value pairs present in a file's text.
///
/// A line qualifies only if splitting on `=` yields exactly two parts. Both
/// parts are trimmed, a trailing `;` is stripped, and surrounding quotes are
/// removed. When a key repeats, the last occurrence wins.
pub fn parse_entries(text: &str) -> HashMap<String, String> {
    let mut entries = HashMap::new();
    for line in text.lines() {
        let mut parts = line.split('=');
        let (Some(left), Some(right), None) = (parts.next(), parts.next(), parts.next()) else {
            continue;
        };
        entries.insert(clean_token(left).to_string(), clean_token(right).to_string());
    }
    entries
}

fn clean_token(raw: &str) -> &str {
    let token = raw.trim();
    let token = token.strip_suffix(';').unwrap_or(token).trim();
    token.trim_matches('"')
}
