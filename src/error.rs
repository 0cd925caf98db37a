//! Error kinds surfaced by the reconciliation engine.
//!
//! Every failure is terminal for the current operation: the CLI layer prints a
//! single message and exits non-zero. The enum keeps the offending path so the
//! message can always point at the file or directory involved.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LocalizationError {
    /// File bytes are not valid UTF-8 text.
    #[error("failed to decode {}: not valid UTF-8", path.display())]
    Decode { path: PathBuf },

    /// File is empty or unreadable at the byte level.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Directory scan produced zero candidate localization files.
    #[error("no localization files found in {}", dir.display())]
    NoLocalizationFilesFound { dir: PathBuf },

    /// Report destination is missing or not a directory.
    #[error("invalid report destination {}: not an existing directory", path.display())]
    InvalidReportDestination { path: PathBuf },

    /// Rewriting a corrected file failed.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LocalizationError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, LocalizationError>;
