//! Configuration file loading and parsing.
//!
//! `.locsyncrc.json` is optional; every field has a default and CLI arguments
//! override whatever the file says. A missing file is fine, a malformed one is
//! an error.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".locsyncrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory holding the `localization-<code>` files.
    #[serde(default = "default_localization_root")]
    pub localization_root: String,
    /// Directory the Markdown report is written into.
    #[serde(default = "default_report_root")]
    pub report_root: String,
}

fn default_localization_root() -> String {
    ".".to_string()
}

fn default_report_root() -> String {
    ".".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            localization_root: default_localization_root(),
            report_root: default_report_root(),
        }
    }
}

impl Config {
    /// Load the config from `dir`, falling back to defaults when no config
    /// file exists there.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Serialize the default config for `locsync init`.
    pub fn default_json() -> Result<String> {
        let json = serde_json::to_string_pretty(&Self::default())?;
        Ok(json + "\n")
    }
}
