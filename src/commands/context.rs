//! Shared state built once per command invocation.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::aggregator::KeySetAggregator;
use crate::cli::CommonArgs;
use crate::config::Config;
use crate::parser::{parse_entries, parse_keys, read_file};
use crate::scanner::{LocalizationFile, scan_directory};

/// Everything one command run needs: the scanned file list, each file's raw
/// text, and the aggregated key sets. Built fresh per invocation, never cached
/// across runs.
pub(crate) struct RunContext {
    pub config: Config,
    pub dir: PathBuf,
    pub files: Vec<LocalizationFile>,
    pub aggregator: KeySetAggregator,
    texts: HashMap<String, String>,
}

impl RunContext {
    /// Scan the localization directory and parse every file's key set.
    /// The directory comes from the CLI argument, falling back to the config.
    pub(crate) fn load(common: &CommonArgs) -> Result<Self> {
        let config = Config::load(Path::new("."))?;
        let dir = common
            .dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.localization_root));

        let files = scan_directory(&dir)?;

        let mut aggregator = KeySetAggregator::new();
        let mut texts = HashMap::new();
        for file in &files {
            let text = read_file(&file.path)?;
            aggregator.insert(file.name.clone(), parse_keys(&text));
            texts.insert(file.name.clone(), text);
        }

        Ok(Self {
            config,
            dir,
            files,
            aggregator,
            texts,
        })
    }

    /// Key→value maps per file, parsed on demand for the correction pass.
    pub(crate) fn values_by_file(&self) -> HashMap<String, HashMap<String, String>> {
        self.texts
            .iter()
            .map(|(name, text)| (name.clone(), parse_entries(text)))
            .collect()
    }
}
