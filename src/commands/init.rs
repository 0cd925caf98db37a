//! `locsync init`: write a default configuration file.

use std::{fs, path::Path};

use anyhow::Result;
use colored::Colorize;

use crate::cli::ExitStatus;
use crate::config::{CONFIG_FILE_NAME, Config};
use crate::report::SUCCESS_MARK;

pub(crate) fn init() -> Result<ExitStatus> {
    let config_path = Path::new(CONFIG_FILE_NAME);

    if config_path.exists() {
        eprintln!("Error: {} already exists", CONFIG_FILE_NAME);
        return Ok(ExitStatus::Failure);
    }

    fs::write(config_path, Config::default_json()?)?;
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", CONFIG_FILE_NAME).green()
    );

    Ok(ExitStatus::Success)
}
