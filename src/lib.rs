//! Locsync - localization-key reconciliation tool
//!
//! Locsync is a CLI tool and library for keeping a directory of
//! `"key" = "value";` localization files in sync. It derives the union of all
//! keys across the files, reports per-file gaps, and can rewrite files so
//! every file carries every key.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands)
//! - `config`: Configuration file loading and parsing
//! - `scanner`: Localization directory scan
//! - `parser`: Minimal line parser for keys and key→value pairs
//! - `aggregator`: Union and missing-key set algebra
//! - `report`: Gap report rendering (terminal and Markdown)
//! - `corrector`: Deterministic file rewriting
//! - `error`: Typed error kinds for the engine

pub mod aggregator;
pub mod cli;
mod commands;
pub mod config;
pub mod corrector;
pub mod error;
pub mod parser;
pub mod report;
pub mod scanner;
