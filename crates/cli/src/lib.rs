// crates/cli/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod args;
pub mod config;
pub mod error;
pub mod filesystem;
pub mod logging;
pub mod options;
pub mod parsers;
pub mod presentation;

use crate::config::Config;
use crate::error::Result;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Read the configured input, analyze it and emit the report.
///
/// The report is rendered in full before anything is written, so a failed
/// analysis never leaves a half-written output file behind.
///
/// # Errors
/// Returns an error if the input is missing or unreadable, the analysis
/// configuration is invalid, or the report cannot be written.
pub fn run(config: &Config) -> Result<()> {
    let raw = filesystem::read_input(&config.input)?;
    log::info!("read {} bytes from {}", raw.len(), config.input.display());

    let result = word_stats_core::analyze(&raw, &config.analysis)?;
    let report = presentation::render(&result, config)?;
    presentation::write_report(&report, config.output.as_deref())
}
