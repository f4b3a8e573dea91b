// crates/cli/src/presentation.rs
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::filesystem;
use crate::options::OutputFormat;
use serde::Serialize;
use std::fmt::Write as _;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use word_stats_core::{AnalysisResult, FrequencyEntry};

#[derive(Serialize)]
struct JsonReport<'a> {
    characters: usize,
    words: usize,
    lines: usize,
    entries: &'a [FrequencyEntry],
}

/// Render the report in the configured format, keeping the top `top_n`
/// ranked entries.
///
/// # Errors
/// Returns [`AppError::Json`] if JSON serialization fails.
pub fn render(result: &AnalysisResult, config: &Config) -> Result<String> {
    let entries = result.ranked.top(config.top_n);
    match config.format {
        OutputFormat::Text => Ok(render_text(result, entries)),
        OutputFormat::Json => render_json(result, entries),
    }
}

fn render_text(result: &AnalysisResult, entries: &[FrequencyEntry]) -> String {
    let mut out = format!(
        "characters: {}\nwords: {}\nlines: {}\n",
        result.chars, result.words, result.lines
    );
    for entry in entries {
        // writing into a String cannot fail
        let _ = writeln!(out, "<{}>: {}", entry.token, entry.count);
    }
    out
}

fn render_json(result: &AnalysisResult, entries: &[FrequencyEntry]) -> Result<String> {
    let report = JsonReport {
        characters: result.chars,
        words: result.words,
        lines: result.lines,
        entries,
    };
    let mut json = serde_json::to_string_pretty(&report)?;
    json.push('\n');
    Ok(json)
}

/// Write a rendered report to `output`, or to stdout when no path is set.
///
/// # Errors
/// Returns [`AppError::Write`] if the destination cannot be written.
pub fn write_report(report: &str, output: Option<&Path>) -> Result<()> {
    if let Some(path) = output {
        log::info!("writing report to {}", path.display());
        return filesystem::write_output(path, report.as_bytes());
    }

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(report.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(|source| AppError::Write {
            path: PathBuf::from("<stdout>"),
            source,
        })
}
