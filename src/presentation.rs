// src/presentation.rs
use crate::error::Result;
use crate::options::ReportFormat;
use markdown_kit_engine::stats::{Conversion, Output, RunResult};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Serialize)]
struct Report<'a> {
    version: &'a str,
    version_number: u32,
    converted: Vec<FileReport<'a>>,
    failed: Vec<FailureReport>,
}

#[derive(Debug, Serialize)]
struct FileReport<'a> {
    source: &'a Path,
    /// `None` for standard output
    target: Option<&'a Path>,
    bytes: usize,
}

#[derive(Debug, Serialize)]
struct FailureReport {
    source: String,
    error: String,
}

/// Prints rendered documents destined for stdout, then the summary.
///
/// # Errors
/// Returns an error if stdout cannot be written or the JSON report fails to serialize.
pub fn print_results(result: &RunResult, report: ReportFormat, out: &mut impl Write) -> Result<()> {
    for conversion in &result.conversions {
        if let Output::Stdout(rendered) = &conversion.output {
            out.write_all(rendered.as_bytes())?;
        }
    }
    match report {
        ReportFormat::Text => print_text(&result.conversions, out),
        ReportFormat::Json => print_json(result, out),
    }
}

fn print_text(conversions: &[Conversion], out: &mut impl Write) -> Result<()> {
    for conversion in conversions {
        if let Some(target) = conversion.target() {
            writeln!(
                out,
                "converted '{}' into '{}'",
                file_name(&conversion.source),
                file_name(target)
            )?;
        }
    }
    Ok(())
}

fn print_json(result: &RunResult, out: &mut impl Write) -> Result<()> {
    let report = Report {
        version: crate::VERSION,
        version_number: crate::VERSION_NUMBER,
        converted: result
            .conversions
            .iter()
            .filter(|c| c.target().is_some())
            .map(|c| FileReport {
                source: &c.source,
                target: c.target().map(|p| p.as_path()),
                bytes: c.bytes,
            })
            .collect(),
        failed: result
            .errors
            .iter()
            .map(|(path, err)| FailureReport {
                source: path.display().to_string(),
                error: err.to_string(),
            })
            .collect(),
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

/// Errors go to stderr, one per line.
pub fn print_errors(result: &RunResult) {
    for (path, err) in &result.errors {
        eprintln!("Error processing {}: {err}", path.display());
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}
