// crates/engine/src/lib.rs
use rayon::prelude::*;
use std::path::PathBuf;

pub mod config;
pub mod error;
pub mod filesystem;
pub mod options;
pub mod processor;
pub mod stats;

use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::filesystem::Plan;
use crate::stats::{Conversion, RunResult};
use markdown_kit_core::MarkdownParser;

/// Run the conversion engine.
///
/// Returns a `RunResult` containing both successful conversions and any
/// errors encountered during processing.
///
/// # Errors
///
/// Returns an error for fatal problems: a missing source, a source/target
/// mismatch, an invalid exclude pattern or a thread pool that cannot be
/// built. In strict mode the first per-file failure is returned as well.
/// Otherwise per-file errors are collected in `RunResult::errors`.
pub fn run(config: &Config) -> Result<RunResult> {
    let Plan {
        jobs,
        mut walk_errors,
    } = filesystem::plan(config)?;
    log::debug!(
        "{} file(s) to convert with {} thread(s)",
        jobs.len(),
        config.threads
    );
    if config.strict && !walk_errors.is_empty() {
        return Err(walk_errors.swap_remove(0).into());
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()?;
    let parser = MarkdownParser::for_flavor(config.flavor);

    let mut result = pool.install(|| {
        let iter = jobs.par_iter();
        if config.strict {
            // Strict mode: fail on first error
            let conversions = iter
                .map(|job| processor::process_file(job, &parser, config))
                .collect::<Result<Vec<_>>>()?;
            Ok::<_, EngineError>(RunResult {
                conversions,
                errors: Vec::new(),
            })
        } else {
            // Non-strict mode: collect errors alongside successful results
            let outcomes: Vec<std::result::Result<Conversion, (PathBuf, EngineError)>> = iter
                .map(|job| {
                    processor::process_file(job, &parser, config)
                        .map_err(|e| (job.source.clone(), e))
                })
                .collect();
            let mut result = RunResult::default();
            for outcome in outcomes {
                match outcome {
                    Ok(conversion) => result.conversions.push(conversion),
                    Err(failure) => result.errors.push(failure),
                }
            }
            Ok(result)
        }
    })?;

    // Entries the walker could not read are reported like file failures
    for walk_err in walk_errors {
        result.errors.push((PathBuf::from("<walk>"), walk_err.into()));
    }
    Ok(result)
}
