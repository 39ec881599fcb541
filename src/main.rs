// src/main.rs
use anyhow::Context;
use clap::Parser;
use markdown_kit::args::Args;
use markdown_kit::config::Config;
use markdown_kit::{logging, presentation};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.behavior.verbose, args.behavior.quiet);

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Application Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Returns `Ok(false)` when some files failed to convert.
fn run(args: &Args) -> anyhow::Result<bool> {
    let config = Config::try_from(args).context("invalid arguments")?;
    log::debug!("mdkit v{} · parallel={}", markdown_kit::VERSION, config.threads);

    let result = markdown_kit_engine::run(&config)
        .with_context(|| format!("cannot convert '{}'", config.walk.source.display()))?;
    presentation::print_errors(&result);

    let stdout = std::io::stdout();
    presentation::print_results(&result, args.output.report, &mut stdout.lock())
        .context("failed to print results")?;
    Ok(result.is_success())
}
