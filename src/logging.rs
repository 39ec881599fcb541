// src/logging.rs
use log::LevelFilter;

/// Environment variable overriding the level chosen by `-v`/`-q`.
pub const LOG_ENV: &str = "MDKIT_LOG";

/// `-q` → error, default → warn, each `-v` one step more.
#[must_use]
pub const fn level_for(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Installs `env_logger`; log lines go to stderr so stdout stays clean.
///
/// Returns `false` when another logger was already installed.
pub fn init(verbose: u8, quiet: bool) -> bool {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level_for(verbose, quiet))
        .format_timestamp(None)
        .parse_env(LOG_ENV);
    match builder.try_init() {
        Ok(()) => true,
        Err(e) => {
            log::debug!("keeping the existing logger: {e}");
            false
        }
    }
}
