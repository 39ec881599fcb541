// src/config.rs
use crate::args::Args;
use crate::error::{AppError, Result};
use crate::options;
pub use markdown_kit_engine::config::{Config, ConfigBuilder, WalkOptions, WalkOptionsBuilder};
use markdown_kit_engine::options::{self as engine_options, Target};

impl TryFrom<&Args> for Config {
    type Error = AppError;

    fn try_from(args: &Args) -> Result<Self> {
        let flavor = if args.output.extended {
            engine_options::Flavor::Extended
        } else {
            args.output.flavor.into()
        };
        let format: engine_options::OutputFormat = args.output.format.into();
        let threads = args.scan.jobs.unwrap_or_else(num_cpus::get);

        ConfigBuilder::default()
            .walk(walk_options_from_args(args)?)
            .target(target_from_args(args))
            .flavor(flavor)
            .format(format)
            .standalone(args.output.standalone)
            .threads(threads)
            .force(args.behavior.force)
            .strict(args.behavior.strict)
            .build()
            .map_err(|e| AppError::Config(e.to_string()))
    }
}

fn walk_options_from_args(args: &Args) -> Result<WalkOptions> {
    WalkOptionsBuilder::default()
        .source(args.source.clone())
        .recursive(args.scan.recursive)
        .hidden(args.scan.hidden)
        .exclude_patterns(args.scan.exclude.clone())
        .build()
        .map_err(|e| AppError::Config(e.to_string()))
}

fn target_from_args(args: &Args) -> Target {
    match &args.target {
        _ if args.to_stdout() => Target::Stdout,
        Some(path) => Target::Path(path.clone()),
        None => Target::Beside,
    }
}

// From trait implementations for CLI -> Engine enum conversion

macro_rules! map_enum {
    ($from:ty, $to:ty, $($variant:ident),+ $(,)?) => {
        impl From<$from> for $to {
            fn from(f: $from) -> Self {
                match f {
                    $( <$from>::$variant => <$to>::$variant, )+
                }
            }
        }
    };
}

map_enum!(options::Flavor, engine_options::Flavor, Standard, Extended);
map_enum!(
    options::OutputFormat,
    engine_options::OutputFormat,
    Html,
    Text,
    Json,
    Yaml
);

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;

    fn config(argv: &[&str]) -> Config {
        let args = Args::try_parse_from(argv).unwrap();
        Config::try_from(&args).unwrap()
    }

    #[test]
    fn defaults() {
        let config = config(&["mdkit", "README.md"]);
        assert_eq!(config.target, Target::Beside);
        assert_eq!(config.flavor, engine_options::Flavor::Standard);
        assert_eq!(config.format, engine_options::OutputFormat::Html);
        assert!(config.threads >= 1);
        assert!(!config.walk.recursive);
    }

    #[test]
    fn extended_flag_overrides_flavor() {
        let config = config(&["mdkit", "--extended", "--flavor", "standard", "a.md"]);
        assert_eq!(config.flavor, engine_options::Flavor::Extended);
    }

    #[test]
    fn target_kinds() {
        assert_eq!(config(&["mdkit", "a.md", "-"]).target, Target::Stdout);
        assert_eq!(
            config(&["mdkit", "a.md", "b.html"]).target,
            Target::Path(PathBuf::from("b.html"))
        );
    }

    #[test]
    fn zero_jobs_is_invalid() {
        let args = Args::try_parse_from(["mdkit", "--jobs", "0", "a.md"]).unwrap();
        assert!(matches!(Config::try_from(&args), Err(AppError::Config(_))));
    }
}
