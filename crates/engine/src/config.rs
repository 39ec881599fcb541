// crates/engine/src/config.rs
use crate::options::{Flavor, OutputFormat, Target};
use derive_builder::Builder;
use std::path::PathBuf;

/// Which Markdown files a directory source contributes.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct WalkOptions {
    #[builder(default)]
    pub source: PathBuf,
    /// Descend into subdirectories instead of reading only the top level.
    #[builder(default)]
    pub recursive: bool,
    #[builder(default)]
    pub hidden: bool,
    /// Glob patterns matched against paths relative to the source directory.
    #[builder(default)]
    pub exclude_patterns: Vec<String>,
    #[builder(default = "\"md\".to_string()")]
    pub extension: String,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            source: PathBuf::new(),
            recursive: false,
            hidden: false,
            exclude_patterns: vec![],
            extension: "md".to_string(),
        }
    }
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
#[allow(clippy::struct_excessive_bools)]
pub struct Config {
    #[builder(default)]
    pub walk: WalkOptions,
    #[builder(default)]
    pub target: Target,

    #[builder(default)]
    pub flavor: Flavor,
    #[builder(default)]
    pub format: OutputFormat,
    /// Wrap HTML output in a complete document.
    #[builder(default)]
    pub standalone: bool,

    #[builder(default = "1")]
    pub threads: usize,
    #[builder(default)]
    pub force: bool,
    #[builder(default)]
    pub strict: bool,
}

impl ConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if self.threads == Some(0) {
            return Err("threads must be at least 1".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            walk: WalkOptions::default(),
            target: Target::Beside,
            flavor: Flavor::Standard,
            format: OutputFormat::Html,
            standalone: false,
            threads: 1,
            force: false,
            strict: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let config = ConfigBuilder::default().build().unwrap();
        assert_eq!(config.threads, 1);
        assert_eq!(config.format, OutputFormat::Html);
        assert_eq!(config.walk.extension, "md");
        assert_eq!(config.target, Target::Beside);
    }

    #[test]
    fn zero_threads_is_rejected() {
        let err = ConfigBuilder::default().threads(0usize).build().unwrap_err();
        assert!(err.to_string().contains("threads"));
    }
}
