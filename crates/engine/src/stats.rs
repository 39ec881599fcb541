// crates/engine/src/stats.rs
use crate::error::EngineError;
use serde::Serialize;
use std::path::PathBuf;

/// Where a converted document went.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "value")]
pub enum Output {
    Written(PathBuf),
    /// Rendered document to be printed by the caller.
    Stdout(String),
}

/// A successful conversion.
#[derive(Debug, Clone, Serialize)]
pub struct Conversion {
    pub source: PathBuf,
    pub output: Output,
    /// Size of the rendered document in bytes.
    pub bytes: usize,
}

impl Conversion {
    #[must_use]
    pub fn target(&self) -> Option<&PathBuf> {
        match &self.output {
            Output::Written(path) => Some(path),
            Output::Stdout(_) => None,
        }
    }
}

/// Result of a run containing conversions and the failures collected along the way.
#[derive(Debug, Default)]
pub struct RunResult {
    pub conversions: Vec<Conversion>,
    pub errors: Vec<(PathBuf, EngineError)>,
}

impl RunResult {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}
