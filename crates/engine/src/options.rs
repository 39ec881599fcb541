// crates/engine/src/options.rs
use serde::{Deserialize, Serialize};

pub use markdown_kit_core::Flavor;

/// Kind of document written for each source file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Rendered HTML
    #[default]
    Html,
    /// Plain text without markup
    Text,
    /// AST as JSON
    Json,
    /// AST as YAML
    Yaml,
}

impl OutputFormat {
    /// File extension used when the target name is derived from the source.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Text => "txt",
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

/// Where converted documents go.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Target {
    /// Next to each source, with the extension replaced.
    #[default]
    Beside,
    /// Standard output; only valid for a single source file.
    Stdout,
    /// An output file, or an existing directory when the source is a directory.
    Path(std::path::PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extensions() {
        assert_eq!(OutputFormat::Html.extension(), "html");
        assert_eq!(OutputFormat::Text.extension(), "txt");
        assert_eq!(OutputFormat::Yaml.extension(), "yaml");
    }
}
