// crates/engine/src/processor.rs
use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::filesystem::Job;
use crate::options::OutputFormat;
use crate::stats::{Conversion, Output};
use markdown_kit_core::ast::Block;
use markdown_kit_core::html::encode_predefined_xml_entities;
use markdown_kit_core::{HtmlGenerator, MarkdownParser};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Converts one source file according to `config`.
///
/// # Errors
/// Returns an error if the source cannot be read, the target already exists
/// (without `force`), or the target cannot be written.
pub fn process_file(job: &Job, parser: &MarkdownParser, config: &Config) -> Result<Conversion> {
    let input = fs::read_to_string(&job.source).map_err(|e| EngineError::FileRead {
        path: job.source.clone(),
        source: e,
    })?;
    let title = job
        .source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let rendered = render(&input, parser, config, &title)?;
    let bytes = rendered.len();

    let output = match &job.target {
        Some(target) => {
            write_target(target, &rendered, config.force)?;
            log::info!("converted '{}' into '{}'", job.source.display(), target.display());
            Output::Written(target.clone())
        }
        None => Output::Stdout(rendered),
    };
    Ok(Conversion {
        source: job.source.clone(),
        output,
        bytes,
    })
}

/// Renders Markdown `input` in the configured output format.
///
/// `fallback_title` names a standalone HTML document without a heading.
///
/// # Errors
/// Returns an error only if AST serialization fails.
pub fn render(
    input: &str,
    parser: &MarkdownParser,
    config: &Config,
    fallback_title: &str,
) -> Result<String> {
    let doc = parser.parse(input);
    let rendered = match config.format {
        OutputFormat::Html => {
            let body = HtmlGenerator::new().generate(&doc);
            if config.standalone {
                let title = first_heading(&doc).unwrap_or_else(|| fallback_title.to_string());
                standalone_document(&title, &body)
            } else {
                body
            }
        }
        OutputFormat::Text => {
            let mut text = doc.plain_text();
            if !text.is_empty() && !text.ends_with('\n') {
                text.push('\n');
            }
            text
        }
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&doc)?;
            json.push('\n');
            json
        }
        OutputFormat::Yaml => serde_yaml::to_string(&doc)?,
    };
    Ok(rendered)
}

fn first_heading(doc: &Block) -> Option<String> {
    doc.children()?.iter().find_map(|block| match block {
        Block::Heading { text, .. } => Some(text.raw_string()),
        _ => None,
    })
}

fn standalone_document(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n{body}</body>\n</html>\n",
        encode_predefined_xml_entities(title)
    )
}

fn write_target(target: &Path, contents: &str, force: bool) -> Result<()> {
    let write_error = |e| EngineError::FileWrite {
        path: target.to_path_buf(),
        source: e,
    };
    if let Some(parent) = target.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(write_error)?;
    }
    let mut options = OpenOptions::new();
    options.write(true);
    if force {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }
    let mut file = options.open(target).map_err(|e| {
        if e.kind() == std::io::ErrorKind::AlreadyExists {
            EngineError::TargetExists(target.to_path_buf())
        } else {
            write_error(e)
        }
    })?;
    file.write_all(contents.as_bytes()).map_err(write_error)
}
