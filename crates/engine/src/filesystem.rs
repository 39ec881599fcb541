// crates/engine/src/filesystem.rs
use crate::config::{Config, WalkOptions};
use crate::error::{EngineError, Result};
use crate::options::Target;
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// A single conversion: `target` is `None` for standard output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub source: PathBuf,
    pub target: Option<PathBuf>,
}

/// Jobs to run plus the entries the walker could not read.
#[derive(Debug, Default)]
pub struct Plan {
    pub jobs: Vec<Job>,
    pub walk_errors: Vec<ignore::Error>,
}

/// Markdown files of a directory, sorted by path.
#[derive(Debug, Default)]
pub struct Walk {
    pub files: Vec<PathBuf>,
    pub errors: Vec<ignore::Error>,
}

/// Collects the Markdown files below `options.source`.
///
/// Without `recursive` only the direct children are considered. Hidden
/// entries are skipped unless `hidden` is set; ignore files are not consulted.
///
/// # Errors
/// Returns an error if an exclude pattern is not a valid glob.
pub fn markdown_files(options: &WalkOptions) -> Result<Walk> {
    let excludes = build_globset(&options.exclude_patterns)?;
    let mut builder = WalkBuilder::new(&options.source);
    builder
        .standard_filters(false)
        .hidden(!options.hidden)
        .max_depth(if options.recursive { None } else { Some(1) });

    let mut walk = Walk::default();
    for entry in builder.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("skipping unreadable entry: {e}");
                walk.errors.push(e);
                continue;
            }
        };
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some(options.extension.as_str()) {
            continue;
        }
        let relative = path.strip_prefix(&options.source).unwrap_or(path);
        if excludes.is_match(relative) {
            log::debug!("excluded {}", path.display());
            continue;
        }
        walk.files.push(path.to_path_buf());
    }
    walk.files.sort();
    Ok(walk)
}

fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern)?);
        // Bare names such as `draft.md` also match in subdirectories.
        if !pattern.contains('/') {
            builder.add(Glob::new(&format!("**/{pattern}"))?);
        }
    }
    Ok(builder.build()?)
}

/// Pairs every source file with its destination.
///
/// # Errors
/// Fails when the source is missing, when a directory source is sent to
/// standard output, when source and target disagree on being a directory, or
/// when a target directory does not exist.
pub fn plan(config: &Config) -> Result<Plan> {
    let source = &config.walk.source;
    if !source.exists() {
        return Err(EngineError::SourceNotFound(source.clone()));
    }
    let extension = config.format.extension();
    let source_is_dir = source.is_dir();

    let (sources, walk_errors) = if source_is_dir {
        let walk = markdown_files(&config.walk)?;
        (walk.files, walk.errors)
    } else {
        (vec![source.clone()], Vec::new())
    };

    let jobs = match &config.target {
        Target::Beside => sources
            .into_iter()
            .map(|source| Job {
                target: Some(source.with_extension(extension)),
                source,
            })
            .collect(),
        Target::Stdout if source_is_dir => return Err(EngineError::DirectoryToStdout),
        Target::Stdout => vec![Job {
            source: source.clone(),
            target: None,
        }],
        Target::Path(target) => {
            if source_is_dir {
                if !target.exists() {
                    return Err(EngineError::TargetNotFound(target.clone()));
                }
                if !target.is_dir() {
                    return Err(EngineError::KindMismatch);
                }
                sources
                    .into_iter()
                    .map(|file| {
                        let relative = file.strip_prefix(source).unwrap_or(&file);
                        let target = mirror(target, relative, config.walk.recursive);
                        Job {
                            target: Some(target.with_extension(extension)),
                            source: file,
                        }
                    })
                    .collect()
            } else {
                if target.is_dir() {
                    return Err(EngineError::KindMismatch);
                }
                vec![Job {
                    source: source.clone(),
                    target: Some(target.clone()),
                }]
            }
        }
    };
    Ok(Plan { jobs, walk_errors })
}

/// Destination of `relative` inside `target`; flat unless the walk was recursive.
fn mirror(target: &Path, relative: &Path, recursive: bool) -> PathBuf {
    if recursive {
        target.join(relative)
    } else {
        target.join(relative.file_name().unwrap_or(relative.as_os_str()))
    }
}
