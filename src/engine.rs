use crate::error::{CombineError, ReadError};
use crate::filter::{is_ignored_dir, should_include};
use crate::options::CombineOptions;
use crate::output::CombinedDocument;
use crate::reader::read_text;
use crate::report::Reporter;
use crate::types::{RunSummary, TraversalEntry};
use ignore::WalkBuilder;
use std::collections::HashSet;
use std::fs;
use std::path::{Component, Path, PathBuf};

struct Walker {
    root: PathBuf,
    inner: ignore::Walk,
}

impl Walker {
    /// Walks every entry below `root` in file-name order. Hidden files and
    /// ignore files get no special treatment here; the filter decides.
    fn new(root: &Path) -> Self {
        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b));
        // Denylisted directories are yielded once but never descended into.
        let prune_root = root.to_path_buf();
        builder.filter_entry(move |entry| !below_ignored_dir(&prune_root, entry.path()));
        Self {
            root: root.to_path_buf(),
            inner: builder.build(),
        }
    }

    fn entries(self) -> impl Iterator<Item = Walked> {
        let root = self.root;
        let mut seen_dirs = HashSet::new();
        self.inner.filter_map(move |result| match result {
            Ok(entry) if entry.depth() == 0 => None,
            Ok(entry) => {
                if entry.file_type().is_some_and(|kind| kind.is_dir()) {
                    seen_dirs.insert(entry.path().to_path_buf());
                }
                Some(Walked::Entry(TraversalEntry::resolve(&root, entry.path())))
            }
            Err(e) => {
                let error = walk_error(&root, e);
                let already_counted = match &error {
                    ReadError::Io { path, .. } => seen_dirs.contains(path),
                    ReadError::NotText { .. } => false,
                };
                Some(Walked::Failure { error, already_counted })
            }
        })
    }
}

enum Walked {
    Entry(TraversalEntry),
    /// `already_counted` is set when the failing path was already yielded as an
    /// entry, e.g. a directory that could not be listed.
    Failure { error: ReadError, already_counted: bool },
}

fn below_ignored_dir(root: &Path, path: &Path) -> bool {
    path.parent()
        .and_then(|parent| parent.strip_prefix(root).ok())
        .is_some_and(|relative| {
            relative.components().any(|component| match component {
                Component::Normal(part) => is_ignored_dir(&part.to_string_lossy()),
                _ => false,
            })
        })
}

fn walk_error(root: &Path, error: ignore::Error) -> ReadError {
    let path = walk_error_path(&error).unwrap_or(root).to_path_buf();
    // The io error from the walk embeds the path again; keep only its kind.
    let source = match error.into_io_error() {
        Some(io) => std::io::Error::from(io.kind()),
        None => std::io::Error::other("directory walk failed"),
    };
    ReadError::Io { path, source }
}

fn walk_error_path(error: &ignore::Error) -> Option<&Path> {
    match error {
        ignore::Error::WithPath { path, .. } => Some(path.as_path()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            walk_error_path(err)
        }
        ignore::Error::Loop { child, .. } => Some(child.as_path()),
        _ => None,
    }
}

/// Resolves the root to an absolute directory path.
pub fn resolve_root(root: &Path) -> Result<PathBuf, CombineError> {
    let resolved =
        fs::canonicalize(root).map_err(|e| CombineError::invalid_root(root, e.to_string()))?;
    if !resolved.is_dir() {
        return Err(CombineError::invalid_root(resolved, "not a directory"));
    }
    Ok(resolved)
}

/// Combines every eligible file below `options.root` into `options.output`.
///
/// Per-file failures are reported and counted as skipped; only an invalid
/// root, an empty result or a failed write end the run with an error.
pub fn combine(
    options: &CombineOptions,
    reporter: &mut dyn Reporter,
) -> Result<RunSummary, CombineError> {
    let root = resolve_root(&options.root)?;
    let output_name = options.output_file_name();
    reporter.info(&format!("Project directory: {}", root.display()));
    reporter.info(&format!("Output file: {}", options.output.display()));
    reporter.info(&format!(
        "Starting project combination from: {}",
        root.display()
    ));
    #[cfg(feature = "logging")]
    tracing::debug!("Combining {} into {}", root.display(), options.output.display());

    let mut document = CombinedDocument::new();
    let mut summary = RunSummary::default();
    for entry in Walker::new(&root).entries() {
        let entry = match entry {
            Walked::Entry(entry) => entry,
            Walked::Failure { error, already_counted } => {
                reporter.error(&format!("Error walking directory: {}", error));
                if !already_counted {
                    summary.skipped += 1;
                }
                continue;
            }
        };
        if !should_include(&entry, &output_name) {
            #[cfg(feature = "logging")]
            tracing::debug!("Excluded: {}", entry.label());
            summary.skipped += 1;
            continue;
        }
        let label = entry.label();
        match read_text(&entry.path) {
            Ok(content) => {
                document.append(label.as_str(), content);
                summary.processed += 1;
                reporter.info(&format!("Processed: {}", label));
            }
            Err(e @ ReadError::NotText { .. }) => {
                reporter.warning(&format!("Skipped non-text file {}: {}", label, e));
                summary.skipped += 1;
            }
            Err(e @ ReadError::Io { .. }) => {
                reporter.error(&format!("Error processing {}: {}", label, e));
                summary.skipped += 1;
            }
        }
    }

    document.finalize(&options.output)?;
    reporter.success(&format!(
        "Combined {} files into {}",
        summary.processed,
        options.output.display()
    ));
    reporter.success(&format!("Skipped {} files/directories", summary.skipped));
    Ok(summary)
}
