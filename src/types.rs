use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

/// A filesystem entry discovered while walking the root directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalEntry {
    /// Absolute path of the entry.
    pub path: PathBuf,
    /// Path relative to the root directory.
    pub relative: PathBuf,
    /// Whether the entry resolves to a regular file. Symlinks are followed,
    /// so a dangling link is not a file.
    pub is_file: bool,
    /// Final component of the path.
    pub file_name: String,
    /// Extension without the leading dot, if any.
    pub extension: Option<String>,
    /// Components of [`TraversalEntry::relative`], outermost first.
    pub components: Vec<String>,
}

impl TraversalEntry {
    /// Resolves the metadata of `path`, which must live under `root`.
    ///
    /// This is the only place an entry touches the filesystem; the filter
    /// works on the resolved values alone.
    pub fn resolve(root: &Path, path: &Path) -> Self {
        let is_file = path.is_file();
        Self::with_kind(root, path, is_file)
    }

    /// Builds an entry with an explicit file kind, without any I/O.
    pub fn with_kind(root: &Path, path: &Path, is_file: bool) -> Self {
        let relative = path.strip_prefix(root).unwrap_or(path).to_path_buf();
        let components = relative
            .components()
            .filter_map(|component| match component {
                Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect();
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().into_owned());
        Self {
            path: path.to_path_buf(),
            relative,
            is_file,
            file_name,
            extension,
            components,
        }
    }

    /// Platform-neutral label for the entry: relative components joined by `/`.
    pub fn label(&self) -> String {
        self.components.join("/")
    }
}

/// Outcome of one combination run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Files whose content made it into the output.
    pub processed: usize,
    /// Entries excluded by the filter or that failed to read.
    pub skipped: usize,
}
