use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Output file name used when none is given.
pub const DEFAULT_OUTPUT: &str = "combined_project.txt";

/// Directory names whose contents are never combined, matched against
/// whole path components.
pub const IGNORED_DIRS: &[&str] = &[
    ".git",
    "__pycache__",
    "myenv",
    ".vscode",
    ".idea",
    "node_modules",
    "venv",
    "env",
    "dist",
    "build",
    "target",
];

/// Extensions (without the dot, lowercase) of files that are never read.
pub const IGNORED_EXTENSIONS: &[&str] = &["pyc", "png", "jpg", "jpeg", "gif", "ico", "svg", "pdf"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombineOptions {
    /// Directory whose files are combined.
    pub root: PathBuf,
    /// Destination of the combined document, relative to the working directory.
    pub output: PathBuf,
}

impl Default for CombineOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl CombineOptions {
    /// File name the filter treats as "our own output".
    ///
    /// Only the last component of [`CombineOptions::output`] is used, so
    /// `out/all.txt` excludes every file named `all.txt`.
    pub fn output_file_name(&self) -> String {
        output_file_name(&self.output)
    }
}

pub(crate) fn output_file_name(output: &Path) -> String {
    output
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| output.to_string_lossy().into_owned())
}

#[derive(Debug, Default)]
pub struct CombineBuilder {
    options: CombineOptions,
}

impl CombineBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: CombineOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.output = path.into();
        self
    }
    pub fn build(self) -> CombineOptions {
        self.options
    }
}
