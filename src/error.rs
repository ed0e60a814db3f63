use std::path::PathBuf;
use thiserror::Error;

/// Why a single file could not be loaded as text. Never fatal to a run.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("{path} is not UTF-8 text ({})", content_hint(.binary))]
    NotText { path: PathBuf, binary: bool },
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("No files were processed. Check directory structure and ignore rules.")]
    NoContent,
    #[error("Cannot write {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum CombineError {
    #[error("Directory not found: {path} ({reason})")]
    InvalidRoot { path: PathBuf, reason: String },
    #[error(transparent)]
    Write(#[from] WriteError),
}

impl ReadError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ReadError::Io {
            path: path.into(),
            source,
        }
    }
}

impl CombineError {
    pub(crate) fn invalid_root(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        CombineError::InvalidRoot {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

fn content_hint(binary: &bool) -> &'static str {
    if *binary {
        "binary content"
    } else {
        "non-UTF-8 encoding"
    }
}
