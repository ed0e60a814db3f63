//! Accumulation and persistence of the combined document.
//!
//! Each section renders as
//!
//! ```text
//! \n\n==================================================\nFILE: <label>\n==================================================\n\n<content>
//! ```
//!
//! and sections are concatenated with nothing in between.

use crate::error::WriteError;
use std::fs;
use std::path::Path;

/// Width of the `=` rule around each section header.
pub const DELIMITER_WIDTH: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub label: String,
    pub content: String,
}

/// Sections collected during a run, in discovery order.
#[derive(Debug, Default)]
pub struct CombinedDocument {
    sections: Vec<Section>,
}

impl CombinedDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, label: impl Into<String>, content: impl Into<String>) {
        self.sections.push(Section {
            label: label.into(),
            content: content.into(),
        });
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn render(&self) -> String {
        let rule = "=".repeat(DELIMITER_WIDTH);
        let capacity = self
            .sections
            .iter()
            .map(|s| s.label.len() + s.content.len() + 2 * DELIMITER_WIDTH + 16)
            .sum();
        let mut out = String::with_capacity(capacity);
        for section in &self.sections {
            out.push_str("\n\n");
            out.push_str(&rule);
            out.push_str("\nFILE: ");
            out.push_str(&section.label);
            out.push('\n');
            out.push_str(&rule);
            out.push_str("\n\n");
            out.push_str(&section.content);
        }
        out
    }

    /// Writes every section to `path`, replacing whatever was there.
    ///
    /// An empty document is refused with [`WriteError::NoContent`] and the
    /// destination is left untouched.
    pub fn finalize(&self, path: impl AsRef<Path>) -> Result<(), WriteError> {
        if self.is_empty() {
            return Err(WriteError::NoContent);
        }
        let path = path.as_ref();
        fs::write(path, self.render()).map_err(|source| WriteError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
