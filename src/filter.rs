//! Inclusion rules for traversal entries.

use crate::options::{IGNORED_DIRS, IGNORED_EXTENSIONS};
use crate::types::TraversalEntry;

/// Decides whether `entry` belongs in the combined document.
///
/// An entry is excluded when it is not a regular file, carries the output
/// file's name, is hidden, sits below a denylisted directory, or has a
/// denylisted extension. Directory names match whole components only:
/// `node_modules` is excluded, `my_node_modules_thing` is not.
pub fn should_include(entry: &TraversalEntry, output_file_name: &str) -> bool {
    if !entry.is_file {
        return false;
    }
    if entry.file_name == output_file_name || entry.file_name.starts_with('.') {
        return false;
    }
    if entry.components.iter().any(|part| is_ignored_dir(part)) {
        return false;
    }
    !entry
        .extension
        .as_deref()
        .is_some_and(is_ignored_extension)
}

pub(crate) fn is_ignored_dir(name: &str) -> bool {
    IGNORED_DIRS.contains(&name)
}

fn is_ignored_extension(ext: &str) -> bool {
    IGNORED_EXTENSIONS
        .iter()
        .any(|ignored| ignored.eq_ignore_ascii_case(ext))
}
