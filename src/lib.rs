//! # Treecat
//!
//! `treecat` walks a directory tree and concatenates every readable text file into a
//! single output file, each one under a header naming its path relative to the root.
//!
//! Entries are filtered before they are read: non-files, hidden files, the output file
//! itself, anything below a denylisted directory (`.git`, `node_modules`, `target`, ...)
//! and files with image or document extensions never reach the output. Files that are not
//! valid UTF-8 are skipped with a warning. The output is written once, after the walk, and
//! only if at least one file was combined.
//!
//! # Features
//!
//! - `logging`: Enables debug logging of filter decisions via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use treecat::{CombineBuilder, ConsoleReporter, combine};
//!
//! let options = CombineBuilder::new(".")
//!     .output("snapshot.txt")
//!     .build();
//!
//! let summary = combine(&options, &mut ConsoleReporter).expect("Failed to combine directory");
//! println!("{} combined, {} skipped", summary.processed, summary.skipped);
//! ```

mod engine;
mod error;
mod filter;
mod options;
mod output;
mod reader;
mod report;
mod types;

pub use engine::{combine, resolve_root};
pub use error::{CombineError, ReadError, WriteError};
pub use filter::should_include;
pub use options::{
    CombineBuilder, CombineOptions, DEFAULT_OUTPUT, IGNORED_DIRS, IGNORED_EXTENSIONS,
};
pub use output::{CombinedDocument, DELIMITER_WIDTH, Section};
pub use reader::read_text;
pub use report::{ConsoleReporter, Level, LevelStyle, MemoryReporter, Reporter};
pub use types::{RunSummary, TraversalEntry};
