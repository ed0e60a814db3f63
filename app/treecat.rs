//! Command-line interface for treecat.
//!
//! Combines the text files of a project directory into one file.

use clap::Parser;
use std::path::PathBuf;
use std::process::exit;
use treecat::{CombineBuilder, ConsoleReporter, DEFAULT_OUTPUT, Reporter, combine};

/// treecat: combine project files into a single text file
#[derive(Parser)]
#[command(name = "treecat", version, about, long_about = None)]
struct Cli {
    /// Project directory (default current dir)
    #[arg(short, long, default_value = ".")]
    directory: PathBuf,

    /// Output file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
}

fn main() {
    let cli = Cli::parse();
    let options = CombineBuilder::new(cli.directory).output(cli.output).build();
    let mut reporter = ConsoleReporter;
    if let Err(e) = combine(&options, &mut reporter) {
        reporter.error(&e.to_string());
        exit(1);
    }
}
