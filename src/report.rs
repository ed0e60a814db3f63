//! Human-readable progress messages.

use colored::{Color, Colorize};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

/// How a message category is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelStyle {
    pub tag: &'static str,
    pub color: Color,
}

impl Level {
    pub const ALL: [Level; 4] = [Level::Info, Level::Success, Level::Warning, Level::Error];

    pub const fn style(self) -> LevelStyle {
        match self {
            Level::Info => LevelStyle {
                tag: "[INFO]",
                color: Color::BrightBlue,
            },
            Level::Success => LevelStyle {
                tag: "[SUCCESS]",
                color: Color::BrightGreen,
            },
            Level::Warning => LevelStyle {
                tag: "[WARNING]",
                color: Color::BrightYellow,
            },
            Level::Error => LevelStyle {
                tag: "[ERROR]",
                color: Color::BrightRed,
            },
        }
    }
}

/// Sink for one message per notable event of a run.
pub trait Reporter {
    fn report(&mut self, level: Level, message: &str);

    fn info(&mut self, message: &str) {
        self.report(Level::Info, message);
    }
    fn success(&mut self, message: &str) {
        self.report(Level::Success, message);
    }
    fn warning(&mut self, message: &str) {
        self.report(Level::Warning, message);
    }
    fn error(&mut self, message: &str) {
        self.report(Level::Error, message);
    }
}

/// Prints `[TAG] message` lines to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn report(&mut self, level: Level, message: &str) {
        let style = level.style();
        println!("{} {}", style.tag.color(style.color), message);
    }
}

/// Keeps messages in memory instead of printing them.
#[derive(Debug, Default, Clone)]
pub struct MemoryReporter {
    pub messages: Vec<(Level, String)>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, level: Level) -> usize {
        self.messages.iter().filter(|(l, _)| *l == level).count()
    }
}

impl Reporter for MemoryReporter {
    fn report(&mut self, level: Level, message: &str) {
        self.messages.push((level, message.to_string()));
    }
}
