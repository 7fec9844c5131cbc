//! Terminal output seam.
//!
//! The menu never touches stdout directly: it writes through [`Terminal`], which
//! lets tests capture output and skip the pauses.

use crate::error::Result;
use colored::Colorize;
use console::Term;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Error,
}

/// A one-line status report shown between screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub level: MessageLevel,
    pub content: String,
}

impl Message {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }

    /// The message surrounded by blank lines and coloured by level.
    pub fn render(&self) -> String {
        let styled = match self.level {
            MessageLevel::Info => self.content.blue(),
            MessageLevel::Success => self.content.green(),
            MessageLevel::Error => self.content.red(),
        };
        format!("\n{}\n", styled)
    }
}

pub trait Terminal {
    fn clear_screen(&mut self) -> Result<()>;

    fn write_line(&mut self, line: &str) -> Result<()>;

    fn write_error(&mut self, line: &str) -> Result<()>;

    /// Blocks for `duration`. Test terminals record the call instead.
    fn pause(&mut self, duration: Duration);

    fn print_message(&mut self, message: &Message) -> Result<()> {
        match message.level {
            MessageLevel::Error => self.write_error(&message.render()),
            _ => self.write_line(&message.render()),
        }
    }
}

/// The real terminal: stdout for the screen, stderr for errors.
pub struct ConsoleTerminal {
    out: Term,
    err: Term,
}

impl ConsoleTerminal {
    pub fn new() -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
        }
    }
}

impl Default for ConsoleTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Terminal for ConsoleTerminal {
    fn clear_screen(&mut self) -> Result<()> {
        Ok(self.out.clear_screen()?)
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        Ok(self.out.write_line(line)?)
    }

    fn write_error(&mut self, line: &str) -> Result<()> {
        Ok(self.err.write_line(line)?)
    }

    fn pause(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
