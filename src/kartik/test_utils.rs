//! Scripted stand-ins for the prompt, link opener and terminal.

use crate::error::{CardError, Result};
use crate::opener::LinkOpener;
use crate::prompt::Prompter;
use crate::terminal::Terminal;
use std::collections::VecDeque;
use std::io;
use std::time::Duration;

/// Answers prompts from a fixed list of positions, in order.
///
/// Running out of answers is an IO error, so a loop that prompts more often than
/// expected fails the test instead of spinning.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<usize>,
    pub prompts: Vec<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = usize>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            prompts: Vec::new(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&mut self, _message: &str, labels: &[String]) -> Result<usize> {
        self.prompts.push(labels.to_vec());
        self.answers.pop_front().ok_or_else(|| {
            CardError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "prompt script exhausted",
            ))
        })
    }
}

/// Records every URL it is asked to open; optionally fails each time.
#[derive(Debug, Default)]
pub struct RecordingOpener {
    pub opened: Vec<String>,
    fail: bool,
}

impl RecordingOpener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            opened: Vec::new(),
            fail: true,
        }
    }
}

impl LinkOpener for RecordingOpener {
    fn open(&mut self, url: &str) -> Result<()> {
        self.opened.push(url.to_string());
        if self.fail {
            Err(CardError::link_open(url, "no handler registered"))
        } else {
            Ok(())
        }
    }
}

/// Captures output in memory; pauses are recorded, not slept.
#[derive(Debug, Default)]
pub struct MemoryTerminal {
    pub lines: Vec<String>,
    pub error_lines: Vec<String>,
    pub clears: usize,
    pub pauses: Vec<Duration>,
}

impl MemoryTerminal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output(&self) -> String {
        self.lines.join("\n")
    }

    pub fn errors(&self) -> String {
        self.error_lines.join("\n")
    }
}

impl Terminal for MemoryTerminal {
    fn clear_screen(&mut self) -> Result<()> {
        self.clears += 1;
        Ok(())
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        self.lines.push(line.to_string());
        Ok(())
    }

    fn write_error(&mut self, line: &str) -> Result<()> {
        self.error_lines.push(line.to_string());
        Ok(())
    }

    fn pause(&mut self, duration: Duration) {
        self.pauses.push(duration);
    }
}
