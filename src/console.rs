//! Interactive console for workflow tasks.
//!
//! Each task owns a named [`Console`] that prints severity-gated messages
//! and collects operator input. Input goes through the [`Input`] trait so
//! tests can drive a task with a scripted sequence of canned responses
//! instead of a real terminal.
//!
//! # Log levels
//!
//! The `--log-level` flag (0-5, default 3) gates which channels print:
//! error/warn/done at 1+, log at 2+, info at 3+, debug at 4+, trace at 5.
//! `describe` and prompts always print; they are part of the interaction,
//! not diagnostics.

use crate::error::{RepokitError, Result};
use regex::Regex;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Synchronous input provider for interactive prompts.
pub trait Input {
    /// Read one line, without the trailing newline.
    ///
    /// Returns `Ok(None)` when the input source is exhausted.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// Reads responses from standard input.
pub struct StdinInput;

impl Input for StdinInput {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// Replays a fixed sequence of canned responses. Used by tests.
pub struct ScriptedInput {
    responses: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            responses: responses.into_iter().map(Into::into).collect(),
        }
    }
}

impl Input for ScriptedInput {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.responses.pop_front())
    }
}

/// Named, severity-gated console bound to an input provider.
pub struct Console<I: Input> {
    name: String,
    log_level: u8,
    input: I,
}

impl<I: Input> Console<I> {
    pub fn new(name: &str, log_level: u8, input: I) -> Self {
        Self {
            name: name.to_string(),
            log_level,
            input,
        }
    }

    fn tag(&self) -> String {
        format!("[{}]", self.name)
    }

    /// Print an instruction or banner line. Not gated by log level.
    pub fn describe(&self, message: &str) {
        println!("{} {}", self.tag(), message);
    }

    /// Print a success/completion message.
    pub fn done(&self, message: &str) {
        if self.log_level >= 1 {
            println!("{} {}", self.tag(), message);
        }
    }

    pub fn error(&self, message: &str) {
        if self.log_level >= 1 {
            eprintln!("{} {}", self.tag(), message);
        }
    }

    pub fn warn(&self, message: &str) {
        if self.log_level >= 1 {
            eprintln!("{} {}", self.tag(), message);
        }
    }

    pub fn log(&self, message: &str) {
        if self.log_level >= 2 {
            println!("{} {}", self.tag(), message);
        }
    }

    pub fn info(&self, message: &str) {
        if self.log_level >= 3 {
            println!("{} {}", self.tag(), message);
        }
    }

    pub fn debug(&self, message: &str) {
        if self.log_level >= 4 {
            println!("{} {}", self.tag(), message);
        }
    }

    pub fn trace(&self, message: &str) {
        if self.log_level >= 5 {
            println!("{} {}", self.tag(), message);
        }
    }

    /// Prompt for one line of input.
    ///
    /// Returns `Ok(None)` when the input source is exhausted.
    pub fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        print!("{} {}: ", self.tag(), message);
        let _ = io::stdout().flush();

        self.input
            .read_line()
            .map_err(|e| RepokitError::UserError(format!("failed to read input: {}", e)))
    }

    /// Prompt with a default; a blank response selects the default.
    pub fn prompt_default(&mut self, message: &str, default: &str) -> Result<String> {
        let response = self.prompt(&format!("{} ({})", message, default))?;
        match response {
            Some(line) if !line.is_empty() => Ok(line),
            _ => Ok(default.to_string()),
        }
    }

    /// Prompt for a yes/no answer. Only `y`/`yes` count as yes; a blank
    /// line, anything else, or an exhausted input source count as no.
    pub fn prompt_yes_no(&mut self, message: &str) -> Result<bool> {
        let response = self.prompt(message)?;
        Ok(matches!(response.as_deref(), Some("y") | Some("yes")))
    }

    /// Prompt until the response matches `pattern`.
    ///
    /// The retry loop is deliberately unbounded: it ends only when a valid
    /// response arrives or the input source is exhausted, in which case the
    /// field named by `field` is reported as invalid input (exit code 11).
    pub fn prompt_matching(
        &mut self,
        message: &str,
        pattern: &Regex,
        field: &str,
    ) -> Result<String> {
        loop {
            match self.prompt(message)? {
                Some(line) if pattern.is_match(&line) => return Ok(line),
                Some(_) => self.error(&format!("Invalid {}.", field)),
                None => return Err(RepokitError::InvalidInput(field.to_string())),
            }
        }
    }

    /// Prompt until a non-empty response arrives.
    pub fn prompt_non_empty(&mut self, message: &str, field: &str) -> Result<String> {
        loop {
            match self.prompt(message)? {
                Some(line) if !line.is_empty() => return Ok(line),
                Some(_) => self.error(&format!("Invalid {}.", field)),
                None => return Err(RepokitError::InvalidInput(field.to_string())),
            }
        }
    }

    /// Collect lines until a blank line or input exhaustion.
    pub fn prompt_lines(&mut self, message: &str) -> Result<Vec<String>> {
        let mut lines = Vec::new();
        loop {
            match self.prompt(message)? {
                Some(line) if !line.is_empty() => lines.push(line),
                _ => return Ok(lines),
            }
        }
    }
}
