//! # Console Prompting
//!
//! Line-oriented reads with re-prompting on invalid input.
//!
//! ## Re-prompt Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  read line ──► EOF? ──yes──► Err(InputClosed)                           │
//! │      ▲           │                                                      │
//! │      │           no                                                     │
//! │      │           ▼                                                      │
//! │      │      validation rule (emporium_core::validation)                 │
//! │      │           │                                                      │
//! │      │     ┌─────┴──────┐                                               │
//! │      │    Err          Ok(value) ──► return                             │
//! │      │     │                                                            │
//! │      └── print retry message                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt::Display;
use std::io::{BufRead, Write};

use emporium_core::validation::{parse_menu_choice, parse_positive_number, validate_commodity_name};
use tracing::{debug, warn};

use crate::error::{AppError, AppResult};

const RETRY_NUMBER: &str =
    "Please input again your input is NOT an integer or is lower than or equal to 0:";
const RETRY_CHOICE: &str = "your input is wrong, please input again:";
const RETRY_NAME: &str = "The name cannot be empty, please input again:";

/// Reads operator input from `R` and writes prompts to `W`.
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Writes `text` followed by a newline.
    pub fn say(&mut self, text: impl Display) -> AppResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Writes `text` as-is.
    pub fn write_raw(&mut self, text: &str) -> AppResult<()> {
        self.output.write_all(text.as_bytes())?;
        Ok(())
    }

    /// Reads one line without its line terminator.
    ///
    /// Bytes that are not UTF-8 become U+FFFD, so the validators reject the
    /// line and the caller re-prompts.
    pub fn read_line(&mut self) -> AppResult<String> {
        self.output.flush()?;

        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Err(AppError::InputClosed);
        }
        while raw.last().is_some_and(|&b| b == b'\n' || b == b'\r') {
            raw.pop();
        }

        let line = match String::from_utf8(raw) {
            Ok(line) => line,
            Err(err) => {
                warn!("Console input was not valid UTF-8");
                String::from_utf8_lossy(err.as_bytes()).into_owned()
            }
        };
        Ok(line)
    }

    /// Reads a free-text field, trimmed.
    pub fn text(&mut self) -> AppResult<String> {
        Ok(self.read_line()?.trim().to_string())
    }

    /// Reads until the operator types a non-empty name.
    pub fn name(&mut self) -> AppResult<String> {
        loop {
            let line = self.read_line()?;
            match validate_commodity_name(&line) {
                Ok(name) => return Ok(name),
                Err(err) => {
                    debug!(error = %err, "Rejected name input");
                    self.say(RETRY_NAME)?;
                }
            }
        }
    }

    /// Reads until the operator types a whole number greater than zero.
    pub fn positive_number(&mut self, field: &str) -> AppResult<u32> {
        loop {
            let line = self.read_line()?;
            match parse_positive_number(field, &line) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    debug!(error = %err, "Rejected numeric input");
                    self.say(RETRY_NUMBER)?;
                }
            }
        }
    }

    /// Reads until the operator picks a choice in `[0, max]`, or `[1, max]`
    /// when `allow_zero` is false.
    pub fn menu_choice(&mut self, max: usize, allow_zero: bool) -> AppResult<usize> {
        loop {
            let line = self.read_line()?;
            match parse_menu_choice(&line, max, allow_zero) {
                Ok(choice) => return Ok(choice),
                Err(err) => {
                    debug!(error = %err, "Rejected menu input");
                    self.say(RETRY_CHOICE)?;
                }
            }
        }
    }

    /// Gives the output sink back.
    pub fn into_output(self) -> W {
        self.output
    }
}
