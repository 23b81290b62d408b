//! The interactive session: owns the input stream and prompt output.
//!
//! One `Session` is constructed at startup and passed to the menu loop.
//! It holds no inventory data, only the streams, and provides the
//! prompt-until-it-parses loops for each primitive the store needs.
//! Syntax errors re-prompt here; semantic validation (positive price,
//! sufficient stock) is the store's job alone.

use std::io::{BufRead, Write};

use chrono::NaiveDate;

pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prompt once and return the trimmed line. May be empty.
    ///
    /// # Errors
    ///
    /// Fails when the input stream is closed or unreadable.
    pub fn prompt_line(&mut self, prompt: &str) -> anyhow::Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut buf = String::new();
        let read = self.input.read_line(&mut buf)?;
        if read == 0 {
            anyhow::bail!("Input stream closed");
        }
        Ok(buf.trim().to_string())
    }

    /// Prompt until the input parses as a whole number.
    pub fn prompt_i64(&mut self, prompt: &str) -> anyhow::Result<i64> {
        loop {
            let line = self.prompt_line(prompt)?;
            match line.parse::<i64>() {
                Ok(value) => return Ok(value),
                Err(_) => writeln!(self.output, "Invalid input. Please enter a whole number.")?,
            }
        }
    }

    /// Prompt until the input parses as a number.
    pub fn prompt_f64(&mut self, prompt: &str) -> anyhow::Result<f64> {
        loop {
            let line = self.prompt_line(prompt)?;
            match line.parse::<f64>() {
                Ok(value) => return Ok(value),
                Err(_) => writeln!(self.output, "Invalid input. Please enter a number.")?,
            }
        }
    }

    /// Prompt until the input parses as a `YYYY-MM-DD` calendar date.
    pub fn prompt_date(&mut self, prompt: &str) -> anyhow::Result<NaiveDate> {
        loop {
            let line = self.prompt_line(prompt)?;
            match NaiveDate::parse_from_str(&line, "%Y-%m-%d") {
                Ok(date) => return Ok(date),
                Err(_) => writeln!(self.output, "Invalid date format. Please use YYYY-MM-DD.")?,
            }
        }
    }

    /// Ask a yes/no question; anything other than `y`/`Y` is a no.
    pub fn confirm(&mut self, prompt: &str) -> anyhow::Result<bool> {
        let line = self.prompt_line(prompt)?;
        Ok(line.eq_ignore_ascii_case("y"))
    }
}
