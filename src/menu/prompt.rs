//! Operator input
//!
//! Line-oriented prompts over any `BufRead` / `Write` pair. Parse failures
//! are reported and the question is asked again; end of input surfaces as an
//! `UnexpectedEof` I/O error.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};

use crate::error::{BookingError, Result};
use crate::model::{parse_date, parse_time};

use super::render::Painter;

/// Asks questions and reads answers
pub struct Prompter<R, W> {
    input: R,
    output: W,
    painter: Painter,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W, painter: Painter) -> Self {
        Self {
            input,
            output,
            painter,
        }
    }

    /// Write one line of output
    pub fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Raw answer with surrounding whitespace trimmed
    pub fn text(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{} ", label)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            return Err(BookingError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed",
            )));
        }
        Ok(line.trim().to_string())
    }

    /// Non-empty answer
    pub fn required(&mut self, label: &str) -> Result<String> {
        loop {
            let answer = self.text(label)?;
            if !answer.is_empty() {
                return Ok(answer);
            }
            self.reject("an answer is required")?;
        }
    }

    /// Answer or `None` when left blank
    pub fn optional(&mut self, label: &str) -> Result<Option<String>> {
        let answer = self.text(label)?;
        Ok(if answer.is_empty() { None } else { Some(answer) })
    }

    /// Integer answer
    pub fn number<T: FromStr>(&mut self, label: &str) -> Result<T> {
        loop {
            let answer = self.text(label)?;
            match answer.parse() {
                Ok(value) => return Ok(value),
                Err(_) => self.reject(&format!("'{}' is not a whole number", answer))?,
            }
        }
    }

    /// Integer answer, `None` when left blank
    pub fn optional_number<T: FromStr>(&mut self, label: &str) -> Result<Option<T>> {
        loop {
            let answer = self.text(label)?;
            if answer.is_empty() {
                return Ok(None);
            }
            match answer.parse() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => self.reject(&format!("'{}' is not a whole number", answer))?,
            }
        }
    }

    /// `dd/mm/yyyy` answer
    pub fn date(&mut self, label: &str) -> Result<NaiveDate> {
        self.parsed(label, parse_date)
    }

    /// `hh:mm` answer
    pub fn time(&mut self, label: &str) -> Result<NaiveTime> {
        self.parsed(label, parse_time)
    }

    /// Get the painter used for status lines
    pub fn painter(&self) -> Painter {
        self.painter
    }

    /// Get the output sink
    pub fn output(&self) -> &W {
        &self.output
    }

    fn parsed<T>(&mut self, label: &str, parse: fn(&str) -> Result<T>) -> Result<T> {
        loop {
            let answer = self.text(label)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(BookingError::Validation(reason)) => self.reject(&reason)?,
                Err(e) => return Err(e),
            }
        }
    }

    fn reject(&mut self, reason: &str) -> Result<()> {
        let line = self.painter.error(reason);
        self.say(&line)
    }
}

/// Whether `error` means the operator closed standard input
pub fn is_end_of_input(error: &BookingError) -> bool {
    matches!(error, BookingError::Io(e) if e.kind() == io::ErrorKind::UnexpectedEof)
}
