//! # Terminal I/O Implementation
//!
//! Production [`LineSource`] reading from standard input.

use super::LineSource;
use anyhow::Result;
use std::io::{self, BufRead};

/// Reads lines from any buffered reader, stdin by default
pub struct StdinLineSource<R: BufRead> {
    reader: R,
}

impl StdinLineSource<io::StdinLock<'static>> {
    /// Create a line source over the process's standard input
    pub fn new() -> Self {
        Self {
            reader: io::stdin().lock(),
        }
    }
}

impl Default for StdinLineSource<io::StdinLock<'static>> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead> StdinLineSource<R> {
    /// Create a line source with a custom reader
    pub fn with_reader(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for StdinLineSource<R> {
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}
