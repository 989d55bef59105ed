//! # Mock I/O Implementation for Testing
//!
//! Provides a [`LineSource`] that replays pre-programmed lines.

use super::LineSource;
use anyhow::Result;
use std::collections::VecDeque;

/// Mock line source for testing
///
/// Yields the given lines in order, then reports end of input.
#[derive(Debug, Clone, Default)]
pub struct MockLineSource {
    lines: VecDeque<String>,
    reads: usize,
}

impl MockLineSource {
    /// Create a new mock line source with pre-programmed lines
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            reads: 0,
        }
    }

    /// Add a line to the end of the script
    pub fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push_back(line.into());
    }

    /// Lines not consumed yet
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }

    /// Number of `read_line` calls so far, including the ones that hit end of input
    pub fn reads(&self) -> usize {
        self.reads
    }
}

impl LineSource for MockLineSource {
    fn read_line(&mut self) -> Result<Option<String>> {
        self.reads += 1;
        Ok(self.lines.pop_front())
    }
}
