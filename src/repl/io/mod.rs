//! # I/O Abstraction Layer
//!
//! Input for the REPL comes through the [`LineSource`] trait so the loop can
//! be driven by a real terminal in production and by scripted lines in tests.
//!
//! ```text
//! Production:  AppController ──▶ StdinLineSource ──▶ std::io::stdin().read_line()
//!                            ──▶ io::Stdout
//!
//! Testing:     AppController ──▶ MockLineSource  ──▶ VecDeque<String>
//!                            ──▶ Vec<u8>
//! ```
//!
//! Output needs no trait of its own: the controller writes to any
//! [`std::io::Write`].

use anyhow::Result;

pub mod mock;
pub mod terminal;

pub use mock::MockLineSource;
pub use terminal::StdinLineSource;

/// Line-oriented input source
pub trait LineSource {
    /// Read the next line without its line terminator.
    ///
    /// Returns `Ok(None)` once the input is exhausted.
    fn read_line(&mut self) -> Result<Option<String>>;
}
