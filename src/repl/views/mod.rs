//! # Views Module
//!
//! Text rendering for the terminal.

pub mod report;

// Re-export main types for convenience
pub use report::{render_report, ReportError};
