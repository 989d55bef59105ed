//! # Controllers Module
//!
//! Contains the controller that drives the prompt loop.

pub mod app_controller;

// Re-export main types for convenience
pub use app_controller::{AppController, InputCommand, ReplState, EXIT_TOKENS};
