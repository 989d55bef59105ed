//! # finedust - Real-time Fine Dust Lookup
//!
//! Interactive terminal tool that asks AirKorea for the latest PM10/PM2.5
//! readings of a Korean province or metropolitan city and prints them with
//! their air quality grades.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────┐  province  ┌───────────────┐  GET   ┌──────────────┐
//! │  stdin   │───────────▶│ AppController │───────▶│   AirKorea   │
//! └──────────┘            │               │◀───────│   (JSON)     │
//!                         │               │        └──────────────┘
//! ┌──────────┐  report    │               │
//! │  stdout  │◀───────────│               │
//! └──────────┘            └───────────────┘
//! ```
//!
//! Configuration ([`config::AppConfig`]) is built once in `main` and passed
//! down; nothing reads global state after startup.

pub mod cmd_args;
pub mod config;
pub mod repl;

// Re-export main types for easy access
pub use repl::*;
