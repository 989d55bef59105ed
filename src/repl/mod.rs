//! # REPL Module
//!
//! The interactive lookup loop and the pieces it drives:
//!
//! - **Models**: the AirKorea response and the PM10/PM2.5 grades
//! - **Services**: the HTTP lookup and its transport
//! - **Views**: the text report
//! - **Controllers**: the prompt loop
//! - **IO**: line input abstraction
//!
//! ```text
//! ┌─────────────┐  line   ┌───────────────┐  fetch  ┌────────────────────┐
//! │ LineSource  │────────▶│ AppController │────────▶│ AirQualityService  │
//! └─────────────┘         │               │◀────────│  └─ HttpTransport  │
//!                         │               │ response└────────────────────┘
//!                         │               │ render  ┌────────────────────┐
//!                         │               │────────▶│ render_report      │
//!                         └───────────────┘         │  └─ classify       │
//!                                                   └────────────────────┘
//! ```

pub mod controllers;
pub mod io;
pub mod models;
pub mod services;
pub mod views;

// Re-export main types for convenience
pub use controllers::{AppController, InputCommand, ReplState};
pub use io::{LineSource, MockLineSource, StdinLineSource};
pub use models::{classify, AirQualityResponse, Grade, PollutantKind, StationReading};
pub use services::{AirQualityService, FetchError, HttpTransport, ReqwestTransport};
pub use views::{render_report, ReportError};
