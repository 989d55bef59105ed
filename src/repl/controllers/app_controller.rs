//! # REPL Application Controller
//!
//! Owns the prompt loop: reads a province name, validates it, runs the
//! lookup and prints the report or the failure diagnostic.
//!
//! ```text
//!            exit / q / EOF
//! Prompting ───────────────▶ Terminated
//!   │   ▲
//!   └───┘ empty, unknown name, lookup (success or failure)
//! ```

use crate::repl::io::LineSource;
use crate::repl::services::{AirQualityService, HttpTransport};
use crate::repl::views::render_report;
use anyhow::Result;
use std::io::Write;

/// Commands that end the session, compared case-insensitively
pub const EXIT_TOKENS: [&str; 2] = ["exit", "q"];

/// Loop state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplState {
    Prompting,
    Terminated,
}

/// What a line of user input asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputCommand {
    Exit,
    Empty,
    UnknownSido(String),
    Lookup(String),
}

impl InputCommand {
    /// Classify one input line against the recognized province names
    pub fn parse(line: &str, sido_names: &[String]) -> Self {
        let input = line.trim();
        if EXIT_TOKENS
            .iter()
            .any(|token| input.eq_ignore_ascii_case(token))
        {
            InputCommand::Exit
        } else if input.is_empty() {
            InputCommand::Empty
        } else if sido_names.iter().any(|name| name == input) {
            InputCommand::Lookup(input.to_string())
        } else {
            InputCommand::UnknownSido(input.to_string())
        }
    }
}

/// The interactive lookup loop
pub struct AppController<L: LineSource, W: Write, T: HttpTransport> {
    service: AirQualityService<T>,
    line_source: L,
    output: W,
    state: ReplState,
}

impl<L: LineSource, W: Write, T: HttpTransport> AppController<L, W, T> {
    /// Create a controller with injected input, output and service (dependency injection)
    pub fn new(service: AirQualityService<T>, line_source: L, output: W) -> Self {
        Self {
            service,
            line_source,
            output,
            state: ReplState::Prompting,
        }
    }

    pub fn state(&self) -> ReplState {
        self.state
    }

    pub fn line_source(&self) -> &L {
        &self.line_source
    }

    /// Give back the output sink, e.g. to inspect what a test session printed
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print the banner and prompt until the user quits or input ends
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "--- 🌫️  Real-time fine dust monitor (AirKorea) ---")?;

        while self.state == ReplState::Prompting {
            self.step()?;
        }

        Ok(())
    }

    /// Prompt once and handle the answer
    pub fn step(&mut self) -> Result<ReplState> {
        if self.state == ReplState::Terminated {
            return Ok(self.state);
        }

        self.print_prompt()?;

        let command = match self.line_source.read_line()? {
            Some(line) => InputCommand::parse(&line, &self.service.config().sido_names),
            None => {
                tracing::debug!("Input closed, leaving the prompt loop");
                writeln!(self.output)?;
                InputCommand::Exit
            }
        };
        tracing::debug!("Input command: {:?}", command);

        match command {
            InputCommand::Exit => {
                writeln!(self.output, "👋 Exiting the program.")?;
                self.state = ReplState::Terminated;
            }
            InputCommand::Empty => {
                writeln!(self.output, "Please enter a province/city name.")?;
            }
            InputCommand::UnknownSido(name) => {
                tracing::debug!("Rejected unknown province name '{}'", name);
                writeln!(
                    self.output,
                    "❌ Invalid province/city name. Enter one of the names in the list exactly."
                )?;
            }
            InputCommand::Lookup(sido_name) => self.lookup(&sido_name)?,
        }

        self.output.flush()?;
        Ok(self.state)
    }

    fn print_prompt(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Available provinces/cities:")?;
        writeln!(self.output, "{}", self.service.config().sido_names.join(", "))?;
        write!(
            self.output,
            "Enter a province/city name (quit: 'exit' or 'q'): "
        )?;
        self.output.flush()?;
        Ok(())
    }

    fn lookup(&mut self, sido_name: &str) -> Result<()> {
        writeln!(self.output)?;
        writeln!(
            self.output,
            "Looking up air quality for '{sido_name}'..."
        )?;
        self.output.flush()?;

        let lines = match self.service.fetch(sido_name) {
            Ok(response) => match render_report(&response) {
                Ok(report) => vec![report],
                Err(e) => {
                    tracing::warn!("Could not render report for '{}': {}", sido_name, e);
                    e.diagnostic()
                }
            },
            Err(e) => e.diagnostic(),
        };

        for line in lines {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }
}
