//! # Air Quality Report
//!
//! Renders the first station of a response as a fixed text block. Rendering
//! is pure; the REPL decides where the text goes.

use crate::repl::models::{classify, AirQualityResponse, PollutantKind, StationReading};
use thiserror::Error;

const RULE_WIDTH: usize = 35;
const UNIT: &str = "㎍/m³";
const UNKNOWN_FIELD: &str = "unknown";
const MISSING_VALUE: &str = "-";

/// Why a successful response could not be rendered
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReportError {
    /// The response has no stations
    #[error("No data available. (no stations in this province, or an API problem)")]
    NoData,

    /// A structural key the report needs is missing
    #[error("failed to parse response data (missing key: {0})")]
    MissingKey(&'static str),
}

impl ReportError {
    /// Lines to show the user
    pub fn diagnostic(&self) -> Vec<String> {
        match self {
            ReportError::NoData => vec![self.to_string()],
            ReportError::MissingKey(key) => vec![
                format!("❌ Error: failed to parse response data. (key: {key})"),
                "The API response format may have changed.".to_string(),
            ],
        }
    }
}

/// Render the first station of `response`, in API order
pub fn render_report(response: &AirQualityResponse) -> Result<String, ReportError> {
    let body = response
        .response
        .body
        .as_ref()
        .ok_or(ReportError::MissingKey("body"))?;
    let items = body.items.as_ref().ok_or(ReportError::MissingKey("items"))?;
    let first = items.first().ok_or(ReportError::NoData)?;

    Ok(render_station(first, items.len()))
}

fn render_station(station: &StationReading, station_count: usize) -> String {
    let name = station.station_name.as_deref().unwrap_or(UNKNOWN_FIELD);
    let time = station.data_time.as_deref().unwrap_or(UNKNOWN_FIELD);
    let double_rule = "=".repeat(RULE_WIDTH);
    let single_rule = "-".repeat(RULE_WIDTH);

    let mut out = String::new();
    out.push('\n');
    out.push_str(&format!("{double_rule}\n"));
    out.push_str(&format!(" 📍  Station: {name} (measured at: {time})\n"));
    out.push_str(&format!("{double_rule}\n"));
    out.push_str(&format!(
        " 💨  {}\n",
        pollutant_line(PollutantKind::Pm10, station.pm10_value.as_deref())
    ));
    out.push_str(&format!(
        " 🌪️  {}\n",
        pollutant_line(PollutantKind::Pm25, station.pm25_value.as_deref())
    ));
    out.push('\n');
    out.push_str(&format!("{single_rule}\n"));
    out.push_str(&format!(
        "* Showing the first of {station_count} stations.\n"
    ));
    out.push_str(&format!("{double_rule}\n"));
    out
}

fn pollutant_line(kind: PollutantKind, value: Option<&str>) -> String {
    let grade = classify(value, kind);
    format!(
        "{:<24} {} {}  ({})",
        format!("{}:", kind.display_name()),
        value.unwrap_or(MISSING_VALUE),
        UNIT,
        grade
    )
}
