//! Particulate matter grading
//!
//! Maps a raw concentration reading (as the API sends it, a numeric string)
//! to the Ministry of Environment's four-level grade.

use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

/// The API's marker for a reading that was not collected
pub const NO_DATA_SENTINEL: &str = "-";

/// Pollutants that have grading bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PollutantKind {
    Pm10,
    Pm25,
}

impl PollutantKind {
    /// Short code used for the pollutant ("pm10" / "pm25")
    pub fn code(&self) -> &'static str {
        match self {
            PollutantKind::Pm10 => "pm10",
            PollutantKind::Pm25 => "pm25",
        }
    }

    /// Human readable name for reports
    pub fn display_name(&self) -> &'static str {
        match self {
            PollutantKind::Pm10 => "Fine dust (PM10)",
            PollutantKind::Pm25 => "Ultrafine dust (PM2.5)",
        }
    }

    /// Upper bounds (inclusive) of the Good, Moderate and Unhealthy bands
    fn upper_bounds(&self) -> (i64, i64, i64) {
        match self {
            PollutantKind::Pm10 => (30, 80, 150),
            PollutantKind::Pm25 => (15, 35, 75),
        }
    }

    fn grade_for(&self, value: i64) -> Grade {
        let (good, moderate, unhealthy) = self.upper_bounds();
        match value {
            v if v < 0 => Grade::NoThreshold,
            v if v <= good => Grade::Good,
            v if v <= moderate => Grade::Moderate,
            v if v <= unhealthy => Grade::Unhealthy,
            _ => Grade::VeryUnhealthy,
        }
    }
}

impl FromStr for PollutantKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pm10" => Ok(PollutantKind::Pm10),
            "pm25" => Ok(PollutantKind::Pm25),
            other => Err(format!("unknown pollutant kind: {other}")),
        }
    }
}

/// Air quality grade of a single reading
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Grade {
    Good,
    Moderate,
    Unhealthy,
    VeryUnhealthy,
    /// Reading missing or reported as "-"
    Unknown,
    /// Reading present but not an integer; carries the raw text
    ValueError(String),
    /// Integer with no matching band (negative values, unknown pollutant)
    NoThreshold,
}

impl Grade {
    /// Plain label without decoration
    pub fn label(&self) -> &'static str {
        match self {
            Grade::Good => "Good",
            Grade::Moderate => "Moderate",
            Grade::Unhealthy => "Unhealthy",
            Grade::VeryUnhealthy => "Very Unhealthy",
            Grade::Unknown => "No data",
            Grade::ValueError(_) => "Invalid value",
            Grade::NoThreshold => "No threshold",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Grade::Good => write!(f, "① {} 😃", self.label()),
            Grade::Moderate => write!(f, "② {} 🙂", self.label()),
            Grade::Unhealthy => write!(f, "③ {} 😷", self.label()),
            Grade::VeryUnhealthy => write!(f, "④ {} 👿", self.label()),
            Grade::ValueError(raw) => write!(f, "({raw}) invalid value"),
            Grade::Unknown | Grade::NoThreshold => f.write_str(self.label()),
        }
    }
}

/// Grade a raw reading for the given pollutant.
///
/// `None` and `"-"` are [`Grade::Unknown`]; anything that does not parse as an
/// integer is [`Grade::ValueError`] with the original text.
pub fn classify(value: Option<&str>, kind: PollutantKind) -> Grade {
    match parse_reading(value) {
        Ok(v) => kind.grade_for(v),
        Err(grade) => grade,
    }
}

/// Like [`classify`], but with the pollutant given by its code.
/// Unknown codes grade every integer reading as [`Grade::NoThreshold`].
pub fn classify_code(value: Option<&str>, code: &str) -> Grade {
    match parse_reading(value) {
        Ok(v) => match code.parse::<PollutantKind>() {
            Ok(kind) => kind.grade_for(v),
            Err(_) => Grade::NoThreshold,
        },
        Err(grade) => grade,
    }
}

fn parse_reading(value: Option<&str>) -> Result<i64, Grade> {
    let raw = match value {
        None => return Err(Grade::Unknown),
        Some(raw) if raw.trim() == NO_DATA_SENTINEL => return Err(Grade::Unknown),
        Some(raw) => raw,
    };

    // Integers past i64 still have a band: above every threshold, or below zero
    match raw.trim().parse::<i64>() {
        Ok(v) => Ok(v),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(Grade::ValueError(raw.to_string())),
        },
    }
}
