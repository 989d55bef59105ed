//! # Models Module
//!
//! Data that flows through a lookup: the decoded API response and the
//! grades derived from its readings.

pub mod grade;
pub mod response_model;

// Re-export all models for easy access
pub use grade::{classify, classify_code, Grade, PollutantKind, NO_DATA_SENTINEL};
pub use response_model::{
    AirQualityResponse, ResponseBody, ResponseEnvelope, ResponseHeader, StationReading,
    RESULT_CODE_OK,
};
