//! # Air Quality Service
//!
//! Builds the AirKorea query for a province, performs the single GET and
//! turns every way that can go wrong into a [`FetchError`].

use crate::config::AppConfig;
use crate::repl::models::AirQualityResponse;
use crate::repl::services::transport::{HttpTransport, QueryParams};
use thiserror::Error;

/// Marker the API puts in `resultMsg` when the service key is unknown
pub const UNREGISTERED_KEY_MARKER: &str = "SERVICE_KEY_IS_NOT_REGISTERED_ERROR";

/// How much of an undecodable body is echoed back to the user
const BODY_SNIPPET_CHARS: usize = 200;

/// Failure of a single air quality lookup
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FetchError {
    /// The request never completed
    #[error("network connection failed: {0}")]
    Network(String),

    /// The server answered with something other than 200
    #[error("API request failed with status {status}")]
    HttpStatus { status: u16, body: String },

    /// The API answered but reported an error in its header
    #[error("API error {code}: {message}")]
    ApiLogic { code: String, message: String },

    /// The body was not the JSON document we expect
    #[error("could not parse API response as JSON: {reason}")]
    JsonDecode { reason: String, body: String },
}

impl FetchError {
    /// True for the API's "unregistered service key" error
    pub fn is_unregistered_service_key(&self) -> bool {
        matches!(self, FetchError::ApiLogic { message, .. } if message.contains(UNREGISTERED_KEY_MARKER))
    }

    /// Lines to show the user for this failure
    pub fn diagnostic(&self) -> Vec<String> {
        match self {
            FetchError::Network(cause) => {
                vec![format!("❌ Error: network connection failed. {cause}")]
            }
            FetchError::HttpStatus { status, body } => vec![
                format!("❌ Error: API request failed (status code: {status})"),
                body.clone(),
            ],
            FetchError::ApiLogic { message, .. } => {
                let mut lines = vec![format!("❌ API error: {message}")];
                if self.is_unregistered_service_key() {
                    lines.push(
                        "🚨 The service key is not valid. Make sure you copied the decoded \
                         (Decoding) key from data.go.kr."
                            .to_string(),
                    );
                }
                lines
            }
            FetchError::JsonDecode { body, .. } => vec![
                "❌ Error: could not parse the API response as JSON.".to_string(),
                format!("Received: {}...", snippet(body)),
            ],
        }
    }
}

fn snippet(body: &str) -> String {
    body.chars().take(BODY_SNIPPET_CHARS).collect()
}

/// Client for the real-time measurements by province endpoint
pub struct AirQualityService<T: HttpTransport> {
    transport: T,
    config: AppConfig,
}

impl<T: HttpTransport> AirQualityService<T> {
    pub fn new(transport: T, config: AppConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Query parameters for `sido_name`; everything else is fixed
    pub fn build_query(&self, sido_name: &str) -> QueryParams {
        vec![
            ("serviceKey".to_string(), self.config.service_key.clone()),
            ("returnType".to_string(), "json".to_string()),
            ("sidoName".to_string(), sido_name.to_string()),
            ("ver".to_string(), self.config.api_version.clone()),
            ("numOfRows".to_string(), self.config.num_of_rows.to_string()),
            ("pageNo".to_string(), self.config.page_no.to_string()),
        ]
    }

    /// Fetch the latest readings for every station in `sido_name`.
    ///
    /// Exactly one request is made; there are no retries.
    pub fn fetch(&self, sido_name: &str) -> Result<AirQualityResponse, FetchError> {
        let query = self.build_query(sido_name);
        tracing::debug!("Requesting air quality for '{}'", sido_name);

        let response = self
            .transport
            .get(&self.config.base_url, &query)
            .map_err(|e| {
                // Flatten the cause chain into one line
                let mut message = format!("{e}");
                for cause in e.chain().skip(1) {
                    message.push_str(&format!(" (caused by: {cause})"));
                }
                tracing::error!("Air quality request failed: {message}");
                FetchError::Network(message)
            })?;

        if response.status != 200 {
            tracing::warn!("Air quality API returned status {}", response.status);
            return Err(FetchError::HttpStatus {
                status: response.status,
                body: response.body,
            });
        }

        let parsed: AirQualityResponse = serde_json::from_str(&response.body).map_err(|e| {
            tracing::warn!("Air quality API returned undecodable body: {e}");
            FetchError::JsonDecode {
                reason: e.to_string(),
                body: response.body.clone(),
            }
        })?;

        let header = parsed.header();
        if !header.is_success() {
            tracing::warn!(
                "Air quality API reported {}: {}",
                header.result_code,
                header.result_msg
            );
            return Err(FetchError::ApiLogic {
                code: header.result_code.clone(),
                message: header.result_msg.clone(),
            });
        }

        tracing::info!(
            "Received {} station readings for '{}'",
            parsed.items().map_or(0, |items| items.len()),
            sido_name
        );
        Ok(parsed)
    }
}
