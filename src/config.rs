//! Configuration constants and utilities for finedust
//!
//! The AirKorea service key is compiled in and has to be filled in by the
//! operator before the tool is usable. Everything the components need is
//! bundled into [`AppConfig`] and handed to them at construction time.

/// AirKorea service key (the *decoded* key from data.go.kr)
pub const SERVICE_KEY: &str = "YOUR_SERVICE_KEY_HERE";

/// Value of [`SERVICE_KEY`] as shipped; the program refuses to run with it
pub const SERVICE_KEY_PLACEHOLDER: &str = "YOUR_SERVICE_KEY_HERE";

/// Real-time measurements by province endpoint
pub const BASE_URL: &str =
    "https://apis.data.go.kr/B552584/ArpltnInforInqireSvc/getCtprvnRltmMesureDnsty";

/// API data version sent as `ver`
pub const API_VERSION: &str = "1.0";

/// Stations requested per page, large enough to cover any province in one page
pub const NUM_OF_ROWS: u32 = 100;

pub const PAGE_NO: u32 = 1;

/// Province/city names accepted by the API's `sidoName` parameter
pub const VALID_SIDO_NAMES: [&str; 17] = [
    "서울", "부산", "대구", "인천", "광주", "대전", "울산", "경기", "강원", "충북", "충남", "전북",
    "전남", "경북", "경남", "제주", "세종",
];

/// Environment variable name for the log filter
pub const LOG_LEVEL_ENV_VAR: &str = "FINEDUST_LOG_LEVEL";

/// Everything the client and the REPL need to know about the outside world
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub base_url: String,
    pub service_key: String,
    pub api_version: String,
    pub num_of_rows: u32,
    pub page_no: u32,
    pub sido_names: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            service_key: SERVICE_KEY.to_string(),
            api_version: API_VERSION.to_string(),
            num_of_rows: NUM_OF_ROWS,
            page_no: PAGE_NO,
            sido_names: VALID_SIDO_NAMES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl AppConfig {
    /// Same as the default configuration but pointed at another endpoint
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Replace the service key
    pub fn service_key(mut self, service_key: impl Into<String>) -> Self {
        self.service_key = service_key.into();
        self
    }

    /// False while the service key is still the shipped placeholder (or blank)
    pub fn has_service_key(&self) -> bool {
        let key = self.service_key.trim();
        !key.is_empty() && key != SERVICE_KEY_PLACEHOLDER
    }

    /// Check whether `name` is one of the recognized province/city names
    pub fn is_valid_sido(&self, name: &str) -> bool {
        self.sido_names.iter().any(|s| s == name)
    }
}
