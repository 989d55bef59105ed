//! Shared fixtures for the integration tests: a wiremock server standing in
//! for the AirKorea endpoint.

use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use finedust::config::AppConfig;

/// Path the mock endpoint is mounted on
pub const API_PATH: &str = "/B552584/ArpltnInforInqireSvc/getCtprvnRltmMesureDnsty";

pub const TEST_SERVICE_KEY: &str = "integration-test-key";

/// Configuration pointing at `server`
pub fn config_for(server: &MockServer) -> AppConfig {
    AppConfig::with_base_url(format!("{}{}", server.uri(), API_PATH)).service_key(TEST_SERVICE_KEY)
}

/// A successful response listing the given (station, pm10, pm25) readings
pub fn stations_body(stations: &[(&str, &str, &str)]) -> Value {
    let items: Vec<Value> = stations
        .iter()
        .map(|(name, pm10, pm25)| {
            json!({
                "stationName": name,
                "dataTime": "2025-11-16 19:00",
                "pm10Value": pm10,
                "pm25Value": pm25,
                "sidoName": "서울"
            })
        })
        .collect();
    let total_count = items.len();

    json!({
        "response": {
            "header": {"resultCode": "00", "resultMsg": "NORMAL_CODE"},
            "body": {"items": items, "totalCount": total_count, "pageNo": 1, "numOfRows": 100}
        }
    })
}

/// Mount a GET handler answering requests for `sido_name` with `template`
pub async fn mount_for_sido(server: &MockServer, sido_name: &str, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(API_PATH))
        .and(query_param("sidoName", sido_name))
        .and(query_param("serviceKey", TEST_SERVICE_KEY))
        .and(query_param("returnType", "json"))
        .and(query_param("ver", "1.0"))
        .and(query_param("numOfRows", "100"))
        .and(query_param("pageNo", "1"))
        .respond_with(template)
        .expect(1)
        .mount(server)
        .await;
}
