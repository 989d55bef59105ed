//! AirKorea response model
//!
//! Mirrors the JSON document returned by the real-time measurement endpoint:
//!
//! ```text
//! { "response": { "header": { "resultCode", "resultMsg" },
//!                 "body":   { "items": [ { "stationName", "dataTime",
//!                                          "pm10Value", "pm25Value", ... } ],
//!                             "totalCount", "numOfRows", "pageNo" } } }
//! ```
//!
//! Only the header is decoded strictly. Past it the document is taken as it
//! comes: a missing or oddly shaped `body`/`items` is reported when the
//! response is rendered, not when it is decoded.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// `resultCode` value for a successful call
pub const RESULT_CODE_OK: &str = "00";

/// Top-level document
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AirQualityResponse {
    pub response: ResponseEnvelope,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResponseEnvelope {
    pub header: ResponseHeader,
    #[serde(default, deserialize_with = "deserialize_body")]
    pub body: Option<ResponseBody>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseHeader {
    pub result_code: String,
    #[serde(default)]
    pub result_msg: String,
}

impl ResponseHeader {
    pub fn is_success(&self) -> bool {
        self.result_code == RESULT_CODE_OK
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    #[serde(default, deserialize_with = "deserialize_items")]
    pub items: Option<Vec<StationReading>>,
}

/// One measurement station's latest readings
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationReading {
    #[serde(default, deserialize_with = "deserialize_text")]
    pub station_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub data_time: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub pm10_value: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub pm25_value: Option<String>,
}

impl AirQualityResponse {
    pub fn header(&self) -> &ResponseHeader {
        &self.response.header
    }

    /// Station readings in the order the API returned them, if the body has any
    pub fn items(&self) -> Option<&[StationReading]> {
        self.response
            .body
            .as_ref()
            .and_then(|body| body.items.as_deref())
    }
}

/// Station fields are normally strings ("42", "-"), but the API is known to
/// send bare numbers and nulls as well.
fn deserialize_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

/// A body that is not an object counts as no body at all
fn deserialize_body<'de, D>(deserializer: D) -> Result<Option<ResponseBody>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(value @ Value::Object(_)) => serde_json::from_value(value)
            .map(Some)
            .map_err(serde::de::Error::custom),
        Some(other) => {
            tracing::debug!("Ignoring non-object response body: {}", other);
            Ok(None)
        }
        None => Ok(None),
    }
}

/// `null` means no list; any other non-array value (the API sends `""` when
/// a province has no stations) is an empty list. Entries that are not objects
/// become blank readings.
fn deserialize_items<'de, D>(deserializer: D) -> Result<Option<Vec<StationReading>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::Array(entries)) => Some(
            entries
                .into_iter()
                .map(|entry| serde_json::from_value(entry).unwrap_or_default())
                .collect(),
        ),
        Some(other) => {
            tracing::debug!("Treating non-array items as empty: {}", other);
            Some(Vec::new())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn response_should_deserialize_full_document() {
        let doc = json!({
            "response": {
                "header": {"resultCode": "00", "resultMsg": "NORMAL_CODE"},
                "body": {
                    "totalCount": 2,
                    "items": [
                        {"stationName": "중구", "dataTime": "2025-11-16 19:00",
                         "pm10Value": "41", "pm25Value": "22", "so2Value": "0.003"},
                        {"stationName": "종로구", "dataTime": "2025-11-16 19:00",
                         "pm10Value": "-", "pm25Value": null}
                    ],
                    "pageNo": 1,
                    "numOfRows": 100
                }
            }
        });

        let response: AirQualityResponse = serde_json::from_value(doc).unwrap();
        assert!(response.header().is_success());
        assert_eq!(response.header().result_msg, "NORMAL_CODE");

        let items = response.items().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].station_name.as_deref(), Some("중구"));
        assert_eq!(items[0].pm10_value.as_deref(), Some("41"));
        assert_eq!(items[1].pm10_value.as_deref(), Some("-"));
        assert_eq!(items[1].pm25_value, None);
    }

    #[test]
    fn numeric_readings_should_be_kept_as_text() {
        let doc = json!({"stationName": "A", "pm10Value": 37, "pm25Value": 12.5});
        let reading: StationReading = serde_json::from_value(doc).unwrap();
        assert_eq!(reading.pm10_value.as_deref(), Some("37"));
        assert_eq!(reading.pm25_value.as_deref(), Some("12.5"));
        assert_eq!(reading.data_time, None);
    }

    #[test]
    fn missing_body_or_items_should_still_deserialize() {
        let no_body: AirQualityResponse = serde_json::from_value(json!({
            "response": {"header": {"resultCode": "00", "resultMsg": "OK"}}
        }))
        .unwrap();
        assert!(no_body.items().is_none());

        let no_items: AirQualityResponse = serde_json::from_value(json!({
            "response": {"header": {"resultCode": "00", "resultMsg": "OK"}, "body": {}}
        }))
        .unwrap();
        assert!(no_items.items().is_none());
    }

    #[test]
    fn missing_header_should_fail_to_deserialize() {
        let result = serde_json::from_value::<AirQualityResponse>(json!({"response": {}}));
        assert!(result.is_err());
    }

    #[test]
    fn non_array_items_should_decode_as_empty_list() {
        for items in [json!(""), json!("none"), json!(0), json!({})] {
            let response: AirQualityResponse = serde_json::from_value(json!({
                "response": {
                    "header": {"resultCode": "00", "resultMsg": "OK"},
                    "body": {"items": items.clone()}
                }
            }))
            .unwrap();
            assert_eq!(response.items(), Some(&[][..]), "items {items}");
        }
    }

    #[test]
    fn null_items_should_decode_as_missing() {
        let response: AirQualityResponse = serde_json::from_value(json!({
            "response": {"header": {"resultCode": "00", "resultMsg": "OK"}, "body": {"items": null}}
        }))
        .unwrap();
        assert!(response.items().is_none());
    }

    #[test]
    fn non_object_body_should_decode_as_missing() {
        let response: AirQualityResponse = serde_json::from_value(json!({
            "response": {"header": {"resultCode": "00", "resultMsg": "OK"}, "body": ""}
        }))
        .unwrap();
        assert!(response.response.body.is_none());
    }

    #[test]
    fn non_string_station_fields_should_be_kept_as_text() {
        let doc = json!({"stationName": 123, "dataTime": true, "pm10Value": "10"});
        let reading: StationReading = serde_json::from_value(doc).unwrap();
        assert_eq!(reading.station_name.as_deref(), Some("123"));
        assert_eq!(reading.data_time.as_deref(), Some("true"));
    }

    #[test]
    fn non_object_entries_should_become_blank_readings() {
        let response: AirQualityResponse = serde_json::from_value(json!({
            "response": {
                "header": {"resultCode": "00", "resultMsg": "OK"},
                "body": {"items": ["oops", {"stationName": "B"}]}
            }
        }))
        .unwrap();
        let items = response.items().unwrap();
        assert_eq!(items[0], StationReading::default());
        assert_eq!(items[1].station_name.as_deref(), Some("B"));
    }

    #[test]
    fn non_zero_result_code_should_not_be_success() {
        let header = ResponseHeader {
            result_code: "99".to_string(),
            result_msg: "SERVICE ERROR".to_string(),
        };
        assert!(!header.is_success());
    }
}
