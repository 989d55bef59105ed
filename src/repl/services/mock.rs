//! # Mock Transport for Testing
//!
//! Replays pre-programmed responses and records every request it receives,
//! so tests can check both what was sent and how replies are handled.

use super::transport::{HttpTransport, QueryParams, TransportResponse};
use anyhow::Result;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// A request as seen by the mock transport
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub url: String,
    pub query: QueryParams,
}

impl RecordedRequest {
    /// Value of the first query parameter named `key`
    pub fn param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Scripted reply: a response, or a transport-level failure message
#[derive(Debug, Clone)]
pub enum MockReply {
    Response(TransportResponse),
    Failure(String),
}

/// Type alias for shared request history
type RequestHistory = Arc<Mutex<Vec<RecordedRequest>>>;

/// Mock transport for testing
///
/// Replies are consumed in order. When the script runs dry every further
/// request fails, which keeps unexpected calls loud in tests.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    replies: Arc<Mutex<VecDeque<MockReply>>>,
    requests: RequestHistory,
}

impl MockTransport {
    /// Create a mock with no scripted replies
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that answers once with `status` and `body`
    pub fn with_response(status: u16, body: impl Into<String>) -> Self {
        let mock = Self::new();
        mock.push_response(status, body);
        mock
    }

    /// Create a mock whose first request fails before any response arrives
    pub fn with_failure(message: impl Into<String>) -> Self {
        let mock = Self::new();
        mock.push_failure(message);
        mock
    }

    pub fn push_response(&self, status: u16, body: impl Into<String>) {
        self.lock_replies()
            .push_back(MockReply::Response(TransportResponse::new(status, body)));
    }

    pub fn push_failure(&self, message: impl Into<String>) {
        self.lock_replies()
            .push_back(MockReply::Failure(message.into()));
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().map(|r| r.len()).unwrap_or_default()
    }

    fn lock_replies(&self) -> std::sync::MutexGuard<'_, VecDeque<MockReply>> {
        match self.replies.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl HttpTransport for MockTransport {
    fn get(&self, url: &str, query: &[(String, String)]) -> Result<TransportResponse> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(RecordedRequest {
                url: url.to_string(),
                query: query.to_vec(),
            });
        }

        match self.lock_replies().pop_front() {
            Some(MockReply::Response(response)) => Ok(response),
            Some(MockReply::Failure(message)) => Err(anyhow::anyhow!(message)),
            None => Err(anyhow::anyhow!("No scripted reply available")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_transport_should_replay_in_order() {
        let mock = MockTransport::with_response(200, "first");
        mock.push_failure("connection reset");

        let first = mock.get("http://a", &[]).unwrap();
        assert_eq!(first.body, "first");

        let second = mock.get("http://b", &[]);
        assert_eq!(second.unwrap_err().to_string(), "connection reset");

        assert!(mock.get("http://c", &[]).is_err());
        assert_eq!(mock.request_count(), 3);
    }

    #[test]
    fn mock_transport_should_record_query() {
        let mock = MockTransport::with_response(200, "{}");
        let query = vec![("sidoName".to_string(), "부산".to_string())];
        mock.get("http://example.com/api", &query).unwrap();

        let requests = mock.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url, "http://example.com/api");
        assert_eq!(requests[0].param("sidoName"), Some("부산"));
        assert_eq!(requests[0].param("pageNo"), None);
    }

    #[test]
    fn cloned_mock_should_share_history() {
        let mock = MockTransport::with_response(200, "{}");
        let handle = mock.clone();
        mock.get("http://a", &[]).unwrap();
        assert_eq!(handle.request_count(), 1);
    }
}
