//! # Services Layer
//!
//! Everything that reaches outside the process. The air quality service owns
//! the request/response contract with AirKorea; the transport underneath is
//! swappable so the service can be tested without a network.

pub mod air_quality;
pub mod mock;
pub mod transport;

// Re-export service types
pub use air_quality::{AirQualityService, FetchError, UNREGISTERED_KEY_MARKER};
pub use mock::{MockReply, MockTransport, RecordedRequest};
pub use transport::{HttpTransport, QueryParams, ReqwestTransport, TransportResponse};
