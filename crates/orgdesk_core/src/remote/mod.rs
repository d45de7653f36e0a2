//! HTTP boundary for remote mode.
//!
//! # Responsibility
//! - Define the response envelope shared by every backend endpoint.
//! - Encode `SearchParams` into query parameters.
//! - Isolate the HTTP client behind the `Transport` trait.
//!
//! # Invariants
//! - In-process pages are 1-based; `PageBase` decides the wire origin.

pub mod envelope;
pub mod params;
pub mod transport;

pub use envelope::{ApiEnvelope, PageData, CODE_NOT_FOUND, CODE_OK};
pub use params::{encode_search_params, PageBase};
pub use transport::{ApiRequest, ApiResponse, HttpMethod, HttpTransport, Transport, TransportError};
