//! The query-execution transport.
//!
//! Everything above this module speaks in terms of a single operation:
//! post a JSON request body to an endpoint and get a JSON response body
//! back. [`Transport`] is that seam. [`HttpTransport`] is the production
//! implementation over the Admin API; tests and callers with their own
//! HTTP stack can provide another.
//!
//! # Retry Behavior
//!
//! `HttpTransport` attempts each request `tries` times (default 1):
//!
//! - **429 (Rate Limited)**: retried after `Retry-After`, or 1 second
//! - **500 (Server Error)**: retried after a fixed 1 second
//! - **Other non-2xx**: returned immediately

mod errors;
mod http;

use std::future::Future;

pub use errors::{HttpResponseError, MaxHttpRetriesExceededError, TransportError};
pub use http::{HttpTransport, RETRY_WAIT_TIME, SDK_VERSION};

/// Executes a request body against an endpoint of the Admin API.
///
/// `endpoint` is relative to the versioned API root, e.g. `graphql.json`.
/// Implementations must return the parsed response body for any 2xx
/// response, even when that body carries GraphQL-level errors.
pub trait Transport {
    /// Posts `body` to `endpoint` and returns the parsed JSON response.
    fn execute(
        &self,
        endpoint: &str,
        body: &serde_json::Value,
    ) -> impl Future<Output = Result<serde_json::Value, TransportError>> + Send;
}
