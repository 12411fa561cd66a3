//! Transport-level error types.
//!
//! These describe failures that happen before a GraphQL envelope is in
//! hand: the request never reached the shop, the shop answered with a
//! non-2xx status, or the body was not JSON. They are never retried by the
//! domain layer.
//!
//! ```rust,ignore
//! use shopify_metafields::TransportError;
//!
//! match transport.execute("graphql.json", &body).await {
//!     Ok(envelope) => println!("{envelope}"),
//!     Err(TransportError::Response(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(TransportError::MaxRetries(e)) => println!("gave up after {} tries", e.tries),
//!     Err(other) => println!("{other}"),
//! }
//! ```

use thiserror::Error;

/// A non-successful HTTP response.
///
/// `message` holds a JSON object built from the response's `errors`,
/// `error` and `error_description` fields plus an `error_reference` line
/// carrying the `X-Request-Id`.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Serialized error message in JSON format.
    pub message: String,
    /// The `X-Request-Id` of the failed response, if any.
    pub error_reference: Option<String>,
}

/// Retries on 429/500 were exhausted.
#[derive(Debug, Error)]
#[error("Exceeded maximum retry count of {tries}. Last message: {message}")]
pub struct MaxHttpRetriesExceededError {
    /// The HTTP status code of the last response.
    pub code: u16,
    /// The number of tries that were attempted.
    pub tries: u32,
    /// Serialized error message from the last response.
    pub message: String,
    /// The `X-Request-Id` of the last response, if any.
    pub error_reference: Option<String>,
}

/// Unified error type for a failed [`Transport::execute`](crate::Transport::execute) call.
#[derive(Debug, Error)]
pub enum TransportError {
    /// A non-2xx response.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Retry attempts exhausted.
    #[error(transparent)]
    MaxRetries(#[from] MaxHttpRetriesExceededError),

    /// A successful status whose body is not JSON.
    #[error("Response with status {code} did not contain a JSON body: {source}")]
    InvalidBody {
        /// The HTTP status code.
        code: u16,
        /// The JSON parse failure.
        source: serde_json::Error,
    },

    /// Network, TLS or client construction error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_error_displays_message() {
        let error = HttpResponseError {
            code: 401,
            message: r#"{"errors":"[API] Invalid API key or access token"}"#.to_string(),
            error_reference: None,
        };
        assert_eq!(
            error.to_string(),
            r#"{"errors":"[API] Invalid API key or access token"}"#
        );
    }

    #[test]
    fn test_max_retries_error_includes_retry_count() {
        let error: TransportError = MaxHttpRetriesExceededError {
            code: 429,
            tries: 3,
            message: r#"{"errors":"Throttled"}"#.to_string(),
            error_reference: Some("req-1".to_string()),
        }
        .into();

        let message = error.to_string();
        assert!(message.contains("Exceeded maximum retry count of 3"));
        assert!(message.contains("Throttled"));
    }

    #[test]
    fn test_invalid_body_error_mentions_status() {
        let source = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let error = TransportError::InvalidBody { code: 200, source };
        assert!(error.to_string().contains("status 200"));
    }
}
