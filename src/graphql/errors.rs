//! Errors raised while unwrapping a GraphQL response envelope.

use thiserror::Error;

/// The response envelope did not have the expected shape.
///
/// This is distinct from [`TransportError`](crate::TransportError): the
/// server was reached and answered with a 2xx JSON body, but the body did
/// not contain what the operation asked for.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Nothing (or `null`) at the expected path under `data`.
    #[error("GraphQL response has no value at 'data.{path}'")]
    MissingPath {
        /// Dotted path below `data`.
        path: String,
    },

    /// A value was found but could not be deserialized.
    #[error("GraphQL response value at 'data.{path}' has an unexpected shape: {source}")]
    Shape {
        /// Dotted path below `data`.
        path: String,
        /// The underlying deserialization error.
        source: serde_json::Error,
    },

    /// The expected path was missing and the envelope carried top-level
    /// GraphQL errors explaining why.
    #[error("GraphQL query failed: {}", .messages.join("; "))]
    Query {
        /// The `message` of every entry in the envelope's `errors`.
        messages: Vec<String>,
    },
}
