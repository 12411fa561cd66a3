//! Unwrapping GraphQL response envelopes.
//!
//! Every Admin API response has the shape
//! `{ "data": {...}, "errors": [...], "extensions": {...} }`. Operations
//! only care about one nested value under `data`; [`unwrap_path`] walks to
//! it and deserializes it, and [`unwrap_connection`] additionally flattens
//! the `edges[].node` connection pattern.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

use crate::graphql::errors::DecodeError;

/// A paginated connection: `{ "edges": [{ "node": ..., "cursor": ... }] }`.
#[derive(Clone, Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Connection<T> {
    /// The edges, in server order.
    #[serde(default)]
    pub edges: Vec<Edge<T>>,
}

impl<T> Connection<T> {
    /// Discards the edge wrappers, keeping node order.
    #[must_use]
    pub fn into_nodes(self) -> Vec<T> {
        self.edges.into_iter().map(|edge| edge.node).collect()
    }
}

/// One entry of a [`Connection`].
#[derive(Clone, Debug, Deserialize)]
pub struct Edge<T> {
    /// The wrapped item.
    pub node: T,
    /// Opaque pagination cursor, when requested.
    #[serde(default)]
    pub cursor: Option<String>,
}

/// A mutation-level validation failure, as returned in a payload's
/// `userErrors` list.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct UserError {
    /// Path to the offending input field, e.g. `["definition", "key"]`.
    #[serde(default)]
    pub field: Option<Vec<String>>,
    /// Human-readable explanation.
    pub message: String,
    /// Machine-readable error code, e.g. `TAKEN`.
    #[serde(default)]
    pub code: Option<String>,
}

impl fmt::Display for UserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = self.field.as_ref().filter(|field| !field.is_empty()) {
            write!(f, "{}: ", field.join("."))?;
        }
        f.write_str(&self.message)?;
        if let Some(code) = &self.code {
            write!(f, " ({code})")?;
        }
        Ok(())
    }
}

/// Query cost accounting from `extensions.cost`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryCost {
    /// Cost estimated before execution.
    #[serde(default)]
    pub requested_query_cost: Option<u32>,
    /// Cost actually charged.
    #[serde(default)]
    pub actual_query_cost: Option<u32>,
    /// State of the shop's leaky bucket after this request.
    #[serde(default)]
    pub throttle_status: Option<ThrottleStatus>,
}

/// Leaky-bucket throttle state reported with every response.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThrottleStatus {
    /// Bucket size.
    pub maximum_available: f64,
    /// Points left in the bucket.
    pub currently_available: f64,
    /// Points restored per second.
    pub restore_rate: f64,
}

/// Reads `extensions.cost` from an envelope, if present and well-formed.
#[must_use]
pub fn query_cost(body: &Value) -> Option<QueryCost> {
    let cost = body.get("extensions")?.get("cost")?;
    QueryCost::deserialize(cost).ok()
}

/// Collects the `message` of every top-level GraphQL error.
///
/// Shopify reports some failures as a bare string (`"errors": "..."`)
/// rather than a list of objects; both forms are accepted.
#[must_use]
pub fn error_messages(body: &Value) -> Vec<String> {
    match body.get("errors") {
        Some(Value::String(message)) => vec![message.clone()],
        Some(Value::Array(errors)) => errors
            .iter()
            .map(|error| {
                error
                    .get("message")
                    .and_then(Value::as_str)
                    .map_or_else(|| error.to_string(), String::from)
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// Deserializes the value at `data.<path...>`.
///
/// # Errors
///
/// - [`DecodeError::Query`] if the value is missing or `null` and the
///   envelope has top-level errors
/// - [`DecodeError::MissingPath`] if the value is missing or `null` otherwise
/// - [`DecodeError::Shape`] if the value does not deserialize into `T`
///
/// # Example
///
/// ```rust
/// use shopify_metafields::graphql::unwrap_path;
/// use serde_json::json;
///
/// let body = json!({ "data": { "shop": { "name": "Oyster" } } });
/// let name: String = unwrap_path(&body, &["shop", "name"]).unwrap();
/// assert_eq!(name, "Oyster");
/// ```
pub fn unwrap_path<T: DeserializeOwned>(body: &Value, path: &[&str]) -> Result<T, DecodeError> {
    let target = body
        .get("data")
        .and_then(|data| path.iter().try_fold(data, |value, segment| value.get(*segment)))
        .filter(|value| !value.is_null());

    match target {
        Some(value) => T::deserialize(value).map_err(|source| DecodeError::Shape {
            path: path.join("."),
            source,
        }),
        None => {
            let messages = error_messages(body);
            if messages.is_empty() {
                Err(DecodeError::MissingPath {
                    path: path.join("."),
                })
            } else {
                Err(DecodeError::Query { messages })
            }
        }
    }
}

/// Unwraps the connection at `data.<path...>` and returns its nodes in
/// edge order.
///
/// # Errors
///
/// See [`unwrap_path`].
pub fn unwrap_connection<T: DeserializeOwned>(
    body: &Value,
    path: &[&str],
) -> Result<Vec<T>, DecodeError> {
    unwrap_path::<Connection<T>>(body, path).map(Connection::into_nodes)
}
