//! GraphQL plumbing shared by every typed operation.
//!
//! - [`GraphqlQuery`]: a query/mutation document with its variables
//! - [`GraphqlClient`]: executes documents through a [`Transport`](crate::Transport)
//! - [`unwrap_path`] / [`unwrap_connection`]: pull typed values out of the
//!   `data` envelope
//! - [`DecodeError`]: the envelope did not contain what was asked for
//!
//! # Response Structure
//!
//! - `data`: the query result
//! - `errors`: top-level GraphQL errors (still HTTP 200)
//! - `extensions.cost`: query cost and throttle state, see [`QueryCost`]

mod client;
mod document;
mod envelope;
mod errors;

pub use client::{GraphqlClient, GRAPHQL_ENDPOINT};
pub use document::GraphqlQuery;
pub use envelope::{
    error_messages, query_cost, unwrap_connection, unwrap_path, Connection, Edge, QueryCost,
    ThrottleStatus, UserError,
};
pub use errors::DecodeError;
