//! Decoding metafield definition responses.

use serde::Deserialize;
use serde_json::Value;

use crate::graphql::{unwrap_connection, unwrap_path, DecodeError, UserError};
use crate::metafield_definitions::types::MetafieldDefinition;

const LIST_PATH: &[&str] = &["metafieldDefinitions"];
const CREATE_PATH: &[&str] = &["metafieldDefinitionCreate"];

/// Result of a create mutation that reached the server.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum CreateOutcome {
    /// The definition was created and has an ID.
    Created(MetafieldDefinition),
    /// No definition came back. The user errors explain why, when the
    /// server sent any.
    Rejected(Vec<UserError>),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreatePayload {
    #[serde(default)]
    created_definition: Option<MetafieldDefinition>,
    #[serde(default)]
    user_errors: Option<Vec<UserError>>,
}

/// Decodes `data.metafieldDefinitions.edges[].node` in edge order.
///
/// # Errors
///
/// Returns [`DecodeError`] if the connection is missing or malformed.
pub fn decode_list(body: &Value) -> Result<Vec<MetafieldDefinition>, DecodeError> {
    unwrap_connection(body, LIST_PATH)
}

/// Decodes `data.metafieldDefinitionCreate`.
///
/// A created definition counts only if its `id` is non-empty; anything
/// else is [`CreateOutcome::Rejected`] with whatever `userErrors` were
/// returned. A missing or `null` payload carries no ID either and is
/// rejected with no user errors.
///
/// # Errors
///
/// - [`DecodeError::Query`] if the payload is missing and the envelope
///   has top-level GraphQL errors
/// - [`DecodeError::Shape`] if the payload is malformed
pub fn decode_create(body: &Value) -> Result<CreateOutcome, DecodeError> {
    let payload: CreatePayload = match unwrap_path(body, CREATE_PATH) {
        Ok(payload) => payload,
        Err(DecodeError::MissingPath { .. }) => return Ok(CreateOutcome::Rejected(Vec::new())),
        Err(e) => return Err(e),
    };

    Ok(match payload.created_definition {
        Some(definition) if definition.is_created() => CreateOutcome::Created(definition),
        _ => CreateOutcome::Rejected(payload.user_errors.unwrap_or_default()),
    })
}
