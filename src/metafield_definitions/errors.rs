//! Errors returned by metafield definition operations.

use thiserror::Error;

use crate::graphql::{DecodeError, UserError};
use crate::transport::TransportError;

/// Error type for [`MetafieldDefinitions`](crate::metafield_definitions::MetafieldDefinitions).
///
/// The variants separate "never reached the server"
/// ([`Transport`](Self::Transport)), "server answered with something
/// unexpected" ([`Decoding`](Self::Decoding)) and "server refused to
/// create the definition" ([`CreationFailed`](Self::CreationFailed)).
///
/// ```rust
/// use shopify_metafields::metafield_definitions::MetafieldDefinitionError;
/// use shopify_metafields::UserError;
///
/// let error = MetafieldDefinitionError::CreationFailed {
///     name: "Test Definition".to_string(),
///     user_errors: vec![UserError {
///         field: Some(vec!["definition".into(), "key".into()]),
///         message: "Key is in use".into(),
///         code: Some("TAKEN".into()),
///     }],
/// };
/// assert_eq!(
///     error.to_string(),
///     "Unable to create metafield definition Test Definition: definition.key: Key is in use (TAKEN)"
/// );
/// ```
#[derive(Debug, Error)]
pub enum MetafieldDefinitionError {
    /// The transport failed; propagated unchanged.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The response envelope did not have the expected shape.
    #[error(transparent)]
    Decoding(#[from] DecodeError),

    /// The definition could not be encoded as mutation input.
    #[error("Unable to encode metafield definition {name}: {source}")]
    Encoding {
        /// Name of the definition being encoded.
        name: String,
        /// The serialization error.
        source: serde_json::Error,
    },

    /// The mutation ran but returned no created ID.
    #[error("Unable to create metafield definition {name}{}", user_error_suffix(.user_errors))]
    CreationFailed {
        /// Name of the definition that was submitted.
        name: String,
        /// The `userErrors` returned with the mutation, possibly empty.
        user_errors: Vec<UserError>,
    },
}

fn user_error_suffix(user_errors: &[UserError]) -> String {
    if user_errors.is_empty() {
        return String::new();
    }
    let details: Vec<String> = user_errors.iter().map(ToString::to_string).collect();
    format!(": {}", details.join("; "))
}
