//! Typed metafield definition operations.
//!
//! Each operation builds a [`GraphqlQuery`](crate::GraphqlQuery), runs it
//! through the client's transport and decodes the envelope into domain
//! values:
//!
//! - [`MetafieldDefinitions::list`]: up to [`PAGE_SIZE`] definitions,
//!   optionally filtered by owner type and namespace
//! - [`MetafieldDefinitions::create`]: creates a definition, failing with
//!   [`MetafieldDefinitionError::CreationFailed`] when no ID comes back
//! - [`MetafieldDefinitions::try_create`]: the same mutation, returning the
//!   explicit [`CreateOutcome`]
//!
//! The builders ([`list_query`], [`create_mutation`]) and decoders
//! ([`decode_list`], [`decode_create`]) are pure functions and can be used
//! with any transport.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_metafields::{GraphqlClient, HttpTransport, MetafieldDefinition, OwnerType};
//!
//! let client = GraphqlClient::new(HttpTransport::new(&config)?);
//! let definitions = client.metafield_definitions();
//!
//! for definition in definitions.list(Some(OwnerType::Product), "oyster").await? {
//!     println!("{} ({}.{})", definition.name, definition.namespace, definition.key);
//! }
//!
//! let created = definitions
//!     .create(&MetafieldDefinition {
//!         name: "Fabric".into(),
//!         namespace: "oyster".into(),
//!         key: "fabric".into(),
//!         owner_type: Some(OwnerType::Product),
//!         type_name: Some("single_line_text_field".into()),
//!         ..Default::default()
//!     })
//!     .await?;
//! println!("created {}", created.id);
//! ```

mod decode;
mod errors;
mod query;
mod types;

pub use decode::{decode_create, decode_list, CreateOutcome};
pub use errors::MetafieldDefinitionError;
pub use query::{create_mutation, list_query, CREATE_MUTATION, PAGE_SIZE};
pub use types::{MetafieldDefinition, MetafieldType, MetafieldValidation, OwnerType};

use crate::graphql::GraphqlClient;
use crate::transport::Transport;

/// Metafield definition operations bound to a [`GraphqlClient`].
///
/// Obtained from [`GraphqlClient::metafield_definitions`]. Holds no state
/// of its own; concurrent calls are independent.
#[derive(Debug)]
pub struct MetafieldDefinitions<'a, T> {
    client: &'a GraphqlClient<T>,
}

impl<'a, T: Transport> MetafieldDefinitions<'a, T> {
    pub(crate) const fn new(client: &'a GraphqlClient<T>) -> Self {
        Self { client }
    }

    /// Lists up to [`PAGE_SIZE`] definitions.
    ///
    /// `None` / `""` disable the owner-type / namespace filter. An empty
    /// result is not an error.
    ///
    /// # Errors
    ///
    /// - [`MetafieldDefinitionError::Transport`] if the request failed
    /// - [`MetafieldDefinitionError::Decoding`] if the response had no
    ///   `metafieldDefinitions` connection
    pub async fn list(
        &self,
        owner_type: Option<OwnerType>,
        namespace: &str,
    ) -> Result<Vec<MetafieldDefinition>, MetafieldDefinitionError> {
        let query = list_query(owner_type, namespace);
        let body = self.client.execute(&query).await?;
        let definitions = decode_list(&body)?;

        tracing::debug!(
            "Listed {} metafield definitions (owner type: {:?}, namespace: {:?})",
            definitions.len(),
            owner_type,
            namespace
        );
        if definitions.len() >= PAGE_SIZE {
            tracing::warn!(
                "Metafield definition listing returned a full page of {}; further definitions were not fetched",
                PAGE_SIZE
            );
        }

        Ok(definitions)
    }

    /// Creates `definition` and returns the explicit outcome.
    ///
    /// # Errors
    ///
    /// - [`MetafieldDefinitionError::Encoding`] if the definition could not
    ///   be serialized
    /// - [`MetafieldDefinitionError::Transport`] if the request failed
    /// - [`MetafieldDefinitionError::Decoding`] if the response carried
    ///   top-level GraphQL errors instead of a payload, or a malformed one
    pub async fn try_create(
        &self,
        definition: &MetafieldDefinition,
    ) -> Result<CreateOutcome, MetafieldDefinitionError> {
        let mutation =
            create_mutation(definition).map_err(|source| MetafieldDefinitionError::Encoding {
                name: definition.name.clone(),
                source,
            })?;
        let body = self.client.execute(&mutation).await?;
        Ok(decode_create(&body)?)
    }

    /// Creates `definition` and returns the created `{id, name}`.
    ///
    /// # Errors
    ///
    /// Everything [`try_create`](Self::try_create) returns, plus
    /// [`MetafieldDefinitionError::CreationFailed`] when the mutation came
    /// back without an ID, whether or not `userErrors` were reported.
    pub async fn create(
        &self,
        definition: &MetafieldDefinition,
    ) -> Result<MetafieldDefinition, MetafieldDefinitionError> {
        match self.try_create(definition).await? {
            CreateOutcome::Created(created) => {
                tracing::debug!("Created metafield definition {} ({})", created.name, created.id);
                Ok(created)
            }
            CreateOutcome::Rejected(user_errors) => {
                tracing::warn!(
                    "Metafield definition {} was not created ({} user errors)",
                    definition.name,
                    user_errors.len()
                );
                Err(MetafieldDefinitionError::CreationFailed {
                    name: definition.name.clone(),
                    user_errors,
                })
            }
        }
    }
}
