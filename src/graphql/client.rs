//! GraphQL client over any [`Transport`].

use crate::graphql::document::GraphqlQuery;
use crate::graphql::envelope::query_cost;
use crate::metafield_definitions::MetafieldDefinitions;
use crate::transport::{Transport, TransportError};

/// Endpoint of the Admin GraphQL API, relative to the versioned API root.
pub const GRAPHQL_ENDPOINT: &str = "graphql.json";

/// Executes [`GraphqlQuery`] documents against the Admin GraphQL endpoint.
///
/// The client returns the raw response envelope; GraphQL-level errors
/// arrive with a 2xx status and are left in the body for the caller (or
/// the typed operations built on this client) to interpret.
///
/// # Example
///
/// ```rust,ignore
/// use shopify_metafields::{GraphqlClient, GraphqlQuery, HttpTransport};
///
/// let client = GraphqlClient::new(HttpTransport::new(&config)?);
///
/// let body = client.execute(&GraphqlQuery::new("{ shop { name } }")).await?;
/// println!("Shop: {}", body["data"]["shop"]["name"]);
///
/// let definitions = client
///     .metafield_definitions()
///     .list(Some(OwnerType::Product), "custom")
///     .await?;
/// ```
#[derive(Debug)]
pub struct GraphqlClient<T> {
    transport: T,
}

impl<T: Transport> GraphqlClient<T> {
    /// Creates a client that sends requests through `transport`.
    #[must_use]
    pub const fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Returns the underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Returns the metafield definition operations bound to this client.
    #[must_use]
    pub const fn metafield_definitions(&self) -> MetafieldDefinitions<'_, T> {
        MetafieldDefinitions::new(self)
    }

    /// Executes `query` and returns the response envelope.
    ///
    /// # Errors
    ///
    /// Returns the [`TransportError`] from the transport unchanged.
    pub async fn execute(&self, query: &GraphqlQuery) -> Result<serde_json::Value, TransportError> {
        self.execute_at(GRAPHQL_ENDPOINT, query).await
    }

    /// Executes `query` with `?debug=true`, which makes Shopify add query
    /// cost and execution detail to the response's `extensions`.
    ///
    /// # Errors
    ///
    /// Returns the [`TransportError`] from the transport unchanged.
    pub async fn execute_with_debug(
        &self,
        query: &GraphqlQuery,
    ) -> Result<serde_json::Value, TransportError> {
        self.execute_at(&format!("{GRAPHQL_ENDPOINT}?debug=true"), query)
            .await
    }

    async fn execute_at(
        &self,
        endpoint: &str,
        query: &GraphqlQuery,
    ) -> Result<serde_json::Value, TransportError> {
        let operation = query.operation_name().unwrap_or("anonymous");
        tracing::debug!("Executing GraphQL operation {} at {}", operation, endpoint);

        let body = self.transport.execute(endpoint, &query.to_body()).await?;

        if let Some(cost) = query_cost(&body) {
            tracing::debug!(
                "GraphQL operation {} cost {:?} (requested {:?}), throttle {:?}",
                operation,
                cost.actual_query_cost,
                cost.requested_query_cost,
                cost.throttle_status
            );
        }

        Ok(body)
    }
}
