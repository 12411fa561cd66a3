//! # Shopify Metafield Definitions
//!
//! Typed metafield definition operations over the Shopify Admin GraphQL
//! API.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`AdminConfig`] and validated newtypes
//! - A [`Transport`] seam with an async, retrying [`HttpTransport`]
//! - A [`GraphqlClient`] that executes [`GraphqlQuery`] documents
//! - Envelope helpers ([`graphql::unwrap_path`], [`graphql::unwrap_connection`])
//! - [`metafield_definitions`]: list and create metafield definitions as
//!   ordinary async calls returning domain values or errors
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use shopify_metafields::{
//!     AccessToken, AdminConfig, GraphqlClient, HttpTransport, MetafieldDefinition,
//!     MetafieldValidation, OwnerType, ShopDomain,
//! };
//!
//! let config = AdminConfig::builder()
//!     .shop(ShopDomain::new("my-store")?)
//!     .access_token(AccessToken::new("shpat_123")?)
//!     .build()?;
//!
//! let client = GraphqlClient::new(HttpTransport::new(&config)?.with_tries(3));
//! let definitions = client.metafield_definitions();
//!
//! let existing = definitions.list(Some(OwnerType::Product), "oyster").await?;
//!
//! let created = definitions
//!     .create(&MetafieldDefinition {
//!         name: "Product Type".into(),
//!         namespace: "oyster".into(),
//!         key: "product_type".into(),
//!         owner_type: Some(OwnerType::Product),
//!         type_name: Some("single_line_text_field".into()),
//!         validations: vec![MetafieldValidation::choices(["bike", "jewelry"])],
//!         ..Default::default()
//!     })
//!     .await?;
//! ```
//!
//! ## Errors
//!
//! - [`TransportError`]: the request never produced a JSON envelope
//! - [`DecodeError`]: the envelope did not have the expected shape
//! - [`MetafieldDefinitionError::CreationFailed`]: a create mutation
//!   returned no ID; carries the submitted name and any `userErrors`
//! - [`ConfigError`]: invalid configuration values
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is passed explicitly
//! - **No string interpolation**: user values always travel as variables
//! - **Thread-safe**: builders and decoders are pure, `HttpTransport` is `Send + Sync`
//! - **Async-first**: designed for the Tokio runtime

pub mod config;
pub mod error;
pub mod graphql;
pub mod metafield_definitions;
pub mod transport;

pub use config::{AccessToken, AdminConfig, AdminConfigBuilder, ApiVersion, HostUrl, ShopDomain};
pub use error::ConfigError;

pub use transport::{
    HttpResponseError, HttpTransport, MaxHttpRetriesExceededError, Transport, TransportError,
};

pub use graphql::{DecodeError, GraphqlClient, GraphqlQuery, QueryCost, UserError};

pub use metafield_definitions::{
    CreateOutcome, MetafieldDefinition, MetafieldDefinitionError, MetafieldDefinitions,
    MetafieldType, MetafieldValidation, OwnerType,
};
