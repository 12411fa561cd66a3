//! Client configuration.
//!
//! [`AdminConfig`] carries everything the HTTP transport needs to reach a
//! shop's Admin GraphQL endpoint: the shop, the access token, the API
//! version and optional host/user-agent overrides. It is built with
//! [`AdminConfigBuilder`] and validated on construction.
//!
//! # Example
//!
//! ```rust
//! use shopify_metafields::{AccessToken, AdminConfig, ApiVersion, ShopDomain};
//!
//! let config = AdminConfig::builder()
//!     .shop(ShopDomain::new("my-store").unwrap())
//!     .access_token(AccessToken::new("shpat_123").unwrap())
//!     .api_version(ApiVersion::V2025_07)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.api_path(), "/admin/api/2025-07");
//! ```

mod newtypes;
mod version;

pub use newtypes::{AccessToken, HostUrl, ShopDomain};
pub use version::ApiVersion;

use crate::error::ConfigError;

/// Configuration for talking to one shop's Admin API.
#[derive(Clone, Debug)]
pub struct AdminConfig {
    shop: ShopDomain,
    access_token: AccessToken,
    api_version: ApiVersion,
    api_host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
}

impl AdminConfig {
    /// Creates a new builder.
    #[must_use]
    pub fn builder() -> AdminConfigBuilder {
        AdminConfigBuilder::default()
    }

    /// Returns the shop domain.
    #[must_use]
    pub const fn shop(&self) -> &ShopDomain {
        &self.shop
    }

    /// Returns the access token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the API host override, if configured.
    #[must_use]
    pub const fn api_host(&self) -> Option<&HostUrl> {
        self.api_host.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the origin requests are sent to.
    ///
    /// This is the API host override when one is configured, otherwise
    /// `https://{shop}`.
    #[must_use]
    pub fn base_uri(&self) -> String {
        self.api_host.as_ref().map_or_else(
            || format!("https://{}", self.shop),
            |host| host.origin().to_string(),
        )
    }

    /// Returns the versioned API root, e.g. `/admin/api/2025-10`.
    #[must_use]
    pub fn api_path(&self) -> String {
        format!("/admin/api/{}", self.api_version)
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AdminConfig>();
};

/// Builder for [`AdminConfig`].
///
/// `shop` and `access_token` are required. The API version defaults to
/// [`ApiVersion::latest`].
#[derive(Debug, Default)]
pub struct AdminConfigBuilder {
    shop: Option<ShopDomain>,
    access_token: Option<AccessToken>,
    api_version: Option<ApiVersion>,
    api_host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
}

impl AdminConfigBuilder {
    /// Sets the shop (required).
    #[must_use]
    pub fn shop(mut self, shop: ShopDomain) -> Self {
        self.shop = Some(shop);
        self
    }

    /// Sets the Admin API access token (required).
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Routes requests through another host. The shop domain is still sent
    /// in the `Host` header.
    #[must_use]
    pub fn api_host(mut self, host: HostUrl) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Sets a prefix for the `User-Agent` header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`AdminConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `shop` or
    /// `access_token` is not set.
    pub fn build(self) -> Result<AdminConfig, ConfigError> {
        let shop = self
            .shop
            .ok_or(ConfigError::MissingRequiredField { field: "shop" })?;
        let access_token = self
            .access_token
            .ok_or(ConfigError::MissingRequiredField {
                field: "access_token",
            })?;
        let api_version = self.api_version.unwrap_or_else(ApiVersion::latest);

        if !api_version.is_supported() {
            tracing::warn!(
                "API version {} is outside the supported window and may stop working",
                api_version
            );
        }

        Ok(AdminConfig {
            shop,
            access_token,
            api_version,
            api_host: self.api_host,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
