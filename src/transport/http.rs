//! HTTP transport for the Admin API.

use std::collections::HashMap;
use std::time::Duration;

use crate::config::AdminConfig;
use crate::transport::errors::{HttpResponseError, MaxHttpRetriesExceededError, TransportError};
use crate::transport::Transport;

/// Fixed retry wait time in seconds.
pub const RETRY_WAIT_TIME: u64 = 1;

/// Crate version from Cargo.toml, reported in the `User-Agent`.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// [`Transport`] implementation that posts JSON to
/// `{base_uri}/admin/api/{version}/{endpoint}` with `reqwest`.
///
/// The transport handles:
/// - Base URI from the shop domain or the configured API host
/// - Default headers including `User-Agent` and `X-Shopify-Access-Token`
/// - Retries for 429 and 500 responses when `tries > 1`
/// - Deprecation warnings from `X-Shopify-API-Deprecated-Reason`
///
/// `HttpTransport` is `Send + Sync` and can be shared across tasks.
///
/// # Example
///
/// ```rust,ignore
/// use shopify_metafields::{AccessToken, AdminConfig, HttpTransport, ShopDomain};
///
/// let config = AdminConfig::builder()
///     .shop(ShopDomain::new("my-store")?)
///     .access_token(AccessToken::new("shpat_123")?)
///     .build()?;
///
/// let transport = HttpTransport::new(&config)?.with_tries(3);
/// ```
#[derive(Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_uri: String,
    base_path: String,
    default_headers: HashMap<String, String>,
    tries: u32,
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpTransport>();
};

impl HttpTransport {
    /// Creates a transport for the shop and API version in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Network`] if the underlying HTTP client
    /// cannot be created (e.g. TLS initialization failure).
    pub fn new(config: &AdminConfig) -> Result<Self, TransportError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}Shopify Metafield Definitions v{SDK_VERSION} | Rust {rust_version}"
        );

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());
        default_headers.insert(
            "X-Shopify-Access-Token".to_string(),
            config.access_token().as_ref().to_string(),
        );

        // Proxied requests still have to name the shop.
        if config.api_host().is_some() {
            default_headers.insert("Host".to_string(), config.shop().to_string());
        }

        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        Ok(Self {
            client,
            base_uri: config.base_uri(),
            base_path: config.api_path(),
            default_headers,
            tries: 1,
        })
    }

    /// Sets how many times a request is attempted. Values below 1 are
    /// treated as 1.
    #[must_use]
    pub const fn with_tries(mut self, tries: u32) -> Self {
        self.tries = if tries == 0 { 1 } else { tries };
        self
    }

    /// Returns the base URI (e.g. `https://my-store.myshopify.com`).
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the base path (e.g. `/admin/api/2025-10`).
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the headers sent with every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the configured number of attempts.
    #[must_use]
    pub const fn tries(&self) -> u32 {
        self.tries
    }

    fn header_value(headers: &reqwest::header::HeaderMap, name: &str) -> Option<String> {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(String::from)
    }

    /// For 429 the `Retry-After` header wins; 500 always waits the fixed delay.
    fn retry_delay(code: u16, retry_after: Option<f64>) -> Duration {
        retry_after
            .filter(|_| code == 429)
            .and_then(|seconds| Duration::try_from_secs_f64(seconds).ok())
            .unwrap_or(Duration::from_secs(RETRY_WAIT_TIME))
    }

    /// Builds the JSON error message for a non-2xx response body.
    fn serialize_error(body_text: &str, request_id: Option<&str>) -> String {
        let body: serde_json::Value =
            serde_json::from_str(body_text).unwrap_or(serde_json::Value::Null);
        let mut error_body = serde_json::Map::new();

        for field in ["errors", "error"] {
            if let Some(value) = body.get(field) {
                error_body.insert(field.to_string(), value.clone());
            }
        }
        if body.get("error").is_some() {
            if let Some(description) = body.get("error_description") {
                error_body.insert("error_description".to_string(), description.clone());
            }
        }
        if let Some(request_id) = request_id {
            error_body.insert(
                "error_reference".to_string(),
                serde_json::json!(format!(
                    "If you report this error, please include this id: {request_id}."
                )),
            );
        }

        serde_json::Value::Object(error_body).to_string()
    }
}

impl Transport for HttpTransport {
    async fn execute(
        &self,
        endpoint: &str,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, TransportError> {
        let url = format!("{}{}/{}", self.base_uri, self.base_path, endpoint);
        let payload = body.to_string();

        let mut tries: u32 = 0;
        loop {
            tries += 1;

            let mut request = self.client.post(&url).body(payload.clone());
            for (key, value) in &self.default_headers {
                request = request.header(key, value);
            }

            let response = request.send().await?;
            let code = response.status().as_u16();
            let headers = response.headers();
            let request_id = Self::header_value(headers, "x-request-id");
            let retry_after =
                Self::header_value(headers, "retry-after").and_then(|v| v.parse::<f64>().ok());

            if let Some(reason) = Self::header_value(headers, "x-shopify-api-deprecated-reason") {
                tracing::warn!(
                    "Deprecated request to Shopify API at {}, received reason: {}",
                    endpoint,
                    reason
                );
            }

            let body_text = response.text().await?;

            if (200..300).contains(&code) {
                if body_text.trim().is_empty() {
                    return Ok(serde_json::json!({}));
                }
                return serde_json::from_str(&body_text)
                    .map_err(|source| TransportError::InvalidBody { code, source });
            }

            let message = Self::serialize_error(&body_text, request_id.as_deref());
            let retryable = code == 429 || code == 500;

            if !retryable || self.tries == 1 {
                return Err(HttpResponseError {
                    code,
                    message,
                    error_reference: request_id,
                }
                .into());
            }
            if tries >= self.tries {
                return Err(MaxHttpRetriesExceededError {
                    code,
                    tries: self.tries,
                    message,
                    error_reference: request_id,
                }
                .into());
            }

            let delay = Self::retry_delay(code, retry_after);
            tracing::warn!(
                "Request to {} failed with status {} (attempt {} of {}), retrying in {:?}",
                endpoint,
                code,
                tries,
                self.tries,
                delay
            );
            tokio::time::sleep(delay).await;
        }
    }
}
