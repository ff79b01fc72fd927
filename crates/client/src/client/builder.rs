//! Client builder for constructing [`KibanaClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (base_url, api_key)
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeout, TLS verification)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`KibanaClient`] methods)
//!
//! # Invariants
//! - `base_url` and `api_key` are required fields and must be provided before calling `build()`
//! - The base URL is always normalized to have no trailing slashes
//! - `skip_verify` only affects HTTPS connections; HTTP connections log a warning

use std::time::Duration;

use secrecy::SecretString;

use crate::client::KibanaClient;
use crate::error::{ClientError, Result};
use kibana_config::Config;
use kibana_config::constants::DEFAULT_TIMEOUT_SECS;

/// Builder for creating a new [`KibanaClient`].
///
/// All options have defaults except `base_url` and `api_key`, which are
/// required.
pub struct KibanaClientBuilder {
    base_url: Option<String>,
    api_key: Option<SecretString>,
    skip_verify: bool,
    timeout: Duration,
}

impl Default for KibanaClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            api_key: None,
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl KibanaClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the Kibana instance.
    ///
    /// This should include the protocol, e.g. `https://kibana.example.com`.
    /// Trailing slashes will be automatically removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the API key used for `Authorization: ApiKey` authentication.
    pub fn api_key(mut self, key: SecretString) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Set whether to skip TLS certificate verification.
    ///
    /// # Security Warning
    /// Only use this in development or testing environments. Disabling TLS
    /// verification makes the connection vulnerable to man-in-the-middle attacks.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Set the request timeout.
    ///
    /// Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Create a client builder from configuration.
    ///
    /// Centralizes the conversion from config crate types to client types.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = Some(config.connection.endpoint.clone());
        self.api_key = Some(config.auth.api_key.clone());
        self.skip_verify = config.connection.skip_verify;
        self.timeout = config.connection.timeout;
        self
    }

    /// Normalize a base URL by removing trailing slashes.
    ///
    /// This prevents double slashes when concatenating with endpoint paths.
    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`KibanaClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` was not provided.
    /// Returns [`ClientError::AuthMissing`] if `api_key` was not provided.
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<KibanaClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let base_url = Self::normalize_base_url(base_url);

        let api_key = self
            .api_key
            .ok_or_else(|| ClientError::AuthMissing("api_key is required".to_string()))?;

        let mut http_builder = reqwest::Client::builder().timeout(self.timeout);

        if self.skip_verify {
            if base_url.starts_with("https://") {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                // skip_verify only affects TLS certificate verification.
                // It has no effect on HTTP connections since there is no TLS layer.
                tracing::warn!(
                    "skip_verify=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }

        let http = http_builder.build()?;

        Ok(KibanaClient {
            http,
            base_url,
            api_key,
            timeout: self.timeout,
        })
    }
}
