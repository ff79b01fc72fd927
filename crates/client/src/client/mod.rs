//! Kibana Saved Objects API client.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `saved_objects`: Dashboard publishing methods
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Dashboard content (see [`crate::dashboards`])
//!
//! # Invariants
//! - `base_url` is normalized at build time (no trailing slashes).
//! - The API key never appears in `Debug` output.

pub mod builder;
mod saved_objects;

use std::time::Duration;

use secrecy::SecretString;

/// Client for the Kibana Saved Objects API.
///
/// # Creating a Client
///
/// Use [`KibanaClient::builder()`]:
///
/// ```rust,ignore
/// use kibana_client::KibanaClient;
/// use secrecy::SecretString;
///
/// let client = KibanaClient::builder()
///     .base_url("https://kibana.example.com".to_string())
///     .api_key(SecretString::new("my-key".to_string().into()))
///     .build()?;
/// ```
#[derive(Debug)]
pub struct KibanaClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) api_key: SecretString,
    pub(crate) timeout: Duration,
}

impl KibanaClient {
    /// Create a new client builder.
    pub fn builder() -> builder::KibanaClientBuilder {
        builder::KibanaClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The viewable URL for a dashboard at the given identifier.
    pub fn dashboard_url(&self, id: &str) -> String {
        format!("{}/app/dashboards#/view/{}", self.base_url, id)
    }
}
