//! Common test utilities for integration tests.

use std::time::Duration;

use secrecy::SecretString;

#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

use kibana_client::KibanaClient;

/// Build a client against a mock server with a short timeout so timeout
/// tests stay fast.
#[allow(dead_code)]
pub fn test_client(base_url: &str, timeout: Duration) -> KibanaClient {
    KibanaClient::builder()
        .base_url(base_url.to_string())
        .api_key(SecretString::new("test-key".to_string().into()))
        .timeout(timeout)
        .build()
        .expect("client should build")
}

/// A successful saved-object creation response body.
#[allow(dead_code)]
pub fn created_body(id: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "type": "dashboard",
        "updated_at": "2024-01-01T00:00:00.000Z",
        "version": "WzEsMV0=",
        "attributes": {"title": "Istio Gateway Metrics Dashboard"},
        "references": []
    })
}
