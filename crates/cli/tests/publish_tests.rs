//! End-to-end tests for the publish command and the process exit contract.
//!
//! # Invariants
//! - Exit code 0 on HTTP 2xx (and dry runs), 1 on any failure.
//! - Success output includes the viewable URL containing the fixed
//!   object identifier.
//! - Failure output includes the error and, when available, the raw
//!   response body.

mod common;

use common::{kibana_cmd, kibana_cmd_with_endpoint};
use predicates::prelude::*;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_publish_success_prints_view_url_and_exits_0() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(
            "/api/saved_objects/dashboard/istio-gateway-metrics-dashboard",
        ))
        .and(header("Authorization", "ApiKey test-key"))
        .and(header("kbn-xsrf", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "istio-gateway-metrics-dashboard",
            "type": "dashboard"
        })))
        .expect(1)
        .mount(&server)
        .await;

    kibana_cmd_with_endpoint(&server.uri())
        .arg("publish")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Dashboard created successfully!"))
        .stdout(predicate::str::contains(
            "/app/dashboards#/view/istio-gateway-metrics-dashboard",
        ));
}

#[tokio::test]
async fn test_publish_conflict_exits_1_with_response_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(409).set_body_json(serde_json::json!({
            "statusCode": 409,
            "error": "Conflict",
            "message": "Saved object [dashboard/istio-gateway-metrics-dashboard] conflict"
        })))
        .mount(&server)
        .await;

    kibana_cmd_with_endpoint(&server.uri())
        .arg("publish")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error creating dashboard"))
        .stderr(predicate::str::contains("Response:"))
        .stderr(predicate::str::contains("statusCode"));
}

#[test]
fn test_publish_connection_refused_exits_1() {
    kibana_cmd_with_endpoint("http://127.0.0.1:1")
        .arg("publish")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error creating dashboard"));
}

#[test]
fn test_publish_without_endpoint_exits_1() {
    kibana_cmd()
        .env("KIBANA_API_KEY", "test-key")
        .arg("publish")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("endpoint"));
}

#[test]
fn test_publish_without_api_key_exits_1() {
    kibana_cmd()
        .env("KIBANA_ENDPOINT", "https://kibana.example.com")
        .arg("publish")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("API key"));
}

#[test]
fn test_dry_run_prints_document_without_config() {
    // No endpoint or API key configured: a dry run must still succeed.
    kibana_cmd()
        .args(["publish", "--dry-run"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("panelsJSON"))
        .stdout(predicate::str::contains("Istio Gateway Metrics Dashboard"));
}

#[tokio::test]
async fn test_publish_reads_config_file() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(header("Authorization", "ApiKey file-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "istio-gateway-metrics-dashboard",
            "type": "dashboard"
        })))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.json");
    std::fs::write(
        &config_path,
        serde_json::json!({
            "connection": { "endpoint": server.uri() },
            "auth": { "api_key": "file-key" }
        })
        .to_string(),
    )
    .unwrap();

    kibana_cmd()
        .env("KIBANA_CONFIG_PATH", config_path.to_str().unwrap())
        .arg("publish")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Dashboard created successfully!"));
}

#[tokio::test]
async fn test_cli_endpoint_flag_overrides_env() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "istio-gateway-metrics-dashboard",
            "type": "dashboard"
        })))
        .expect(1)
        .mount(&server)
        .await;

    // Env points at a dead endpoint; the flag must win.
    kibana_cmd()
        .env("KIBANA_ENDPOINT", "http://127.0.0.1:1")
        .env("KIBANA_API_KEY", "test-key")
        .args(["--endpoint", &server.uri(), "publish"])
        .assert()
        .code(0);
}
