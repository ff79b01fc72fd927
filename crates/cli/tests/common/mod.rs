//! Shared test utilities for kibana-cli integration tests.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic by default:
//!   `.env` loading is disabled and host connection env vars are cleared.

use assert_cmd::Command;

/// Returns a hermetic `kibana-cli` command for integration testing.
pub fn kibana_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("kibana-cli");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    // Clear potential host leakage
    cmd.env_remove("KIBANA_ENDPOINT")
        .env_remove("KIBANA_API_KEY")
        .env_remove("KIBANA_TIMEOUT")
        .env_remove("KIBANA_SKIP_VERIFY")
        .env_remove("KIBANA_CONFIG_PATH");

    cmd
}

/// Returns a hermetic `kibana-cli` command pointed at the given endpoint
/// with a dummy API key.
#[allow(dead_code)]
pub fn kibana_cmd_with_endpoint(endpoint: &str) -> Command {
    let mut cmd = kibana_cmd();
    cmd.env("KIBANA_ENDPOINT", endpoint);
    cmd.env("KIBANA_API_KEY", "test-key");
    cmd
}
