//! CLI command implementations.

pub mod publish;

use anyhow::{Context, Result};
use kibana_client::KibanaClient;
use kibana_config::Config;

/// Build a client from resolved configuration.
pub fn build_client_from_config(config: &Config) -> Result<KibanaClient> {
    KibanaClient::builder()
        .from_config(config)
        .build()
        .context("Failed to build Kibana client")
}
