//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `commands` module).
//! - Does not handle config loading (see `kibana-config`).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kibana-cli")]
#[command(about = "Publish the Istio gateway metrics dashboard to Kibana", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  kibana-cli publish\n  kibana-cli publish --dry-run\n  kibana-cli --endpoint https://kibana.example.com --api-key $KIBANA_API_KEY publish\n"
)]
pub struct Cli {
    /// Base URL of the Kibana instance (e.g., https://kibana.example.com)
    #[arg(short, long, global = true, env = "KIBANA_ENDPOINT")]
    pub endpoint: Option<String>,

    /// API key for authentication (sent as `Authorization: ApiKey ...`)
    #[arg(short, long, global = true, env = "KIBANA_API_KEY")]
    pub api_key: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "KIBANA_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Skip TLS certificate verification (for self-signed certificates)
    #[arg(long, global = true, env = "KIBANA_SKIP_VERIFY")]
    pub skip_verify: bool,

    /// Path to a custom configuration file (overrides default location).
    ///
    /// Can also be set via KIBANA_CONFIG_PATH environment variable.
    #[arg(long, global = true, env = "KIBANA_CONFIG_PATH", value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Publish the built-in dashboard to the configured Kibana instance
    Publish {
        /// Print the dashboard document to stdout instead of publishing it
        #[arg(long)]
        dry_run: bool,
    },
}
