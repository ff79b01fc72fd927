//! kibana-cli - publish the Istio gateway metrics dashboard to Kibana.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Resolve configuration (CLI flags > env vars > config file).
//! - Execute the publish command via the shared client library.
//!
//! Does NOT handle:
//! - HTTP or document construction (see `crates/client`).
//! - Configuration parsing details (see `crates/config`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - Exit code is 0 on success and 1 on any failure.

mod args;
mod commands;
mod error;

use args::{Cli, Commands};
use clap::Parser;
use error::ExitCode;
use kibana_config::{Config, ConfigLoader};
use secrecy::SecretString;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::PublishFailed.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer())
        .init();

    let exit_code = match run(cli).await {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("Error creating dashboard: {:#}", e);

            // Surface the raw response body for diagnostics when present.
            if let Some(body) = e
                .chain()
                .find_map(|cause| cause.downcast_ref::<kibana_client::ClientError>())
                .and_then(|client_err| client_err.response_body())
            {
                eprintln!("Response: {}", body);
            }

            ExitCode::PublishFailed
        }
    };

    std::process::exit(exit_code.as_i32());
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match &cli.command {
        // A dry run only renders the document; it needs no connection
        // details and must not fail on missing credentials.
        Commands::Publish { dry_run: true } => commands::publish::print_document()?,
        Commands::Publish { dry_run: false } => {
            let config = resolve_config(&cli)?;
            commands::publish::run(config).await?;
        }
    }

    Ok(())
}

/// Resolve configuration with precedence: CLI flags > environment
/// variables > config file > defaults.
fn resolve_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut loader = ConfigLoader::new();

    // Custom config path from CLI (clap already merges KIBANA_CONFIG_PATH).
    // Blank/whitespace-only values are ignored.
    if let Some(ref path) = cli.config_path {
        let path_str = path.to_string_lossy();
        if !path_str.trim().is_empty() {
            loader = loader.with_config_path(path.clone());
        }
    }

    loader = loader.from_env()?;
    loader = loader.from_file()?;

    // CLI overrides (highest priority)
    if let Some(ref endpoint) = cli.endpoint {
        loader = loader.with_endpoint(endpoint.clone());
    }
    if let Some(ref api_key) = cli.api_key {
        loader = loader.with_api_key(SecretString::new(api_key.clone().into()));
    }
    if let Some(timeout_secs) = cli.timeout {
        loader = loader.with_timeout(std::time::Duration::from_secs(timeout_secs));
    }
    if cli.skip_verify {
        loader = loader.with_skip_verify(true);
    }

    Ok(loader.build()?)
}
