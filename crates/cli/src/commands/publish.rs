//! Publish command implementation.

use anyhow::{Context, Result};
use tracing::info;

use kibana_client::dashboards::{self, DASHBOARD_ID};

/// Publish the built-in dashboard to the configured Kibana instance.
pub async fn run(config: kibana_config::Config) -> Result<()> {
    let client = crate::commands::build_client_from_config(&config)?;
    let document = dashboards::istio_gateway_metrics();

    info!(
        "Publishing dashboard {} to {}",
        DASHBOARD_ID,
        client.base_url()
    );

    let created = client.create_dashboard(DASHBOARD_ID, &document).await?;

    info!(id = %created.id, "Saved object accepted");

    println!("Dashboard created successfully!");
    println!("Access it at: {}", client.dashboard_url(DASHBOARD_ID));

    Ok(())
}

/// Print the dashboard document to stdout without any network call.
pub fn print_document() -> Result<()> {
    let document = dashboards::istio_gateway_metrics();
    let rendered = serde_json::to_string_pretty(&document)
        .context("Failed to serialize dashboard document")?;
    println!("{}", rendered);
    Ok(())
}
