//! Saved Objects API endpoints.

use std::time::Duration;

use reqwest::Client;

use crate::endpoints::send_request;
use crate::error::{ClientError, Result};
use crate::models::{DashboardDocument, SavedObject};

/// Header Kibana requires on every state-changing request.
const XSRF_HEADER: (&str, &str) = ("kbn-xsrf", "true");

/// Create a dashboard saved object at a caller-specified identifier.
///
/// Issues `POST {base_url}/api/saved_objects/dashboard/{id}` with API key
/// authorization. Whether an existing object at `id` is overwritten or
/// rejected with a 409 depends on the deployment; the call does not mask a
/// conflict.
pub async fn create_dashboard(
    client: &Client,
    base_url: &str,
    api_key: &str,
    id: &str,
    document: &DashboardDocument,
    timeout: Duration,
) -> Result<SavedObject> {
    let url = format!("{}/api/saved_objects/dashboard/{}", base_url, id);

    let builder = client
        .post(&url)
        .header("Authorization", format!("ApiKey {}", api_key))
        .header(XSRF_HEADER.0, XSRF_HEADER.1)
        .json(document);

    let response = send_request(builder, base_url, timeout).await?;

    response
        .json::<SavedObject>()
        .await
        .map_err(|e| ClientError::InvalidResponse(format!("Failed to parse saved object: {}", e)))
}
