//! Dashboard publishing methods for [`KibanaClient`].

use secrecy::ExposeSecret;

use crate::client::KibanaClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{DashboardDocument, SavedObject};

impl KibanaClient {
    /// Publish a dashboard document at the given saved-object identifier.
    ///
    /// Single-shot: one POST, no retries. A 409 surfaces as
    /// `ClientError::ApiError` (see `ClientError::is_conflict`) when the
    /// deployment does not treat POST-to-existing-ID as an upsert.
    pub async fn create_dashboard(
        &self,
        id: &str,
        document: &DashboardDocument,
    ) -> Result<SavedObject> {
        endpoints::create_dashboard(
            &self.http,
            &self.base_url,
            self.api_key.expose_secret(),
            id,
            document,
            self.timeout,
        )
        .await
    }
}
