//! Saved Objects API response models.

use serde::{Deserialize, Serialize};

/// Minimal view of a saved object as returned by the creation endpoint.
///
/// Kibana returns the full object including attributes; only the fields the
/// publisher reports on are parsed, unknown fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedObject {
    pub id: String,
    #[serde(rename = "type")]
    pub object_type: String,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

/// Kibana's error envelope, e.g.
/// `{"statusCode": 409, "error": "Conflict", "message": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub error: String,
    pub message: String,
}
