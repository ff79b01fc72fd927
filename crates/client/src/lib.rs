//! Kibana Saved Objects API client.
//!
//! This crate provides a typed client for publishing dashboards to Kibana
//! via the Saved Objects API, using API key authentication.

pub mod client;
pub mod dashboards;
pub mod endpoints;
pub mod error;
pub mod models;
mod serde_helpers;

pub use client::KibanaClient;
pub use client::builder::KibanaClientBuilder;
pub use error::{ClientError, Result};
pub use models::{
    ApiErrorBody, DashboardAttributes, DashboardDocument, DashboardOptions, Panel, SavedObject,
};
