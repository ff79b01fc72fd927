//! Configuration management for the Kibana dashboard publisher.
//!
//! This crate provides types and a loader for resolving the Kibana
//! connection configuration (endpoint, API key, timeout) from environment
//! variables, a JSON config file, and explicit overrides.

pub mod constants;
mod error;
mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{ConfigLoader, env_var_or_none};
pub use types::{AuthConfig, Config, ConnectionConfig};
