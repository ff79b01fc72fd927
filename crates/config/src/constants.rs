//! Centralized constants for the Kibana publisher workspace.
//!
//! Default values used across crates to avoid magic number duplication.

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Directory name under the platform config dir holding the config file.
pub const CONFIG_DIR_NAME: &str = "kibana-publisher";

/// File name of the JSON configuration file.
pub const CONFIG_FILE_NAME: &str = "config.json";
