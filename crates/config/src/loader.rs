//! Configuration loader for the Kibana publisher.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for hierarchical configuration merging.
//! - Read environment variables and the JSON config file.
//! - Build and validate the final `Config`.
//!
//! Invariants / Assumptions:
//! - Explicit `with_*` setters take precedence over environment variables.
//! - Environment variables take precedence over config file values
//!   (`from_env` overwrites, `from_file` only fills unset fields).
//! - Empty or whitespace-only environment variables are treated as unset.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use secrecy::{ExposeSecret, SecretString};
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_TIMEOUT_SECS, MAX_TIMEOUT_SECS,
};
use crate::error::ConfigError;
use crate::types::{AuthConfig, Config, ConnectionConfig};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Configuration loader that builds config from environment variables and
/// an optional JSON config file.
#[derive(Default)]
pub struct ConfigLoader {
    endpoint: Option<String>,
    api_key: Option<SecretString>,
    skip_verify: Option<bool>,
    timeout: Option<Duration>,
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from a `.env` file if present.
    ///
    /// Missing `.env` files are silently ignored. Error messages never
    /// include raw `.env` line contents.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Set the Kibana endpoint URL.
    pub fn with_endpoint(mut self, endpoint: String) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Set the API key.
    pub fn with_api_key(mut self, api_key: SecretString) -> Self {
        self.api_key = Some(api_key);
        self
    }

    /// Set whether to skip TLS certificate verification.
    pub fn with_skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = Some(skip);
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the config file path.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// The currently configured config file path, if any.
    pub fn config_path(&self) -> Option<&PathBuf> {
        self.config_path.as_ref()
    }

    /// Apply environment variable configuration.
    ///
    /// Environment variables overwrite previously loaded file values but are
    /// themselves overwritten by later `with_*` calls.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        if let Some(endpoint) = env_var_or_none("KIBANA_ENDPOINT") {
            self.endpoint = Some(endpoint);
        }
        if let Some(key) = env_var_or_none("KIBANA_API_KEY") {
            self.api_key = Some(SecretString::new(key.into()));
        }
        if let Some(skip) = env_var_or_none("KIBANA_SKIP_VERIFY") {
            self.skip_verify = Some(skip.parse().map_err(|_| ConfigError::InvalidValue {
                var: "KIBANA_SKIP_VERIFY".to_string(),
                message: "must be true or false".to_string(),
            })?);
        }
        if let Some(timeout) = env_var_or_none("KIBANA_TIMEOUT") {
            let secs: u64 = timeout.parse().map_err(|_| ConfigError::InvalidValue {
                var: "KIBANA_TIMEOUT".to_string(),
                message: "must be a number".to_string(),
            })?;
            self.timeout = Some(Duration::from_secs(secs));
        }
        if self.config_path.is_none() {
            if let Some(path) = env_var_or_none("KIBANA_CONFIG_PATH") {
                self.config_path = Some(PathBuf::from(path));
            }
        }
        Ok(self)
    }

    /// Resolve the config file path: explicit override, else the platform
    /// config directory (`<config-dir>/kibana-publisher/config.json`).
    fn resolve_config_path(&self) -> Option<PathBuf> {
        if let Some(path) = &self.config_path {
            return Some(path.clone());
        }
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Read configuration from the JSON config file, filling only fields
    /// that are not already set.
    ///
    /// A missing file at the default location is not an error; a missing
    /// file at an explicitly configured path is.
    pub fn from_file(mut self) -> Result<Self, ConfigError> {
        let Some(path) = self.resolve_config_path() else {
            return Ok(self);
        };

        if !path.exists() {
            if self.config_path.is_some() {
                return Err(ConfigError::ConfigFileRead { path });
            }
            return Ok(self);
        }

        let contents = std::fs::read_to_string(&path)
            .map_err(|_| ConfigError::ConfigFileRead { path: path.clone() })?;
        let file_config: Config = serde_json::from_str(&contents)
            .map_err(|_| ConfigError::ConfigFileParse { path: path.clone() })?;

        tracing::debug!(path = %path.display(), "Loaded config file");

        if self.endpoint.is_none() {
            self.endpoint = Some(file_config.connection.endpoint);
        }
        if self.api_key.is_none() {
            self.api_key = Some(file_config.auth.api_key);
        }
        if self.skip_verify.is_none() {
            self.skip_verify = Some(file_config.connection.skip_verify);
        }
        if self.timeout.is_none() {
            self.timeout = Some(file_config.connection.timeout);
        }
        Ok(self)
    }

    /// Validate an endpoint URL: absolute, http or https.
    fn validate_endpoint(endpoint: &str) -> Result<(), ConfigError> {
        let parsed = url::Url::parse(endpoint).map_err(|e| ConfigError::InvalidEndpoint {
            url: endpoint.to_string(),
            message: e.to_string(),
        })?;
        match parsed.scheme() {
            "http" | "https" => Ok(()),
            other => Err(ConfigError::InvalidEndpoint {
                url: endpoint.to_string(),
                message: format!("unsupported scheme '{}', expected http or https", other),
            }),
        }
    }

    /// Build the final `Config`, applying defaults and validating.
    ///
    /// # Errors
    ///
    /// Returns `MissingEndpoint`/`MissingApiKey` when required values were
    /// not supplied by any source, `InvalidEndpoint` for a malformed URL,
    /// and `InvalidTimeout` for an out-of-range timeout.
    pub fn build(self) -> Result<Config, ConfigError> {
        let endpoint = self.endpoint.ok_or(ConfigError::MissingEndpoint)?;
        Self::validate_endpoint(&endpoint)?;

        let api_key = self.api_key.ok_or(ConfigError::MissingApiKey)?;
        if api_key.expose_secret().trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }

        let timeout = self
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        let secs = timeout.as_secs();
        if secs == 0 || secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::InvalidTimeout {
                message: format!("must be between 1 and {} seconds (got {})", MAX_TIMEOUT_SECS, secs),
            });
        }

        Ok(Config {
            connection: ConnectionConfig {
                endpoint,
                skip_verify: self.skip_verify.unwrap_or(false),
                timeout,
            },
            auth: AuthConfig { api_key },
        })
    }
}
