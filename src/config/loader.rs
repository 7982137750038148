//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the
//! application configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{PayError, PayResult};

use super::types::AppConfig;

/// Default location of the configuration file, relative to the working
/// directory.
pub const DEFAULT_CONFIG_PATH: &str = "./config/shift-pay.yaml";

/// Environment variable overriding [`DEFAULT_CONFIG_PATH`].
pub const CONFIG_PATH_ENV: &str = "SHIFT_PAY_CONFIG";

/// Loads and provides access to the application configuration.
///
/// # File Format
///
/// ```text
/// server:
///   host: 0.0.0.0
///   port: 8080
/// logging:
///   level: info
///   format: pretty   # or json
/// api:
///   max_batch_size: 1000
///   max_shift_hours: 72
///   max_history_months: 24
/// ```
///
/// Any section or field may be omitted and falls back to its default.
///
/// # Example
///
/// ```no_run
/// use shift_pay::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/shift-pay.yaml").unwrap();
/// println!("Listening on {}", loader.config().server.bind_address());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file does not exist or cannot be read
    /// - The file contains invalid YAML or mistyped fields
    pub fn load<P: AsRef<Path>>(path: P) -> PayResult<Self> {
        let config = Self::load_yaml::<AppConfig>(path.as_ref())?;
        Ok(Self { config })
    }

    /// Loads configuration from the specified file, using defaults if it
    /// does not exist.
    ///
    /// A file that exists but fails to parse is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> PayResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::from_config(AppConfig::default()));
        }
        Self::load(path)
    }

    /// Wraps an already built configuration.
    pub fn from_config(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> AppConfig {
        self.config
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> PayResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| PayError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}
