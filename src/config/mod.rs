//! Configuration loading and management for the shift pay service.
//!
//! This module provides functionality to load the server, logging and API
//! limit settings from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use shift_pay::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/shift-pay.yaml").unwrap();
//! println!("Batch limit: {}", config.config().api.max_batch_size);
//! ```

mod loader;
mod types;

pub use loader::{CONFIG_PATH_ENV, ConfigLoader, DEFAULT_CONFIG_PATH};
pub use types::{ApiConfig, AppConfig, LogFormat, LoggingConfig, ServerConfig};
