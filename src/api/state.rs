//! Application state for the shift pay API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::AppConfig;

/// Shared application state.
///
/// Holds the immutable application configuration; cloning is a reference
/// count increment.
#[derive(Clone)]
pub struct AppState {
    config: Arc<AppConfig>,
}

impl AppState {
    /// Creates a new application state with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Maximum number of records accepted in one request.
    pub fn max_batch_size(&self) -> usize {
        self.config.api.max_batch_size
    }

    /// Longest single shift accepted, in hours.
    pub fn max_shift_hours(&self) -> u32 {
        self.config.api.max_shift_hours
    }

    /// Longest dashboard history served, in months.
    pub fn max_history_months(&self) -> u32 {
        self.config.api.max_history_months
    }
}
