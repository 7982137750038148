//! Error types for the shift pay engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while computing shift pay.

use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

/// The main error type for the shift pay engine.
///
/// All fallible operations in the crate return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use shift_pay::error::PayError;
///
/// let error = PayError::ConfigNotFound {
///     path: "/missing/shift-pay.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/shift-pay.yaml");
/// ```
#[derive(Debug, Error)]
pub enum PayError {
    /// A shift interval did not satisfy `end > start`.
    #[error("Invalid interval: end {end} is not after start {start}")]
    InvalidInterval {
        /// The start of the rejected interval.
        start: NaiveDateTime,
        /// The end of the rejected interval.
        end: NaiveDateTime,
    },

    /// A time card operation was not valid for the card's current state.
    #[error("Invalid time card '{id}': {message}")]
    InvalidTimeCard {
        /// The ID of the time card.
        id: String,
        /// A description of what made the operation invalid.
        message: String,
    },

    /// A reporting date range ended before it started.
    #[error("Invalid date range: {end} is before {start}")]
    InvalidDateRange {
        /// The first day of the range.
        start: NaiveDate,
        /// The last day of the range.
        end: NaiveDate,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A shift spanned more hours than the configured limit.
    #[error("Shift from {start} to {end} exceeds the limit of {limit_hours} hours")]
    ShiftTooLong {
        /// The start of the rejected shift.
        start: NaiveDateTime,
        /// The end of the rejected shift.
        end: NaiveDateTime,
        /// The configured maximum length in hours.
        limit_hours: u32,
    },

    /// A request carried more records than the configured limit.
    #[error("Batch of {count} records exceeds the limit of {limit}")]
    BatchTooLarge {
        /// The number of records submitted.
        count: usize,
        /// The configured maximum.
        limit: usize,
    },
}

/// A type alias for Results that return PayError.
pub type PayResult<T> = Result<T, PayError>;
