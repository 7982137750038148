//! Response types for the shift pay API.
//!
//! This module defines the success bodies that are not plain domain models,
//! the error response structures and the mapping from [`PayError`].

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculation::HourSegment;
use crate::error::PayError;
use crate::models::{PayBreakdown, PayTotals};

/// Response body for the `/shift-pay` endpoint.
///
/// The breakdown fields sit at the top level; `segments` lists the clock-hour
/// slices the breakdown was computed from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftPayResponse {
    /// Hours and pay for the shift.
    #[serde(flatten)]
    pub breakdown: PayBreakdown,
    /// The clock-hour segments of the shift.
    pub segments: Vec<HourSegment>,
}

/// Response body for the `/schedules/day` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleDayResponse {
    /// The day that was totalled.
    pub date: NaiveDate,
    /// Sums over the work entries scheduled on `date`.
    pub totals: PayTotals,
}

/// Response body for the `/health` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` when the service answers.
    pub status: String,
    /// The crate version.
    pub version: String,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response carrying `error`.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<PayError> for ApiErrorResponse {
    fn from(error: PayError) -> Self {
        let message = error.to_string();
        match error {
            PayError::InvalidInterval { .. } => {
                ApiErrorResponse::bad_request(ApiError::with_details(
                    "INVALID_INTERVAL",
                    message,
                    "Overnight shifts must carry an end on the following day",
                ))
            }
            PayError::ShiftTooLong { .. } => {
                ApiErrorResponse::bad_request(ApiError::new("SHIFT_TOO_LONG", message))
            }
            PayError::InvalidTimeCard { .. } => {
                ApiErrorResponse::bad_request(ApiError::new("INVALID_TIME_CARD", message))
            }
            PayError::InvalidDateRange { .. } => {
                ApiErrorResponse::bad_request(ApiError::new("INVALID_DATE_RANGE", message))
            }
            PayError::BatchTooLarge { .. } => {
                ApiErrorResponse::bad_request(ApiError::new("BATCH_TOO_LARGE", message))
            }
            PayError::ConfigNotFound { .. } | PayError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
                }
            }
        }
    }
}
