//! Response types for the Reimbursement Engine API.
//!
//! This module defines the success and error response structures for the
//! HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{DailyEntry, daily_breakdown};
use crate::error::EngineError;
use crate::models::CalculationResult;

/// Response body for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResponse {
    /// The calculation result.
    pub result: CalculationResult,
    /// "Month year" label of the period.
    pub period_label: String,
    /// Number of in-month leave dates that were not applied.
    pub ignored_leave_count: usize,
    /// One entry per calendar day.
    pub days: Vec<DailyEntry>,
}

impl From<CalculationResult> for CalculationResponse {
    fn from(result: CalculationResult) -> Self {
        Self {
            period_label: result.period_label(),
            ignored_leave_count: result.ignored_leave_count(),
            days: daily_breakdown(&result),
            result,
        }
    }
}

/// One row of the `/grades` listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeEntry {
    /// The grade code.
    pub grade: String,
    /// Daily rate for the grade.
    pub daily_rate: Decimal,
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

    /// Creates an invalid period error response.
    pub fn invalid_period(year: i32, month: u32) -> Self {
        Self::with_details(
            "INVALID_PERIOD",
            format!("Invalid period: year {}, month {}", year, month),
            "Month must be between 1 and 12 and the year must be a representable calendar year",
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::InvalidPeriod { year, month } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::invalid_period(year, month),
            },
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details(
                        "CONFIG_ERROR",
                        "Configuration error",
                        error.to_string(),
                    ),
                }
            }
            EngineError::CacheNotFound { .. }
            | EngineError::CacheParseError { .. }
            | EngineError::CacheRejected { .. }
            | EngineError::CacheWriteError { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "HOLIDAY_SOURCE_ERROR",
                    "Holiday data unavailable",
                    error.to_string(),
                ),
            },
        }
    }
}
