//! Response types for the Payslip Engine API.
//!
//! This module defines the error response structures, the email delivery
//! response body, and the mapping from engine errors to HTTP statuses.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::delivery::DeliveryOutcome;
use crate::error::EngineError;

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
    /// Creates a `400 Bad Request` error response.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(self.error),
        )
            .into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidRecord { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_RECORD",
                    message,
                    "The compensation record contains invalid amounts or categories",
                ),
            },
            EngineError::RenderError { .. } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "RENDER_ERROR",
                    message,
                    "A salary slip needs at least one earnings category",
                ),
            },
            EngineError::PeriodMismatch { .. } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::with_details(
                    "PERIOD_MISMATCH",
                    message,
                    "Every record in a bank advice batch must share the batch period",
                ),
            },
            EngineError::AdviceTotalOverflow { .. } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::new("ADVICE_TOTAL_OVERFLOW", message),
            },
            EngineError::DuplicateEmployee { .. } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::with_details(
                    "DUPLICATE_EMPLOYEE",
                    message,
                    "Each employee may appear at most once per bank advice batch",
                ),
            },
            EngineError::InvalidAddress { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("INVALID_ADDRESS", message),
            },
        }
    }
}

/// Response body for `POST /payslips/email`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailResponse {
    /// `"queued"` or `"transport_failed"`.
    pub status: String,
    /// The recipient address.
    pub address: String,
    /// The transport's message ID, present when queued.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    /// The transport's failure reason, present when delivery failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl EmailResponse {
    /// Builds the response body and status for an email delivery outcome.
    ///
    /// Returns `None` for `Delivered`, which an email channel never yields.
    pub fn from_outcome(outcome: DeliveryOutcome) -> Option<(StatusCode, Self)> {
        match outcome {
            DeliveryOutcome::Queued {
                address,
                message_id,
            } => Some((
                StatusCode::ACCEPTED,
                Self {
                    status: "queued".to_string(),
                    address,
                    message_id: Some(message_id),
                    reason: None,
                },
            )),
            DeliveryOutcome::TransportFailed { address, reason } => Some((
                StatusCode::BAD_GATEWAY,
                Self {
                    status: "transport_failed".to_string(),
                    address,
                    message_id: None,
                    reason: Some(reason.to_string()),
                },
            )),
            DeliveryOutcome::Delivered(_) => None,
        }
    }
}
