//! Response types for the tool rental API.
//!
//! This module defines the error response structures and the mapping from
//! [`RentalError`] to HTTP status codes.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::RentalError;

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
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A `400 Bad Request` with the given body.
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

impl From<RentalError> for ApiErrorResponse {
    fn from(error: RentalError) -> Self {
        let message = error.to_string();
        match error {
            RentalError::InvalidToolCode { .. } => {
                Self::bad_request(ApiError::new("INVALID_TOOL_CODE", message))
            }
            RentalError::InvalidCheckoutDate { .. } => Self::bad_request(ApiError::with_details(
                "INVALID_CHECKOUT_DATE",
                message,
                "Dates are written M/D/YY or M/D/YYYY",
            )),
            RentalError::InvalidRentalDuration { .. } => {
                Self::bad_request(ApiError::new("INVALID_RENTAL_DURATION", message))
            }
            RentalError::InvalidDiscount { .. } => {
                Self::bad_request(ApiError::new("INVALID_DISCOUNT", message))
            }
            RentalError::ConfigNotFound { .. } | RentalError::ConfigParseError { .. } => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            },
            RentalError::OutputError { .. } => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("OUTPUT_ERROR", "Output failed", message),
            },
        }
    }
}
