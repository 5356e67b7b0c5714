//! API error types and responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::paypal::PayPalError;

/// API error type.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),

    /// External service error.
    #[error("external service error: {0}")]
    ExternalService(String),

    /// The request did not finish within the configured timeout.
    #[error("request timed out")]
    Timeout,
}

/// JSON error response body.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            Self::Internal(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
            Self::ExternalService(msg) => {
                tracing::error!(error = %msg, "Payment provider request failed");
                (
                    StatusCode::BAD_GATEWAY,
                    "external_service_error",
                    msg.clone(),
                )
            }
            Self::Timeout => {
                tracing::warn!("Request timed out");
                (
                    StatusCode::GATEWAY_TIMEOUT,
                    "timeout",
                    "The request timed out".to_string(),
                )
            }
        };

        let body = ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<PayPalError> for ApiError {
    fn from(err: PayPalError) -> Self {
        match err {
            PayPalError::Configuration(msg) => Self::Internal(msg),
            PayPalError::Api {
                status,
                name,
                message,
                debug_id,
            } => Self::ExternalService(match debug_id {
                Some(debug_id) => format!("PayPal {status} {name}: {message} (debug_id {debug_id})"),
                None => format!("PayPal {status} {name}: {message}"),
            }),
            other => Self::ExternalService(other.to_string()),
        }
    }
}
