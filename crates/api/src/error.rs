//! Unified error handling for the service.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::backend::BackendError;

/// Application-level error type.
///
/// Every error crossing the handler boundary becomes a JSON
/// `{"error": message}` response with the status of its class.
#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or invalid bearer token.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Authenticated but not an admin.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Malformed request body or invalid field.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A call to the hosted provider failed.
    #[error("{0}")]
    Backend(#[from] BackendError),
}

/// Wire shape of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl AppError {
    /// HTTP status for this error class.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Backend(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture provider failures; auth and validation rejections are
        // normal traffic and only traced.
        if matches!(self, Self::Backend(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Backend request error"
            );
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }

        let status = self.status();
        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// JSON `{"error": ...}` response for wrong-method requests.
///
/// Axum's default method-mismatch response has an empty body; the API
/// contract is JSON everywhere, so the router installs this as its
/// method-not-allowed fallback.
pub async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorBody {
            error: "Method not allowed".to_string(),
        }),
    )
        .into_response()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("boussole-ambree".to_string());
        assert_eq!(err.to_string(), "Not found: boussole-ambree");

        let err = AppError::BadRequest("invalid email".to_string());
        assert_eq!(err.to_string(), "Bad request: invalid email");
    }

    #[test]
    fn test_app_error_status_codes() {
        assert_eq!(
            AppError::Unauthorized("test".to_string()).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::Forbidden("test".to_string()).status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AppError::BadRequest("test".to_string()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::NotFound("test".to_string()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Backend(BackendError::Service {
                status: 500,
                message: "boom".to_string(),
            })
            .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_body_shape() {
        let body = ErrorBody {
            error: "Forbidden: admin role required".to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["error"], "Forbidden: admin role required");
    }

    #[test]
    fn test_backend_message_is_surfaced() {
        // Provider failures keep the provider's message, as the original
        // handlers returned it verbatim on 500.
        let err = AppError::Backend(BackendError::Service {
            status: 422,
            message: "A user with this email address has already been registered".to_string(),
        });
        assert!(err.to_string().contains("already been registered"));
    }
}
