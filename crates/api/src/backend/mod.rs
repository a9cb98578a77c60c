//! Hosted auth/row-store provider client (HIGH PRIVILEGE).
//!
//! # Security
//!
//! **This module holds the provider's service-role key.**
//!
//! The service-role key bypasses row-level access checks on the `users`
//! table. It is only ever used for:
//! - the role lookup behind the admin gate
//! - privileged account creation
//! - profile-row updates and listings after the gate has passed
//!
//! Everything else (token verification, sign-in, the credential check's
//! profile fetch) runs under the public anon key or the caller's own token.
//!
//! # Architecture
//!
//! - One [`BackendClient`] per process, cheaply cloneable via `Arc`
//! - Two facets of the same provider: the auth endpoints (`/auth/v1/...`)
//!   and the row endpoints (`/rest/v1/...`)
//! - No retries, no caching: each method is one HTTP call
//!
//! # Example
//!
//! ```rust,ignore
//! use compas_olfactif_api::backend::BackendClient;
//!
//! let client = BackendClient::new(&config.backend);
//!
//! // Verify a caller's bearer token
//! let user = client.verify_token(token).await?;
//!
//! // Look up the caller's role
//! let role = client.fetch_role(user.id).await?;
//! ```

mod client;
pub mod types;

pub use client::BackendClient;
pub use types::*;

use thiserror::Error;

/// Errors that can occur when talking to the hosted provider.
#[derive(Debug, Error)]
pub enum BackendError {
    /// HTTP request failed (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The provider rejected the presented token.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Sign-in refused (wrong email or password).
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Row or resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Any other non-success response from the provider.
    #[error("{message}")]
    Service {
        /// HTTP status returned by the provider.
        status: u16,
        /// Message extracted from the provider's error body.
        message: String,
    },
}

/// Extract a human-readable message from a provider error body.
///
/// The auth facet answers with `{"msg": ...}` or `{"error_description": ...}`,
/// the row facet with `{"message": ...}`; plain-text bodies pass through
/// unchanged and an empty body falls back to the status code.
#[must_use]
pub fn extract_error_message(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["msg", "message", "error_description", "error"] {
            if let Some(text) = value.get(key).and_then(serde_json::Value::as_str) {
                return text.to_string();
            }
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("provider returned status {status}")
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_error_display() {
        let err = BackendError::NotFound("profile row".to_string());
        assert_eq!(err.to_string(), "Not found: profile row");

        let err = BackendError::Service {
            status: 422,
            message: "email already registered".to_string(),
        };
        assert_eq!(err.to_string(), "email already registered");
    }

    #[test]
    fn test_extract_error_message_auth_shape() {
        let msg = extract_error_message(422, r#"{"msg":"User already registered"}"#);
        assert_eq!(msg, "User already registered");
    }

    #[test]
    fn test_extract_error_message_rest_shape() {
        let msg = extract_error_message(
            409,
            r#"{"code":"23505","message":"duplicate key value"}"#,
        );
        assert_eq!(msg, "duplicate key value");
    }

    #[test]
    fn test_extract_error_message_grant_shape() {
        let msg = extract_error_message(
            400,
            r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#,
        );
        // error_description is checked before the bare error code
        assert_eq!(msg, "Invalid login credentials");
    }

    #[test]
    fn test_extract_error_message_plain_text() {
        let msg = extract_error_message(502, "upstream unavailable");
        assert_eq!(msg, "upstream unavailable");
    }

    #[test]
    fn test_extract_error_message_empty_body() {
        let msg = extract_error_message(500, "");
        assert_eq!(msg, "provider returned status 500");
    }
}
