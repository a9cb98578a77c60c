//! Bearer-token extraction and the admin gate.
//!
//! Extraction and verification are split on purpose: [`BearerToken`] only
//! reads the `Authorization` header (no I/O), so handlers can validate the
//! request body before the first provider call, and [`require_admin`] runs
//! the two-step gate (verify token, compare role) when the handler is ready
//! to pay for it.

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use compas_olfactif_core::Role;

use crate::backend::{AuthUser, BackendError};
use crate::error::AppError;
use crate::state::AppState;

/// Extractor for the bearer token of the `Authorization` header.
///
/// Rejects with 401 `{"error": ...}` when the header is missing, not UTF-8,
/// or not of the `Bearer <token>` form. The token is not verified here.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(
///     State(state): State<AppState>,
///     BearerToken(token): BearerToken,
/// ) -> Result<Json<Value>, AppError> {
///     let caller = require_admin(&state, &token).await?;
///     // ...
/// }
/// ```
#[derive(Debug)]
pub struct BearerToken(pub String);

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header_value = parts
            .headers
            .get(header::AUTHORIZATION)
            .ok_or_else(|| AppError::Unauthorized("missing Authorization header".to_string()))?;

        let header_str = header_value
            .to_str()
            .map_err(|_| AppError::Unauthorized("malformed Authorization header".to_string()))?;

        let token = header_str
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                AppError::Unauthorized("Authorization header must be 'Bearer <token>'".to_string())
            })?;

        Ok(Self(token.to_string()))
    }
}

/// Verify a bearer token and require the caller's profile role to be admin.
///
/// Two sequential provider calls: token verification (the caller's own
/// token), then the role lookup (service-role key). A missing profile row
/// is treated as non-admin, not as an error - the row may not exist yet for
/// a freshly provisioned identity.
///
/// # Errors
///
/// - `AppError::Unauthorized` if the provider rejects the token
/// - `AppError::Forbidden` if the role is anything but `admin`
/// - `AppError::Backend` on transport or provider failures
pub async fn require_admin(state: &AppState, token: &str) -> Result<AuthUser, AppError> {
    let caller = match state.backend().verify_token(token).await {
        Ok(user) => user,
        Err(BackendError::Unauthorized(message)) => {
            return Err(AppError::Unauthorized(message));
        }
        Err(other) => return Err(AppError::Backend(other)),
    };

    let role = state.backend().fetch_role(caller.id).await?;
    let is_admin = role
        .as_deref()
        .is_some_and(|r| r == Role::Admin.as_str());

    if !is_admin {
        tracing::debug!(user_id = %caller.id, role = role.as_deref(), "admin gate refused caller");
        return Err(AppError::Forbidden("admin role required".to_string()));
    }

    Ok(caller)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(request: Request<()>) -> Result<BearerToken, AppError> {
        let (mut parts, ()) = request.into_parts();
        BearerToken::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn test_missing_header() {
        let request = Request::builder().uri("/api/admin/list-users").body(()).unwrap();
        let err = extract(request).await.unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn test_wrong_scheme() {
        let request = Request::builder()
            .header("Authorization", "Basic dXNlcjpwYXNz")
            .body(())
            .unwrap();
        let err = extract(request).await.unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn test_empty_token() {
        let request = Request::builder()
            .header("Authorization", "Bearer ")
            .body(())
            .unwrap();
        let err = extract(request).await.unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn test_valid_bearer() {
        let request = Request::builder()
            .header("Authorization", "Bearer abc.def.ghi")
            .body(())
            .unwrap();
        let BearerToken(token) = extract(request).await.unwrap();
        assert_eq!(token, "abc.def.ghi");
    }
}
