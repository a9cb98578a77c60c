//! Client credential check handler.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::post,
};
use serde::Deserialize;

use crate::error::AppError;
use crate::services::{ClientCredentials, verify_client_credentials};
use crate::state::AppState;

/// Build the client router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/client/verify-credentials", post(verify_credentials))
}

/// Body of `POST /api/client/verify-credentials`.
#[derive(Debug, Deserialize)]
pub struct VerifyCredentialsRequest {
    pub email: String,
    pub password: String,
}

/// Best-effort credential check.
///
/// Always 200 on a well-formed body: the response is the credential record,
/// or JSON `null` when sign-in is refused. Wrong credentials are not an
/// error condition here.
///
/// # Errors
///
/// 400 only for a malformed body.
pub async fn verify_credentials(
    State(state): State<AppState>,
    body: Result<Json<VerifyCredentialsRequest>, JsonRejection>,
) -> Result<Json<Option<ClientCredentials>>, AppError> {
    let Json(request) = body.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let result =
        verify_client_credentials(state.backend(), &request.email, &request.password).await;

    Ok(Json(result))
}
