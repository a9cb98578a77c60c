//! Admin user management handlers.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::{get, post},
};

use crate::error::AppError;
use crate::middleware::auth::{BearerToken, require_admin};
use crate::models::{CreateUserRequest, CreateUserResponse, UserProfile};
use crate::services;
use crate::state::AppState;

/// Build the admin users router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/admin/create-user", post(create_user))
        .route("/api/admin/list-users", get(list_users))
}

/// Provision an account and its profile row.
///
/// The body is parsed and validated before the first provider call, so a
/// mistyped field costs nothing; the admin gate runs next, and only then
/// the two provisioning calls.
///
/// # Errors
///
/// 400 for a malformed or invalid body, 401 for a missing or rejected
/// token, 403 for a non-admin caller, 500 with the provider's message if
/// either provisioning call fails.
pub async fn create_user(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    body: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<Json<CreateUserResponse>, AppError> {
    let Json(request) = body.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let account = request.validate()?;

    let caller = require_admin(&state, &token).await?;
    tracing::info!(admin_id = %caller.id, email = %account.email, "admin creating account");

    let id = services::accounts::provision_user(state.backend(), account).await?;

    Ok(Json(CreateUserResponse { ok: true, id }))
}

/// List all profile rows, newest first.
///
/// # Errors
///
/// 401 for a missing or rejected token, 403 for a non-admin caller, 500 if
/// the provider query fails.
pub async fn list_users(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
) -> Result<Json<Vec<UserProfile>>, AppError> {
    require_admin(&state, &token).await?;

    let users = state.backend().list_profiles().await?;
    Ok(Json(users))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::routes::test_support::test_app;

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_create_user_without_token_is_401() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/admin/create-user")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        json!({
                            "email": "a@b.com",
                            "password": "x",
                            "prenom": "A",
                            "nom": "B",
                            "role": "client"
                        })
                        .to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(response).await;
        assert!(body["error"].as_str().unwrap().contains("Authorization"));
    }

    #[tokio::test]
    async fn test_list_users_without_token_is_401() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/admin/list-users")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_non_string_field_is_400_before_any_backend_call() {
        // The test backend is unreachable, so anything but a local
        // rejection would surface as a 500.
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/admin/create-user")
                    .header(header::AUTHORIZATION, "Bearer some-token")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        json!({
                            "email": "a@b.com",
                            "password": "x",
                            "prenom": "A",
                            "nom": "B",
                            "role": 123
                        })
                        .to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_missing_required_field_is_400() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/admin/create-user")
                    .header(header::AUTHORIZATION, "Bearer some-token")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        json!({
                            "email": "a@b.com",
                            "password": "x",
                            "prenom": "A",
                            "role": "client"
                        })
                        .to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_invalid_field_value_is_400() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/admin/create-user")
                    .header(header::AUTHORIZATION, "Bearer some-token")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        json!({
                            "email": "not-an-email",
                            "password": "x",
                            "prenom": "A",
                            "nom": "B",
                            "role": "client"
                        })
                        .to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert!(body["error"].as_str().unwrap().contains("email"));
    }

    #[tokio::test]
    async fn test_wrong_method_is_405_with_json_body() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/api/admin/create-user")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Method not allowed");
    }

    #[tokio::test]
    async fn test_preflight_is_200_with_cors_headers_and_no_backend_call() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/api/admin/list-users")
                    .header(header::ORIGIN, "https://lecompasolfactif.fr")
                    .header("Access-Control-Request-Method", "GET")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get("access-control-allow-origin")
                .unwrap(),
            "*"
        );

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(bytes.is_empty());
    }
}
