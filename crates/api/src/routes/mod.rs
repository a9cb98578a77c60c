//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                          - Liveness check
//! GET  /health/ready                    - Readiness check (pings the provider)
//!
//! # Admin (bearer token + admin role)
//! POST /api/admin/create-user           - Provision an account + profile row
//! GET  /api/admin/list-users            - All profile rows, newest first
//!
//! # Client
//! POST /api/client/verify-credentials   - Best-effort credential check
//!
//! # Catalog (public, read-only)
//! GET  /api/products                    - All catalog products
//! GET  /api/products/{slug}             - One product by slug
//! ```

use axum::Router;
use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::error;
use crate::state::AppState;

pub mod admin_users;
pub mod catalog;
pub mod client;

/// Build the API router.
///
/// Wrong-method requests on known paths get the JSON 405 fallback so every
/// error this API emits has an `{"error": ...}` body.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(admin_users::router())
        .merge(client::router())
        .merge(catalog::router())
        .method_not_allowed_fallback(error::method_not_allowed)
}

/// Build the CORS layer from the configured origin.
///
/// `None` or `"*"` is permissive; any other value restricts to that exact
/// origin. An origin that is not a valid header value falls back to
/// permissive with a warning rather than refusing to start.
#[must_use]
pub fn cors_layer(allowed_origin: Option<&str>) -> CorsLayer {
    let origin = match allowed_origin {
        None | Some("*") => AllowOrigin::any(),
        Some(value) => match value.parse::<HeaderValue>() {
            Ok(header_value) => AllowOrigin::exact(header_value),
            Err(_) => {
                tracing::warn!(origin = value, "ALLOWED_ORIGIN is not a valid origin, allowing any");
                AllowOrigin::any()
            }
        },
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod test_support {
    //! Shared helpers for in-process router tests.
    //!
    //! The backend URL points at a port nothing listens on, so any test
    //! that unexpectedly reaches the provider fails loudly with a 500
    //! instead of silently passing.

    use std::path::PathBuf;

    use secrecy::SecretString;

    use crate::catalog::CatalogStore;
    use crate::config::{ApiConfig, BackendConfig};
    use crate::state::AppState;

    pub fn test_state() -> AppState {
        test_state_with_catalog("[]")
    }

    pub fn test_state_with_catalog(catalog_json: &str) -> AppState {
        let config = ApiConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 0,
            allowed_origin: None,
            catalog_path: PathBuf::from("unused"),
            backend: BackendConfig {
                url: "http://127.0.0.1:9".to_string(),
                anon_key: SecretString::from("test-anon-key"),
                service_role_key: SecretString::from("test-service-key"),
            },
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 1.0,
        };

        AppState::new(config, CatalogStore::from_json(catalog_json).unwrap())
    }

    pub fn test_app() -> axum::Router {
        super::routes()
            .layer(super::cors_layer(None))
            .with_state(test_state())
    }
}
