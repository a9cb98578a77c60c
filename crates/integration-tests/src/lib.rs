//! Integration tests for Le Compas Olfactif.
//!
//! # Running Tests
//!
//! ```bash
//! # Point the service at a test project of the hosted provider, then:
//! cargo run -p compas-olfactif-api &
//!
//! # Run integration tests
//! cargo test -p compas-olfactif-integration-tests -- --ignored
//! ```
//!
//! # Environment
//!
//! - `API_BASE_URL` - Base URL of the running service
//!   (default: `http://localhost:3001`)
//! - `TEST_ADMIN_TOKEN` - Bearer token of an identity whose profile row
//!   has `role = "admin"`
//! - `TEST_CLIENT_TOKEN` - Bearer token of an identity whose profile row
//!   has `role = "client"` (for 403 checks)
//! - `TEST_CLIENT_EMAIL` / `TEST_CLIENT_PASSWORD` - Credentials of an
//!   existing client account (for the credential-check tests)
//!
//! # Test Categories
//!
//! - `admin_users` - Admin gate and user management flows
//! - `client_credentials` - Best-effort credential check
//! - `catalog` - Read-only catalog endpoints

/// Base URL for the API (configurable via environment).
#[must_use]
pub fn api_base_url() -> String {
    std::env::var("API_BASE_URL").unwrap_or_else(|_| "http://localhost:3001".to_string())
}

/// Read a required test credential from the environment.
///
/// # Panics
///
/// Panics with a pointer to the variable name when unset, so an ignored
/// test run fails with a clear message instead of a confusing 401.
#[must_use]
pub fn require_env(key: &str) -> String {
    std::env::var(key)
        .unwrap_or_else(|_| panic!("{key} must be set to run the ignored integration tests"))
}
