//! HTTP client for the hosted provider's auth and row facets.

use std::sync::Arc;

use secrecy::ExposeSecret;
use serde_json::json;
use tracing::instrument;

use compas_olfactif_core::UserId;

use crate::config::BackendConfig;
use crate::models::UserProfile;

use super::{
    BackendError, extract_error_message,
    types::{AuthUser, CreatedUser, ProfileUpdate, RoleRow, SignInSession},
};

/// Name of the provider's api-key header.
const APIKEY_HEADER: &str = "apikey";

/// Client for the hosted auth/row-store provider.
///
/// Cheaply cloneable via `Arc`; one instance is shared across all handlers
/// for the lifetime of the process. Each method performs exactly one HTTP
/// call with no retry and no caching.
#[derive(Clone)]
pub struct BackendClient {
    inner: Arc<BackendClientInner>,
}

struct BackendClientInner {
    client: reqwest::Client,
    base_url: String,
    anon_key: String,
    service_role_key: String,
}

impl BackendClient {
    /// Create a new provider client.
    #[must_use]
    pub fn new(config: &BackendConfig) -> Self {
        Self {
            inner: Arc::new(BackendClientInner {
                client: reqwest::Client::new(),
                base_url: config.url.clone(),
                anon_key: config.anon_key.expose_secret().to_string(),
                service_role_key: config.service_role_key.expose_secret().to_string(),
            }),
        }
    }

    /// The provider base URL this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    // =========================================================================
    // Auth facet
    // =========================================================================

    /// Verify a caller's bearer token and return the identity it belongs to.
    ///
    /// # Errors
    ///
    /// Returns `BackendError::Unauthorized` if the provider rejects the
    /// token, `BackendError::Http`/`Service` on transport or provider
    /// failures.
    #[instrument(skip(self, token))]
    pub async fn verify_token(&self, token: &str) -> Result<AuthUser, BackendError> {
        let response = self
            .inner
            .client
            .get(self.auth_url("user"))
            .header(APIKEY_HEADER, &self.inner.anon_key)
            .bearer_auth(token)
            .send()
            .await?;

        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }

    /// Create a pre-confirmed authentication identity (privileged).
    ///
    /// # Errors
    ///
    /// Returns `BackendError::Service` with the provider's message if the
    /// account cannot be created (e.g. the email is already registered).
    #[instrument(skip(self, password))]
    pub async fn create_auth_user(
        &self,
        email: &str,
        password: &str,
    ) -> Result<CreatedUser, BackendError> {
        let response = self
            .inner
            .client
            .post(self.auth_url("admin/users"))
            .header(APIKEY_HEADER, &self.inner.service_role_key)
            .bearer_auth(&self.inner.service_role_key)
            .json(&json!({
                "email": email,
                "password": password,
                "email_confirm": true,
            }))
            .send()
            .await?;

        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }

    /// Sign in with email and password, returning an ephemeral session.
    ///
    /// Nothing is persisted; callers are expected to [`sign_out`] the
    /// returned session when done.
    ///
    /// [`sign_out`]: Self::sign_out
    ///
    /// # Errors
    ///
    /// Returns `BackendError::InvalidCredentials` when the provider refuses
    /// the email/password pair.
    #[instrument(skip(self, password))]
    pub async fn sign_in(
        &self,
        email: &str,
        password: &str,
    ) -> Result<SignInSession, BackendError> {
        let response = self
            .inner
            .client
            .post(self.auth_url("token"))
            .query(&[("grant_type", "password")])
            .header(APIKEY_HEADER, &self.inner.anon_key)
            .json(&json!({
                "email": email,
                "password": password,
            }))
            .send()
            .await?;

        // The auth facet answers a refused grant with 400
        if response.status() == reqwest::StatusCode::BAD_REQUEST
            || response.status() == reqwest::StatusCode::UNAUTHORIZED
        {
            return Err(BackendError::InvalidCredentials);
        }

        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }

    /// Sign an ephemeral session out.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider call fails; callers treat this as
    /// best-effort.
    #[instrument(skip(self, access_token))]
    pub async fn sign_out(&self, access_token: &str) -> Result<(), BackendError> {
        let response = self
            .inner
            .client
            .post(self.auth_url("logout"))
            .header(APIKEY_HEADER, &self.inner.anon_key)
            .bearer_auth(access_token)
            .send()
            .await?;

        Self::check(response).await?;
        Ok(())
    }

    /// Ping the provider's auth health endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider is unreachable or unhealthy.
    pub async fn health(&self) -> Result<(), BackendError> {
        let response = self
            .inner
            .client
            .get(self.auth_url("health"))
            .header(APIKEY_HEADER, &self.inner.anon_key)
            .send()
            .await?;

        Self::check(response).await?;
        Ok(())
    }

    // =========================================================================
    // Row facet
    // =========================================================================

    /// Fetch the `role` column of one profile row (privileged).
    ///
    /// Returns `None` when the identity has no profile row yet - the
    /// transient state account provisioning itself produces.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or provider failures.
    #[instrument(skip(self))]
    pub async fn fetch_role(&self, user_id: UserId) -> Result<Option<String>, BackendError> {
        let response = self
            .inner
            .client
            .get(self.rest_url("users"))
            .query(&[("id", eq_filter(user_id).as_str()), ("select", "role")])
            .header(APIKEY_HEADER, &self.inner.service_role_key)
            .bearer_auth(&self.inner.service_role_key)
            .send()
            .await?;

        let response = Self::check(response).await?;
        let rows: Vec<RoleRow> = response.json().await?;
        Ok(rows.into_iter().next().and_then(|row| row.role))
    }

    /// Patch a profile row with the given fields (privileged).
    ///
    /// # Errors
    ///
    /// Returns an error with the provider's message if the update fails.
    #[instrument(skip(self, fields))]
    pub async fn update_profile(
        &self,
        user_id: UserId,
        fields: &ProfileUpdate,
    ) -> Result<(), BackendError> {
        let response = self
            .inner
            .client
            .patch(self.rest_url("users"))
            .query(&[("id", eq_filter(user_id).as_str())])
            .header(APIKEY_HEADER, &self.inner.service_role_key)
            .bearer_auth(&self.inner.service_role_key)
            .header("Prefer", "return=minimal")
            .json(fields)
            .send()
            .await?;

        Self::check(response).await?;
        Ok(())
    }

    /// List all profile rows, newest first (privileged).
    ///
    /// # Errors
    ///
    /// Returns an error on transport or provider failures.
    #[instrument(skip(self))]
    pub async fn list_profiles(&self) -> Result<Vec<UserProfile>, BackendError> {
        let response = self
            .inner
            .client
            .get(self.rest_url("users"))
            .query(&[("select", "*"), ("order", "created_at.desc")])
            .header(APIKEY_HEADER, &self.inner.service_role_key)
            .bearer_auth(&self.inner.service_role_key)
            .send()
            .await?;

        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }

    /// Fetch a profile row under the caller's own token.
    ///
    /// Used by the credential check: the row is read with the signed-in
    /// user's access token, so row-level access rules apply. Returns `None`
    /// when no row is visible.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or provider failures.
    #[instrument(skip(self, access_token))]
    pub async fn fetch_profile_with_token(
        &self,
        user_id: UserId,
        access_token: &str,
    ) -> Result<Option<UserProfile>, BackendError> {
        let response = self
            .inner
            .client
            .get(self.rest_url("users"))
            .query(&[("id", eq_filter(user_id).as_str()), ("select", "*")])
            .header(APIKEY_HEADER, &self.inner.anon_key)
            .bearer_auth(access_token)
            .send()
            .await?;

        let response = Self::check(response).await?;
        let rows: Vec<UserProfile> = response.json().await?;
        Ok(rows.into_iter().next())
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{path}", self.inner.base_url)
    }

    fn rest_url(&self, path: &str) -> String {
        format!("{}/rest/v1/{path}", self.inner.base_url)
    }

    /// Map a non-success response to a typed error.
    async fn check(response: reqwest::Response) -> Result<reqwest::Response, BackendError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = extract_error_message(status.as_u16(), &body);

        match status {
            reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => {
                Err(BackendError::Unauthorized(message))
            }
            reqwest::StatusCode::NOT_FOUND => Err(BackendError::NotFound(message)),
            _ => Err(BackendError::Service {
                status: status.as_u16(),
                message,
            }),
        }
    }
}

/// PostgREST equality filter for a row keyed by identity id.
fn eq_filter(user_id: UserId) -> String {
    format!("eq.{user_id}")
}
