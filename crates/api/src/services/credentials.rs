//! Client credential verification.

use serde::Serialize;

use compas_olfactif_core::UserId;

use crate::backend::{BackendClient, BackendError};
use crate::models::UserProfile;

/// Result of a successful credential check.
#[derive(Debug, Serialize)]
pub struct ClientCredentials {
    /// The verified identity.
    pub user_id: UserId,
    /// The email that signed in.
    pub email: String,
    /// The profile row, when one is visible to the signed-in user.
    pub profile: Option<UserProfile>,
    /// The client code from the profile, when present.
    pub code_client: Option<String>,
}

/// Check an email/password pair against the provider, best-effort.
///
/// This is a lookup, not an authentication boundary: the sign-in session is
/// ephemeral and signed out before returning, nothing is persisted, and
/// every failure mode degrades to `None` (wrong credentials) or a partial
/// record (missing profile row) instead of an error. Callers get either a
/// full record or nothing.
pub async fn verify_client_credentials(
    backend: &BackendClient,
    email: &str,
    password: &str,
) -> Option<ClientCredentials> {
    let session = match backend.sign_in(email, password).await {
        Ok(session) => session,
        Err(BackendError::InvalidCredentials) => {
            tracing::debug!(email, "credential check refused");
            return None;
        }
        Err(e) => {
            tracing::warn!(email, error = %e, "credential check failed to reach provider");
            return None;
        }
    };

    let user_id = session.user.id;

    let profile = match backend
        .fetch_profile_with_token(user_id, &session.access_token)
        .await
    {
        Ok(profile) => {
            if profile.is_none() {
                tracing::warn!(%user_id, "signed-in identity has no profile row");
            }
            profile
        }
        Err(e) => {
            // Tolerated: the record is still useful without the row
            tracing::warn!(%user_id, error = %e, "profile fetch failed during credential check");
            None
        }
    };

    if let Err(e) = backend.sign_out(&session.access_token).await {
        tracing::warn!(%user_id, error = %e, "failed to sign out ephemeral session");
    }

    let code_client = profile
        .as_ref()
        .and_then(|p| p.code_client.clone());

    Some(ClientCredentials {
        user_id,
        email: session.user.email.unwrap_or_else(|| email.to_string()),
        profile,
        code_client,
    })
}
