//! Wire types for the hosted provider.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use compas_olfactif_core::UserId;

/// An authenticated identity as reported by the provider's auth facet.
///
/// Only the fields this service reads are modeled; the provider returns
/// more (confirmation timestamps, metadata blobs) which are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthUser {
    /// Identity id; also the primary key of the profile row.
    pub id: UserId,
    /// Authentication email.
    pub email: Option<String>,
    /// When the identity was created.
    pub created_at: Option<DateTime<Utc>>,
}

/// Response of privileged account creation.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedUser {
    /// The newly issued identity id.
    pub id: UserId,
    /// Authentication email of the new account.
    pub email: Option<String>,
}

/// An ephemeral session from a password sign-in.
///
/// Held only for the duration of a credential check; never stored.
#[derive(Debug, Clone, Deserialize)]
pub struct SignInSession {
    /// Bearer token for the signed-in identity.
    pub access_token: String,
    /// The signed-in identity.
    pub user: AuthUser,
}

/// Fields written to a profile row after account creation.
///
/// `None` fields are omitted from the PATCH body so the provider keeps
/// the column untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prenom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_naissance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_client: Option<String>,
}

/// Single-column row returned by the role lookup.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RoleRow {
    pub role: Option<String>,
}
