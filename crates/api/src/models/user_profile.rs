//! User profile row model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use compas_olfactif_core::{Role, UserId};

/// A row of the provider-owned `users` table.
///
/// The table is accessed, never defined, by this service: every column may
/// be null except the id, and `role` stays the raw column string because
/// the provider owns the value set (authorization only ever compares it
/// against `admin`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Identity id (same as the auth identity).
    pub id: UserId,
    /// Authentication email.
    #[serde(default)]
    pub email: Option<String>,
    /// Raw `role` column value.
    #[serde(default)]
    pub role: Option<String>,
    /// First name.
    #[serde(default)]
    pub prenom: Option<String>,
    /// Last name.
    #[serde(default)]
    pub nom: Option<String>,
    /// Phone number.
    #[serde(default)]
    pub telephone: Option<String>,
    /// WhatsApp number.
    #[serde(default)]
    pub whatsapp: Option<String>,
    /// Birth date (ISO `YYYY-MM-DD`).
    #[serde(default)]
    pub date_naissance: Option<String>,
    /// Client code, present on client rows.
    #[serde(default)]
    pub code_client: Option<String>,
    /// When the row was created.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl UserProfile {
    /// Whether this row grants admin access.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role.as_deref() == Some(Role::Admin.as_str())
    }
}
