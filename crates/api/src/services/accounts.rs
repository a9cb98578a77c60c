//! Account provisioning.

use rand::seq::IndexedRandom;

use compas_olfactif_core::{ClientCode, Role, UserId};

use crate::backend::{BackendClient, ProfileUpdate};
use crate::error::AppError;
use crate::models::NewAccount;

/// Characters used in generated client codes (A-Z, 0-9).
const CODE_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Provision a new account: create the auth identity, then fill the
/// profile row.
///
/// The provider creates the profile row together with the identity; this
/// function then patches the row with names, contact fields, the role, and
/// a generated client code for client accounts. Between the two calls the
/// identity exists without profile data.
///
/// There is deliberately no compensating delete when the second call fails:
/// the identity stands, the failure is surfaced as an error carrying the
/// provider's message, and the created id is logged for reconciliation.
///
/// # Errors
///
/// Returns `AppError::Backend` with the provider's message if either call
/// fails.
pub async fn provision_user(
    backend: &BackendClient,
    account: NewAccount,
) -> Result<UserId, AppError> {
    let created = backend
        .create_auth_user(account.email.as_str(), &account.password)
        .await?;

    tracing::info!(user_id = %created.id, role = %account.role, "auth identity created");

    let code_client = match account.role {
        Role::Client => Some(generate_client_code().into_inner()),
        Role::Admin => None,
    };

    let fields = ProfileUpdate {
        prenom: Some(account.prenom),
        nom: Some(account.nom),
        role: Some(account.role.as_str().to_string()),
        telephone: account.telephone,
        whatsapp: account.whatsapp,
        date_naissance: account.date_naissance.map(|d| d.format("%Y-%m-%d").to_string()),
        code_client,
    };

    if let Err(e) = backend.update_profile(created.id, &fields).await {
        // The identity already exists without profile data; log the id so
        // an operator can reconcile.
        tracing::error!(user_id = %created.id, error = %e, "profile update failed after identity creation");
        return Err(e.into());
    }

    Ok(created.id)
}

/// Generate a fresh client code (`LCO-` + 6 uppercase alphanumerics).
fn generate_client_code() -> ClientCode {
    let mut rng = rand::rng();
    let suffix: String = (0..ClientCode::SUFFIX_LENGTH)
        .map(|_| char::from(CODE_CHARSET.choose(&mut rng).copied().unwrap_or(b'A')))
        .collect();

    let code = format!("{}{suffix}", ClientCode::PREFIX);
    // The charset only produces characters the parser accepts
    ClientCode::parse(&code).unwrap_or_else(|_| unreachable!("generated client code is valid"))
}
