//! Account creation request and validation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use compas_olfactif_core::{Email, Role, UserId};

use crate::error::AppError;

/// Date format accepted for `date_naissance`.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Body of `POST /api/admin/create-user`.
///
/// All fields are strings on the wire; anything else (e.g. a numeric
/// `role`) is rejected by deserialization before any backend call.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub password: String,
    pub prenom: String,
    pub nom: String,
    pub role: String,
    #[serde(default)]
    pub telephone: Option<String>,
    #[serde(default)]
    pub whatsapp: Option<String>,
    #[serde(default)]
    pub date_naissance: Option<String>,
}

/// A validated account ready for provisioning.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub email: Email,
    pub password: String,
    pub prenom: String,
    pub nom: String,
    pub role: Role,
    pub telephone: Option<String>,
    pub whatsapp: Option<String>,
    pub date_naissance: Option<NaiveDate>,
}

impl CreateUserRequest {
    /// Validate the request into a [`NewAccount`].
    ///
    /// # Errors
    ///
    /// Returns `AppError::BadRequest` naming the offending field when the
    /// email is malformed, a required field is blank, the role is not one
    /// this service writes, or the birth date is not `YYYY-MM-DD`.
    pub fn validate(self) -> Result<NewAccount, AppError> {
        let email = Email::parse(self.email.trim())
            .map_err(|e| AppError::BadRequest(format!("email: {e}")))?;

        if self.password.is_empty() {
            return Err(AppError::BadRequest("password must not be empty".into()));
        }

        let prenom = required_field(&self.prenom, "prenom")?;
        let nom = required_field(&self.nom, "nom")?;

        let role: Role = self
            .role
            .parse()
            .map_err(|_| AppError::BadRequest(format!("role must be one of: admin, client (got '{}')", self.role)))?;

        let date_naissance = self
            .date_naissance
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                NaiveDate::parse_from_str(s, DATE_FORMAT)
                    .map_err(|_| AppError::BadRequest("date_naissance must be YYYY-MM-DD".into()))
            })
            .transpose()?;

        Ok(NewAccount {
            email,
            password: self.password,
            prenom,
            nom,
            role,
            telephone: clean_optional(self.telephone),
            whatsapp: clean_optional(self.whatsapp),
            date_naissance,
        })
    }
}

/// Response of a successful account creation.
#[derive(Debug, Serialize)]
pub struct CreateUserResponse {
    pub ok: bool,
    /// Identity id issued by the provider.
    pub id: UserId,
}

fn required_field(value: &str, name: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::BadRequest(format!("{name} must not be empty")));
    }
    Ok(trimmed.to_string())
}

fn clean_optional(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
