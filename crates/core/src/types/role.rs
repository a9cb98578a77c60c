//! Account roles.

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown role string.
#[derive(thiserror::Error, Debug, Clone)]
#[error("invalid role: {0}")]
pub struct RoleError(pub String);

/// Account role stored in the profile row's `role` column.
///
/// The column itself is free-form text owned by the hosted provider; this
/// enum covers the values this service writes. Authorization only ever
/// compares the stored string against `admin`, so an unrecognized value in
/// an existing row is treated as non-admin rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Full access to user management.
    Admin,
    /// A storefront customer with a client code.
    Client,
}

impl Role {
    /// Returns true for the admin role.
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }

    /// The role as the string stored in the `role` column.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Client => "client",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = RoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "client" => Ok(Self::Client),
            _ => Err(RoleError(s.to_owned())),
        }
    }
}
