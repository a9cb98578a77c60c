//! Client code type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`ClientCode`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum ClientCodeError {
    /// The code does not start with the `LCO-` prefix.
    #[error("client code must start with {prefix}", prefix = ClientCode::PREFIX)]
    MissingPrefix,
    /// The part after the prefix has the wrong length.
    #[error("client code must have {len} characters after the prefix", len = ClientCode::SUFFIX_LENGTH)]
    BadLength,
    /// The part after the prefix contains a character outside A-Z0-9.
    #[error("client code may only contain uppercase letters and digits")]
    BadCharacter,
}

/// A customer's client code, e.g. `LCO-7K2M9A`.
///
/// Client codes identify customers on invoices and in correspondence.
/// The format is the `LCO-` prefix followed by six uppercase alphanumerics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ClientCode(String);

impl ClientCode {
    /// Prefix carried by every client code.
    pub const PREFIX: &'static str = "LCO-";

    /// Number of characters after the prefix.
    pub const SUFFIX_LENGTH: usize = 6;

    /// Parse a `ClientCode` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the prefix is missing, the suffix is not exactly
    /// six characters, or the suffix contains anything but A-Z and 0-9.
    pub fn parse(s: &str) -> Result<Self, ClientCodeError> {
        let suffix = s
            .strip_prefix(Self::PREFIX)
            .ok_or(ClientCodeError::MissingPrefix)?;

        if suffix.chars().count() != Self::SUFFIX_LENGTH {
            return Err(ClientCodeError::BadLength);
        }

        if !suffix.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()) {
            return Err(ClientCodeError::BadCharacter);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the client code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `ClientCode` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ClientCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ClientCode {
    type Err = ClientCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for ClientCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let code = ClientCode::parse("LCO-7K2M9A").unwrap();
        assert_eq!(code.as_str(), "LCO-7K2M9A");
    }

    #[test]
    fn test_parse_digits_only_suffix() {
        assert!(ClientCode::parse("LCO-000001").is_ok());
    }

    #[test]
    fn test_parse_missing_prefix() {
        assert!(matches!(
            ClientCode::parse("7K2M9A"),
            Err(ClientCodeError::MissingPrefix)
        ));
    }

    #[test]
    fn test_parse_wrong_length() {
        assert!(matches!(
            ClientCode::parse("LCO-7K2"),
            Err(ClientCodeError::BadLength)
        ));
        assert!(matches!(
            ClientCode::parse("LCO-7K2M9AB"),
            Err(ClientCodeError::BadLength)
        ));
    }

    #[test]
    fn test_parse_lowercase_rejected() {
        assert!(matches!(
            ClientCode::parse("LCO-7k2m9a"),
            Err(ClientCodeError::BadCharacter)
        ));
    }

    #[test]
    fn test_display() {
        let code = ClientCode::parse("LCO-AB12CD").unwrap();
        assert_eq!(code.to_string(), "LCO-AB12CD");
    }

    #[test]
    fn test_serde_transparent() {
        let code = ClientCode::parse("LCO-AB12CD").unwrap();
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "\"LCO-AB12CD\"");
    }
}
