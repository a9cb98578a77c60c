//! Business services orchestrating multi-call flows over the provider.

pub mod accounts;
pub mod credentials;

pub use accounts::provision_user;
pub use credentials::{ClientCredentials, verify_client_credentials};
