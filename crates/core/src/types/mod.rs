//! Core types for Le Compas Olfactif.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod client_code;
pub mod email;
pub mod id;
pub mod price;
pub mod product;
pub mod role;

pub use client_code::{ClientCode, ClientCodeError};
pub use email::{Email, EmailError};
pub use id::*;
pub use price::{CurrencyCode, Price};
pub use product::{AdminProduct, ProductVariant};
pub use role::{Role, RoleError};
