//! Compas Olfactif Core - Shared types library.
//!
//! This crate provides common types used across all Compas Olfactif components:
//! - `api` - HTTP service (admin user management, credential checks, catalog)
//! - `integration-tests` - End-to-end tests against a running service
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no
//! configuration. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, roles, client
//!   codes, and the catalog data shapes

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
