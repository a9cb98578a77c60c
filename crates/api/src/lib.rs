//! Compas Olfactif API library.
//!
//! This crate provides the service functionality as a library,
//! allowing it to be tested and reused.
//!
//! # Security
//!
//! This crate holds the provider's service-role key, which bypasses
//! row-level access checks on the `users` table. Privileged calls are only
//! made behind the admin gate (see [`middleware::auth`]).

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod backend;
pub mod catalog;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
