//! idgate is an identity and feature gateway that runs behind a single
//! sign-on proxy.
//!
//! # Features
//!
//! - Feature catalog filtered by the HTTP verb of the request
//!     - per-verb permissions, with an `all` fallback
//!     - reloaded on `SIGHUP` without dropping requests
//! - Role classification from upstream entitlements
//! - Pass-through to an identity/account/role directory
//! - Intercept URL map for anonymous, authenticated and admin-only paths

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

// Re-export shared types and adapter traits from idgate-types
pub use idgate_types::auth_adapter;
pub use idgate_types::directory_adapter;
pub use idgate_types::error;
pub use idgate_types::principal;
pub use idgate_types::types;

// Core re-exports
pub use idgate_core::access;
pub use idgate_core::catalog;
pub use idgate_core::config;
pub use idgate_core::feature;
pub use idgate_core::resolver;
pub use idgate_core::roles;

// Feature crate re-exports
pub use idgate_auth as auth;
pub use idgate_directory as directory;
pub use idgate_features as features;

// Local modules
pub mod app;
pub mod prelude;
pub mod reload;
pub mod routes;
pub mod webserver;

pub use crate::app::{App, AppBuilder};

// vim: ts=4
