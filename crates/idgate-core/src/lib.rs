//! Core of the idgate gateway.
//!
//! Holds the feature model (catalog loading, verb-based resolution), role
//! classification, configuration, the shared application state, and the
//! middlewares every route runs through. Feature crates build their handlers
//! on top of this crate.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod access;
pub mod app;
pub mod catalog;
pub mod config;
pub mod feature;
pub mod middleware;
pub mod prelude;
pub mod resolver;
pub mod roles;

// Re-export commonly used types
pub use app::{App, AppOpts, AppState};
pub use catalog::{Catalog, CatalogStore};
pub use config::GatewayConfig;
pub use feature::{FeatureDefinition, FeatureView, Verb, VerbPermission};

// vim: ts=4
