//! Shared types, adapter traits, and core utilities for the idgate gateway.
//!
//! This crate contains the foundational types that are shared between the
//! server crates and all adapter implementations. Adapter crates depend on
//! this crate only, so they compile independently of the HTTP layer.

#![forbid(unsafe_code)]

pub mod auth_adapter;
pub mod directory_adapter;
pub mod error;
pub mod extract;
pub mod prelude;
pub mod principal;
pub mod types;

// vim: ts=4
