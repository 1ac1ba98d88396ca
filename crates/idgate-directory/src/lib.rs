//! Directory lookup endpoints
//!
//! Thin pass-through to the configured [`DirectoryAdapter`]: every handler
//! calls one adapter method and wraps the result in the success envelope.
//!
//! [`DirectoryAdapter`]: idgate_types::directory_adapter::DirectoryAdapter

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod handler;

mod prelude;

// vim: ts=4
