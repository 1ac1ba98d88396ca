//! Upstream identity assertion adapters
//!
//! The gateway sits behind a single sign-on proxy that has already
//! authenticated the caller. These adapters read what the proxy forwards:
//!
//! - [`HeaderAuthAdapter`] trusts plain `X-Auth-*` headers set by the proxy
//! - [`TokenAuthAdapter`] verifies an HS256 bearer token signed with a shared secret
//! - [`ChainAuthAdapter`] asks each inner adapter in turn

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

mod chain;
mod header;
mod token;

pub use chain::ChainAuthAdapter;
pub use header::{HeaderAuthAdapter, HeaderAuthConfig};
pub use token::{TokenAuthAdapter, TokenAuthConfig, TokenClaims};

use serde::Deserialize;
use std::sync::Arc;

use idgate_types::auth_adapter::AuthAdapter;
use idgate_types::prelude::*;

/// The `auth` configuration section
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthConfig {
	pub headers: Option<HeaderAuthConfig>,
	pub token: Option<TokenAuthConfig>,
}

/// Build the adapter described by the `auth` section.
///
/// With both sources configured the token is checked first and the headers
/// second. With neither, the proxy headers are read under their default names.
pub fn from_config(config: &AuthConfig) -> ClResult<Arc<dyn AuthAdapter>> {
	let adapter: Arc<dyn AuthAdapter> = match (&config.token, &config.headers) {
		(Some(token), Some(headers)) => Arc::new(ChainAuthAdapter::new(vec![
			Arc::new(TokenAuthAdapter::new(token)?),
			Arc::new(HeaderAuthAdapter::new(headers.clone())),
		])),
		(Some(token), None) => Arc::new(TokenAuthAdapter::new(token)?),
		(None, Some(headers)) => Arc::new(HeaderAuthAdapter::new(headers.clone())),
		(None, None) => Arc::new(HeaderAuthAdapter::default()),
	};
	info!(?adapter, "Auth adapter configured");
	Ok(adapter)
}

// vim: ts=4
