//! Trusted proxy headers

use async_trait::async_trait;
use axum::http::{HeaderMap, HeaderValue};
use serde::Deserialize;

use idgate_types::auth_adapter::AuthAdapter;
use idgate_types::prelude::*;

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct HeaderAuthConfig {
	pub given_name: Box<str>,
	pub surname: Box<str>,
	pub entitlements: Box<str>,
	/// Separator between entitlements in a single header value
	pub separator: char,
}

impl Default for HeaderAuthConfig {
	fn default() -> Self {
		HeaderAuthConfig {
			given_name: "X-Auth-GivenName".into(),
			surname: "X-Auth-Surname".into(),
			entitlements: "X-Auth-Entitlements".into(),
			separator: ',',
		}
	}
}

#[derive(Debug, Default)]
pub struct HeaderAuthAdapter {
	config: HeaderAuthConfig,
}

impl HeaderAuthAdapter {
	pub fn new(config: HeaderAuthConfig) -> Self {
		HeaderAuthAdapter { config }
	}
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> ClResult<Option<&'a str>> {
	let mut values = headers.get_all(name).iter();
	let Some(value) = values.next() else {
		return Ok(None);
	};
	if values.next().is_some() {
		warn!(header = name, "Repeated identity header");
		return Err(Error::Unauthorized);
	}
	let value = header_utf8(name, value)?;
	Ok(Some(value.trim()))
}

/// Proxies forward display names as raw UTF-8 bytes
fn header_utf8<'a>(name: &str, value: &'a HeaderValue) -> ClResult<&'a str> {
	std::str::from_utf8(value.as_bytes()).map_err(|_| {
		warn!(header = name, "Identity header is not valid UTF-8");
		Error::Unauthorized
	})
}

#[async_trait]
impl AuthAdapter for HeaderAuthAdapter {
	async fn authenticate(&self, headers: &HeaderMap) -> ClResult<Option<Principal>> {
		let Some(given_name) = header_str(headers, &self.config.given_name)? else {
			return Ok(None);
		};
		if given_name.is_empty() {
			warn!(header = %self.config.given_name, "Empty identity header");
			return Err(Error::Unauthorized);
		}

		let surname = header_str(headers, &self.config.surname)?.unwrap_or_default();
		let mut entitlements = Vec::new();
		for value in headers.get_all(&*self.config.entitlements) {
			let value = header_utf8(&self.config.entitlements, value)?;
			entitlements.extend(
				value.split(self.config.separator).map(str::trim).filter(|e| !e.is_empty()),
			);
		}

		debug!(given_name, surname, entitlements = entitlements.len(), "Header assertion");
		Ok(Some(Principal::new(given_name, surname, entitlements)))
	}
}

// vim: ts=4
