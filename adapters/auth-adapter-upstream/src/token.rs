//! HS256 bearer tokens minted by the upstream identity provider

use async_trait::async_trait;
use axum::http::{HeaderMap, header};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};

use idgate_types::auth_adapter::AuthAdapter;
use idgate_types::prelude::*;

fn default_leeway() -> u64 {
	30
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TokenAuthConfig {
	pub secret: Box<str>,
	#[serde(default)]
	pub issuer: Option<Box<str>>,
	/// Clock skew tolerated on `exp`, in seconds
	#[serde(default = "default_leeway")]
	pub leeway: u64,
}

impl std::fmt::Debug for TokenAuthConfig {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("TokenAuthConfig")
			.field("secret", &"<redacted>")
			.field("issuer", &self.issuer)
			.field("leeway", &self.leeway)
			.finish()
	}
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenClaims {
	pub given_name: Box<str>,
	#[serde(default)]
	pub surname: Box<str>,
	#[serde(default)]
	pub entitlements: Vec<Box<str>>,
	pub exp: u64,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub iss: Option<Box<str>>,
}

pub struct TokenAuthAdapter {
	key: DecodingKey,
	validation: Validation,
}

impl std::fmt::Debug for TokenAuthAdapter {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("TokenAuthAdapter")
			.field("algorithm", &Algorithm::HS256)
			.field("issuer", &self.validation.iss)
			.finish_non_exhaustive()
	}
}

impl TokenAuthAdapter {
	pub fn new(config: &TokenAuthConfig) -> ClResult<Self> {
		if config.secret.is_empty() {
			return Err(Error::Config("auth.token.secret must not be empty".into()));
		}

		let mut validation = Validation::new(Algorithm::HS256);
		validation.leeway = config.leeway;
		if let Some(issuer) = &config.issuer {
			validation.set_issuer(&[&**issuer]);
		}

		Ok(TokenAuthAdapter { key: DecodingKey::from_secret(config.secret.as_bytes()), validation })
	}
}

#[async_trait]
impl AuthAdapter for TokenAuthAdapter {
	async fn authenticate(&self, headers: &HeaderMap) -> ClResult<Option<Principal>> {
		let Some(value) = headers.get(header::AUTHORIZATION) else {
			return Ok(None);
		};
		let Some(token) = value.to_str().ok().and_then(|v| v.strip_prefix("Bearer ")) else {
			return Ok(None);
		};

		let claims = decode::<TokenClaims>(token.trim(), &self.key, &self.validation)
			.map_err(|err| {
				warn!(error = %err, "Bearer token rejected");
				Error::Unauthorized
			})?
			.claims;

		debug!(given_name = %claims.given_name, "Token assertion");
		Ok(Some(Principal::new(claims.given_name, claims.surname, claims.entitlements)))
	}
}

// vim: ts=4
