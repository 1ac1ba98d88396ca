//! Axum extractors for the authenticated principal.
//!
//! The authentication middleware stores the [`Principal`] in the request
//! extensions; these extractors read it back in handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::Error;
use crate::principal::Principal;

// Principal //
//***********//
impl<S> FromRequestParts<S> for Principal
where
	S: Send + Sync,
{
	type Rejection = Error;

	async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
		parts.extensions.get::<Principal>().cloned().ok_or(Error::Unauthorized)
	}
}

// OptionalPrincipal //
//*******************//
/// Principal extractor that doesn't fail for anonymous requests
#[derive(Clone, Debug)]
pub struct OptionalPrincipal(pub Option<Principal>);

impl<S> FromRequestParts<S> for OptionalPrincipal
where
	S: Send + Sync,
{
	type Rejection = Error;

	async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
		Ok(OptionalPrincipal(parts.extensions.get::<Principal>().cloned()))
	}
}


// vim: ts=4
