//! Adapter that turns an upstream identity assertion into a [`Principal`].

use async_trait::async_trait;
use axum::http::HeaderMap;
use std::fmt::Debug;
use std::sync::Arc;

use crate::prelude::*;

#[async_trait]
pub trait AuthAdapter: Debug + Send + Sync {
	/// Inspect the request headers for an identity assertion.
	///
	/// Returns `Ok(None)` when the request carries no assertion at all and
	/// `Err(Error::Unauthorized)` when one is present but cannot be verified.
	async fn authenticate(&self, headers: &HeaderMap) -> ClResult<Option<Principal>>;
}

#[async_trait]
impl<T: AuthAdapter + ?Sized> AuthAdapter for Arc<T> {
	async fn authenticate(&self, headers: &HeaderMap) -> ClResult<Option<Principal>> {
		(**self).authenticate(headers).await
	}
}

// vim: ts=4
