use async_trait::async_trait;
use axum::http::HeaderMap;
use std::sync::Arc;

use idgate_types::auth_adapter::AuthAdapter;
use idgate_types::prelude::*;

/// First adapter that finds an assertion wins. A rejected assertion stops the
/// chain instead of falling through to the next source.
#[derive(Debug)]
pub struct ChainAuthAdapter {
	adapters: Vec<Arc<dyn AuthAdapter>>,
}

impl ChainAuthAdapter {
	pub fn new(adapters: Vec<Arc<dyn AuthAdapter>>) -> Self {
		ChainAuthAdapter { adapters }
	}
}

#[async_trait]
impl AuthAdapter for ChainAuthAdapter {
	async fn authenticate(&self, headers: &HeaderMap) -> ClResult<Option<Principal>> {
		for adapter in &self.adapters {
			if let Some(principal) = adapter.authenticate(headers).await? {
				return Ok(Some(principal));
			}
		}
		Ok(None)
	}
}

// vim: ts=4
