//! Adapter for the external directory that relates identities, accounts and roles.
//!
//! The gateway never interprets directory data; it forwards whatever the
//! adapter returns. Implementations report unknown identities/accounts/roles
//! as [`Error::NotFound`] and any other backend failure as
//! [`Error::Upstream`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::prelude::*;

/// Outcome of a directory mutation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Assignment {
	/// A new relation was recorded
	Created,
	/// The relation already existed
	Unchanged,
	/// The account was detached from its previous identity and reassigned
	Moved,
}

#[async_trait]
pub trait DirectoryAdapter: Debug + Send + Sync {
	/// Version string reported in the `X-Api-Version` response header
	fn version(&self) -> &str;

	async fn accounts_for_identity(&self, identity: &str) -> ClResult<Vec<Box<str>>>;
	async fn roles_for_account(&self, account: &str) -> ClResult<Vec<Box<str>>>;
	async fn roles_for_identity(&self, identity: &str) -> ClResult<Vec<Box<str>>>;
	async fn identity_for_account(&self, account: &str) -> ClResult<Box<str>>;
	async fn identities_for_role(&self, role: &str) -> ClResult<Vec<Box<str>>>;

	async fn set_account_for_identity(
		&self,
		identity: &str,
		account: &str,
	) -> ClResult<Assignment>;
	async fn set_role_for_account(&self, account: &str, role: &str) -> ClResult<Assignment>;

	/// Number of accounts known to the directory
	async fn account_count(&self) -> ClResult<u64>;
}

// vim: ts=4
