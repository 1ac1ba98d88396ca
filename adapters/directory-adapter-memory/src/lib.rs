//! In-memory directory adapter
//!
//! Holds the identity → account → role relations in a single locked graph.
//! The graph is seeded from a YAML file at startup and mutated through the
//! directory write operations; nothing is persisted back.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

mod graph;
mod seed;

pub use seed::{DirectoryConfig, Seed};

use async_trait::async_trait;
use parking_lot::RwLock;
use std::path::Path;

use graph::Graph;
use idgate_types::directory_adapter::{Assignment, DirectoryAdapter};
use idgate_types::prelude::*;

pub const DEFAULT_VERSION: &str = concat!("memory/", env!("CARGO_PKG_VERSION"));

#[derive(Debug)]
pub struct MemoryDirectoryAdapter {
	version: Box<str>,
	graph: RwLock<Graph>,
}

impl Default for MemoryDirectoryAdapter {
	fn default() -> Self {
		MemoryDirectoryAdapter { version: DEFAULT_VERSION.into(), graph: RwLock::default() }
	}
}

impl MemoryDirectoryAdapter {
	pub fn from_seed(seed: Seed) -> ClResult<Self> {
		let graph = Graph::from_seed(seed)?;
		info!(
			identities = graph.identity_count(),
			accounts = graph.account_count(),
			"Directory seeded"
		);
		Ok(MemoryDirectoryAdapter { graph: RwLock::new(graph), ..Default::default() })
	}

	/// Read a seed file
	pub async fn open(path: impl AsRef<Path>) -> ClResult<Self> {
		let path = path.as_ref();
		let text = tokio::fs::read_to_string(path).await.map_err(|err| {
			Error::Config(format!("cannot read directory seed {}: {}", path.display(), err))
		})?;
		Self::from_seed(Seed::from_yaml(&text)?)
	}

	/// Build the adapter for the `directory` section. Relative seed paths are
	/// resolved by the caller.
	pub async fn from_config(config: &DirectoryConfig) -> ClResult<Self> {
		let mut adapter = match &config.seed {
			Some(path) => Self::open(path).await?,
			None => {
				warn!("No directory seed configured, starting empty");
				Self::default()
			}
		};
		if let Some(version) = &config.version {
			adapter.version = version.clone();
		}
		Ok(adapter)
	}
}

#[async_trait]
impl DirectoryAdapter for MemoryDirectoryAdapter {
	fn version(&self) -> &str {
		&self.version
	}

	async fn accounts_for_identity(&self, identity: &str) -> ClResult<Vec<Box<str>>> {
		self.graph.read().accounts_for_identity(identity)
	}

	async fn roles_for_account(&self, account: &str) -> ClResult<Vec<Box<str>>> {
		self.graph.read().roles_for_account(account)
	}

	async fn roles_for_identity(&self, identity: &str) -> ClResult<Vec<Box<str>>> {
		self.graph.read().roles_for_identity(identity)
	}

	async fn identity_for_account(&self, account: &str) -> ClResult<Box<str>> {
		self.graph.read().identity_for_account(account)
	}

	async fn identities_for_role(&self, role: &str) -> ClResult<Vec<Box<str>>> {
		self.graph.read().identities_for_role(role)
	}

	async fn set_account_for_identity(
		&self,
		identity: &str,
		account: &str,
	) -> ClResult<Assignment> {
		self.graph.write().set_account_for_identity(identity, account)
	}

	async fn set_role_for_account(&self, account: &str, role: &str) -> ClResult<Assignment> {
		self.graph.write().set_role_for_account(account, role)
	}

	async fn account_count(&self) -> ClResult<u64> {
		Ok(self.graph.read().account_count() as u64)
	}
}

// vim: ts=4
