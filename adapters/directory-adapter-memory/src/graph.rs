//! Identity/account/role relations
//!
//! An account belongs to at most one identity and holds any number of roles.
//! Listings come back sorted.

use std::collections::{BTreeMap, BTreeSet};

use crate::seed::Seed;
use idgate_types::directory_adapter::Assignment;
use idgate_types::prelude::*;

#[derive(Debug, Default)]
struct Account {
	identity: Option<Box<str>>,
	roles: BTreeSet<Box<str>>,
}

#[derive(Debug, Default)]
pub(crate) struct Graph {
	identities: BTreeMap<Box<str>, BTreeSet<Box<str>>>,
	accounts: BTreeMap<Box<str>, Account>,
	roles: BTreeSet<Box<str>>,
}

fn non_empty<'a>(kind: &str, value: &'a str) -> ClResult<&'a str> {
	if value.is_empty() {
		return Err(Error::ValidationError(format!("{} must not be empty", kind)));
	}
	Ok(value)
}

impl Graph {
	pub(crate) fn from_seed(seed: Seed) -> ClResult<Self> {
		let mut graph = Graph { roles: seed.roles.into_iter().collect(), ..Default::default() };

		for (account, entry) in seed.accounts {
			graph.roles.extend(entry.roles.iter().cloned());
			graph
				.accounts
				.insert(account, Account { identity: None, roles: entry.roles.into_iter().collect() });
		}

		for (identity, entry) in seed.identities {
			let owned = graph.identities.entry(identity.clone()).or_default();
			for account in entry.accounts {
				let record = graph.accounts.entry(account.clone()).or_default();
				if let Some(other) = record.identity.as_ref().filter(|other| **other != identity) {
					return Err(Error::Config(format!(
						"account {} is seeded under both {} and {}",
						account, other, identity
					)));
				}
				record.identity = Some(identity.clone());
				owned.insert(account);
			}
		}

		Ok(graph)
	}

	pub(crate) fn identity_count(&self) -> usize {
		self.identities.len()
	}

	pub(crate) fn account_count(&self) -> usize {
		self.accounts.len()
	}

	fn identity(&self, identity: &str) -> ClResult<&BTreeSet<Box<str>>> {
		self.identities.get(identity).ok_or(Error::NotFound)
	}

	fn account(&self, account: &str) -> ClResult<&Account> {
		self.accounts.get(account).ok_or(Error::NotFound)
	}

	pub(crate) fn accounts_for_identity(&self, identity: &str) -> ClResult<Vec<Box<str>>> {
		Ok(self.identity(identity)?.iter().cloned().collect())
	}

	pub(crate) fn roles_for_account(&self, account: &str) -> ClResult<Vec<Box<str>>> {
		Ok(self.account(account)?.roles.iter().cloned().collect())
	}

	pub(crate) fn roles_for_identity(&self, identity: &str) -> ClResult<Vec<Box<str>>> {
		let mut roles = BTreeSet::new();
		for account in self.identity(identity)? {
			if let Some(record) = self.accounts.get(account) {
				roles.extend(record.roles.iter().cloned());
			}
		}
		Ok(roles.into_iter().collect())
	}

	pub(crate) fn identity_for_account(&self, account: &str) -> ClResult<Box<str>> {
		self.account(account)?.identity.clone().ok_or(Error::NotFound)
	}

	pub(crate) fn identities_for_role(&self, role: &str) -> ClResult<Vec<Box<str>>> {
		if !self.roles.contains(role) {
			return Err(Error::NotFound);
		}
		let identities: BTreeSet<Box<str>> = self
			.accounts
			.values()
			.filter(|record| record.roles.contains(role))
			.filter_map(|record| record.identity.clone())
			.collect();
		Ok(identities.into_iter().collect())
	}

	/// Link `account` to `identity`, creating the account if needed.
	///
	/// An account owned by another identity is moved.
	pub(crate) fn set_account_for_identity(
		&mut self,
		identity: &str,
		account: &str,
	) -> ClResult<Assignment> {
		non_empty("account", account)?;
		if !self.identities.contains_key(identity) {
			return Err(Error::NotFound);
		}

		let record = self.accounts.entry(account.into()).or_default();
		let status = match record.identity.replace(identity.into()) {
			Some(previous) if *previous == *identity => return Ok(Assignment::Unchanged),
			Some(previous) => {
				info!(account, from = %previous, to = identity, "Moving account");
				if let Some(owned) = self.identities.get_mut(&previous) {
					owned.remove(account);
				}
				Assignment::Moved
			}
			None => Assignment::Created,
		};

		if let Some(owned) = self.identities.get_mut(identity) {
			owned.insert(account.into());
		}
		Ok(status)
	}

	pub(crate) fn set_role_for_account(
		&mut self,
		account: &str,
		role: &str,
	) -> ClResult<Assignment> {
		non_empty("role", role)?;
		let record = self.accounts.get_mut(account).ok_or(Error::NotFound)?;
		if !record.roles.insert(role.into()) {
			return Ok(Assignment::Unchanged);
		}
		self.roles.insert(role.into());
		Ok(Assignment::Created)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn graph() -> Graph {
		let seed = Seed::from_yaml(
			r#"
identities:
  alice:
    accounts: [acc-1, acc-2]
  bob:
    accounts: [acc-3]
  carol: {}
accounts:
  acc-1:
    roles: [billing, support]
  acc-2:
    roles: [billing]
  acc-3:
    roles: [support]
  acc-4:
    roles: [ops]
roles: [auditor]
"#,
		)
		.expect("seed");
		Graph::from_seed(seed).expect("graph")
	}

	fn names(list: Vec<Box<str>>) -> Vec<String> {
		list.into_iter().map(String::from).collect()
	}

	#[test]
	fn test_queries() {
		let graph = graph();

		assert_eq!(names(graph.accounts_for_identity("alice").expect("alice")), ["acc-1", "acc-2"]);
		assert_eq!(names(graph.roles_for_identity("alice").expect("alice")), ["billing", "support"]);
		assert_eq!(names(graph.roles_for_account("acc-3").expect("acc-3")), ["support"]);
		assert_eq!(&*graph.identity_for_account("acc-2").expect("acc-2"), "alice");
		assert_eq!(names(graph.identities_for_role("support").expect("support")), ["alice", "bob"]);
		assert!(graph.accounts_for_identity("carol").expect("carol").is_empty());
		assert_eq!(graph.account_count(), 4);
	}

	#[test]
	fn test_unknown_entries_are_not_found() {
		let graph = graph();

		assert!(matches!(graph.accounts_for_identity("mallory"), Err(Error::NotFound)));
		assert!(matches!(graph.roles_for_account("acc-9"), Err(Error::NotFound)));
		assert!(matches!(graph.identities_for_role("root"), Err(Error::NotFound)));
		// Exists, but belongs to nobody
		assert!(matches!(graph.identity_for_account("acc-4"), Err(Error::NotFound)));
	}

	#[test]
	fn test_declared_role_without_holders() {
		let graph = graph();
		assert!(graph.identities_for_role("auditor").expect("auditor").is_empty());
	}

	#[test]
	fn test_set_account_for_identity() {
		let mut graph = graph();

		assert_eq!(graph.set_account_for_identity("carol", "acc-4").ok(), Some(Assignment::Created));
		assert_eq!(graph.set_account_for_identity("carol", "acc-4").ok(), Some(Assignment::Unchanged));
		assert_eq!(graph.set_account_for_identity("carol", "acc-1").ok(), Some(Assignment::Moved));

		assert_eq!(names(graph.accounts_for_identity("alice").expect("alice")), ["acc-2"]);
		assert_eq!(names(graph.accounts_for_identity("carol").expect("carol")), ["acc-1", "acc-4"]);
		assert_eq!(&*graph.identity_for_account("acc-1").expect("acc-1"), "carol");

		assert_eq!(graph.set_account_for_identity("bob", "acc-new").ok(), Some(Assignment::Created));
		assert_eq!(graph.account_count(), 5);

		assert!(matches!(graph.set_account_for_identity("mallory", "acc-2"), Err(Error::NotFound)));
		assert!(matches!(graph.set_account_for_identity("bob", ""), Err(Error::ValidationError(_))));
	}

	#[test]
	fn test_set_role_for_account() {
		let mut graph = graph();

		assert_eq!(graph.set_role_for_account("acc-3", "ops").ok(), Some(Assignment::Created));
		assert_eq!(graph.set_role_for_account("acc-3", "ops").ok(), Some(Assignment::Unchanged));
		assert_eq!(names(graph.roles_for_account("acc-3").expect("acc-3")), ["ops", "support"]);

		assert_eq!(graph.set_role_for_account("acc-3", "fresh").ok(), Some(Assignment::Created));
		assert_eq!(names(graph.identities_for_role("fresh").expect("fresh")), ["bob"]);

		assert!(matches!(graph.set_role_for_account("acc-9", "ops"), Err(Error::NotFound)));
	}

	#[test]
	fn test_conflicting_seed_is_rejected() {
		let seed = Seed::from_yaml(
			"identities:\n  a:\n    accounts: [x]\n  b:\n    accounts: [x]\n",
		)
		.expect("seed");
		assert!(matches!(Graph::from_seed(seed), Err(Error::Config(_))));
	}

	#[test]
	fn test_empty_seed() {
		let graph = Graph::from_seed(Seed::from_yaml("").expect("seed")).expect("graph");
		assert_eq!(graph.account_count(), 0);
	}
}

// vim: ts=4
