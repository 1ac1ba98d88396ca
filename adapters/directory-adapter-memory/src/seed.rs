use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

use idgate_types::prelude::*;

/// The `directory` configuration section
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DirectoryConfig {
	/// YAML seed file
	pub seed: Option<PathBuf>,
	/// Overrides the reported `X-Api-Version`
	pub version: Option<Box<str>>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IdentitySeed {
	#[serde(default)]
	pub accounts: Vec<Box<str>>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AccountSeed {
	#[serde(default)]
	pub roles: Vec<Box<str>>,
}

/// Initial directory contents
///
/// ```yaml
/// identities:
///   alice:
///     accounts: [acc-1, acc-2]
/// accounts:
///   acc-1:
///     roles: [billing]
/// roles: [auditor]
/// ```
///
/// Accounts named under an identity but not under `accounts` exist without
/// roles. `roles` declares roles no account holds yet.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Seed {
	#[serde(default)]
	pub identities: BTreeMap<Box<str>, IdentitySeed>,
	#[serde(default)]
	pub accounts: BTreeMap<Box<str>, AccountSeed>,
	#[serde(default)]
	pub roles: Vec<Box<str>>,
}

impl Seed {
	pub fn from_yaml(text: &str) -> ClResult<Self> {
		let seed: Option<Seed> = serde_yaml::from_str(text)
			.map_err(|err| Error::Config(format!("invalid directory seed: {}", err)))?;
		Ok(seed.unwrap_or_default())
	}
}

// vim: ts=4
