//! Authenticated caller and coarse administrative role.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// Principal //
//***********//
/// Identity and entitlement set of the caller for one request.
///
/// Built by an [`AuthAdapter`](crate::auth_adapter::AuthAdapter) and stored in
/// the request extensions; it never outlives the request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Principal {
	pub given_name: Box<str>,
	pub surname: Box<str>,
	pub entitlements: HashSet<Box<str>>,
}

impl Principal {
	pub fn new(
		given_name: impl Into<Box<str>>,
		surname: impl Into<Box<str>>,
		entitlements: impl IntoIterator<Item = impl Into<Box<str>>>,
	) -> Self {
		Principal {
			given_name: given_name.into(),
			surname: surname.into(),
			entitlements: entitlements.into_iter().map(Into::into).collect(),
		}
	}

	/// "GivenName Surname"
	pub fn display_name(&self) -> String {
		format!("{} {}", self.given_name, self.surname)
	}

	pub fn has_entitlement(&self, entitlement: &str) -> bool {
		self.entitlements.contains(entitlement)
	}
}

// Role //
//******//
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
	Admin,
	User,
}

impl Role {
	pub fn as_str(self) -> &'static str {
		match self {
			Role::Admin => "Admin",
			Role::User => "User",
		}
	}
}

impl std::fmt::Display for Role {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl std::str::FromStr for Role {
	type Err = crate::error::Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		if s.eq_ignore_ascii_case("admin") {
			Ok(Role::Admin)
		} else if s.eq_ignore_ascii_case("user") {
			Ok(Role::User)
		} else {
			Err(crate::error::Error::ValidationError(format!("unknown role: {}", s)))
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_display_name() {
		let principal = Principal::new("Ada", "Lovelace", ["staff"]);
		assert_eq!(principal.display_name(), "Ada Lovelace");
	}

	#[test]
	fn test_has_entitlement() {
		let principal = Principal::new("Ada", "Lovelace", ["staff", "admin"]);
		assert!(principal.has_entitlement("admin"));
		assert!(!principal.has_entitlement("Admin"));
		assert!(!Principal::new("A", "B", Vec::<&str>::new()).has_entitlement("admin"));
	}

	#[test]
	fn test_role_parse() {
		assert_eq!("admin".parse::<Role>().ok(), Some(Role::Admin));
		assert_eq!("USER".parse::<Role>().ok(), Some(Role::User));
		assert!("root".parse::<Role>().is_err());
	}

	#[test]
	fn test_role_serialize() {
		assert_eq!(serde_json::to_value(Role::Admin).unwrap(), serde_json::json!("Admin"));
		assert_eq!(serde_json::to_value(Role::User).unwrap(), serde_json::json!("User"));
	}
}

// vim: ts=4
