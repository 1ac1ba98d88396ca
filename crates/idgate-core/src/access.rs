//! Intercept URL map
//!
//! Ordered rules deciding which access level a request path needs before it
//! reaches a handler. The first matching rule wins; unmatched requests are
//! anonymous.

use axum::http::Method;
use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Access {
	#[default]
	Anonymous,
	Authenticated,
	Admin,
}

#[derive(Clone, Debug, Deserialize)]
pub struct AccessRule {
	/// Exact path, or a prefix when it ends with `*`
	pub path: Box<str>,
	/// Methods the rule applies to; empty means all
	#[serde(default)]
	pub methods: Vec<Box<str>>,
	pub access: Access,
}

impl AccessRule {
	fn matches(&self, method: &Method, path: &str) -> bool {
		let path_ok = match self.path.strip_suffix('*') {
			Some(prefix) => path.starts_with(prefix),
			None => path == self.path.as_ref(),
		};
		path_ok
			&& (self.methods.is_empty()
				|| self.methods.iter().any(|m| m.eq_ignore_ascii_case(method.as_str())))
	}
}

#[derive(Clone, Debug, Default)]
pub struct UrlMap {
	rules: Box<[AccessRule]>,
}

impl UrlMap {
	pub fn new(rules: impl IntoIterator<Item = AccessRule>) -> Self {
		UrlMap { rules: rules.into_iter().collect() }
	}

	pub fn access_for(&self, method: &Method, path: &str) -> Access {
		self.rules
			.iter()
			.find(|rule| rule.matches(method, path))
			.map_or(Access::Anonymous, |rule| rule.access)
	}
}


// vim: ts=4
