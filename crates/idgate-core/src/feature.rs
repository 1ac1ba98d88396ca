//! Feature definitions and their per-verb permissions.

use axum::http::Method;
use serde::{Serialize, Serializer, ser::SerializeSeq};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::prelude::*;

// Verb //
//******//
/// HTTP verb a feature can be enabled for. `All` applies to every verb
/// that has no explicit entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Verb {
	Get,
	Put,
	Post,
	Delete,
	All,
}

impl Verb {
	pub fn as_str(self) -> &'static str {
		match self {
			Verb::Get => "get",
			Verb::Put => "put",
			Verb::Post => "post",
			Verb::Delete => "delete",
			Verb::All => "all",
		}
	}

	/// Case-insensitive parse. Unrecognized names yield `None`.
	pub fn parse(name: &str) -> Option<Verb> {
		[Verb::Get, Verb::Put, Verb::Post, Verb::Delete, Verb::All]
			.into_iter()
			.find(|verb| verb.as_str().eq_ignore_ascii_case(name))
	}

	pub fn from_method(method: &Method) -> Option<Verb> {
		match *method {
			Method::GET | Method::HEAD => Some(Verb::Get),
			Method::PUT => Some(Verb::Put),
			Method::POST => Some(Verb::Post),
			Method::DELETE => Some(Verb::Delete),
			_ => None,
		}
	}
}

impl std::fmt::Display for Verb {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl Serialize for Verb {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str(self.as_str())
	}
}

// VerbPermission //
//****************//
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VerbPermission {
	Disabled,
	Enabled,
	/// Enabled, invocable by the listed roles only
	Roles(Box<[Role]>),
}

impl VerbPermission {
	pub fn is_enabled(&self) -> bool {
		match self {
			VerbPermission::Disabled => false,
			VerbPermission::Enabled => true,
			VerbPermission::Roles(roles) => !roles.is_empty(),
		}
	}

	/// Parse a configured permission: `true`/`false`, a role name, or a list
	/// of role names.
	pub fn from_value(feature_id: &str, verb: Verb, value: &Value) -> ClResult<Self> {
		match value {
			Value::Bool(true) => Ok(VerbPermission::Enabled),
			Value::Bool(false) | Value::Null => Ok(VerbPermission::Disabled),
			Value::String(role) => Ok(VerbPermission::Roles(
				parse_role(feature_id, verb, role).into_iter().collect(),
			)),
			Value::Array(items) => {
				let mut roles = Vec::with_capacity(items.len());
				for item in items {
					let Value::String(role) = item else {
						return Err(invalid_permission(feature_id, verb));
					};
					if let Some(role) = parse_role(feature_id, verb, role) {
						if !roles.contains(&role) {
							roles.push(role);
						}
					}
				}
				Ok(VerbPermission::Roles(roles.into()))
			}
			_ => Err(invalid_permission(feature_id, verb)),
		}
	}
}

fn parse_role(feature_id: &str, verb: Verb, name: &str) -> Option<Role> {
	match name.parse::<Role>() {
		Ok(role) => Some(role),
		Err(_) => {
			warn!(feature = %feature_id, %verb, role = %name, "Ignoring unknown role in feature permissions");
			None
		}
	}
}

fn invalid_permission(feature_id: &str, verb: Verb) -> Error {
	Error::Config(format!(
		"feature {}: permission for {} must be a boolean, a role or a list of roles",
		feature_id, verb
	))
}

impl Serialize for VerbPermission {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		match self {
			VerbPermission::Disabled => serializer.serialize_bool(false),
			VerbPermission::Enabled => serializer.serialize_bool(true),
			VerbPermission::Roles(roles) => {
				let mut seq = serializer.serialize_seq(Some(roles.len()))?;
				for role in roles {
					seq.serialize_element(role)?;
				}
				seq.end()
			}
		}
	}
}

// FeatureDefinition //
//*******************//
static DISABLED: VerbPermission = VerbPermission::Disabled;

#[derive(Clone, Debug, PartialEq)]
pub struct FeatureDefinition {
	pub id: Box<str>,
	pub verbs: BTreeMap<Verb, VerbPermission>,
	/// Opaque fields (name, description, ...) in configuration order
	pub metadata: Map<String, Value>,
}

impl FeatureDefinition {
	/// Effective permission for `verb`: the explicit entry if there is one,
	/// otherwise the `all` entry, otherwise disabled.
	pub fn permission(&self, verb: Verb) -> &VerbPermission {
		self.verbs
			.get(&verb)
			.or_else(|| self.verbs.get(&Verb::All))
			.unwrap_or(&DISABLED)
	}

	pub fn is_enabled_for(&self, verb: Verb) -> bool {
		self.permission(verb).is_enabled()
	}

	pub fn view(&self) -> FeatureView {
		FeatureView {
			id: self.id.clone(),
			metadata: self.metadata.clone(),
			verbs: self.verbs.clone(),
			count: None,
		}
	}
}

// FeatureView //
//*************//
/// Serialized form of a feature as returned by the API
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FeatureView {
	pub id: Box<str>,
	#[serde(flatten)]
	pub metadata: Map<String, Value>,
	pub verbs: BTreeMap<Verb, VerbPermission>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub count: Option<u64>,
}


// vim: ts=4
