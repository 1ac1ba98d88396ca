//! Feature catalog: loading from raw configuration and atomic replacement.
//!
//! The raw configuration is either a mapping of feature id to entry:
//!
//! ```yaml
//! features:
//!   reports:
//!     name: Reports
//!     verbs: { get: true, delete: Admin }
//! ```
//!
//! or a sequence of entries that carry their own `id` field. Inside an entry
//! the `verbs` mapping holds the permissions; every other field is opaque
//! metadata returned to clients as-is.

use arc_swap::ArcSwap;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use crate::feature::{FeatureDefinition, Verb, VerbPermission};
use crate::prelude::*;

const VERBS_KEY: &str = "verbs";
const ID_KEY: &str = "id";
/// Set by `DELETE /features`, never taken from configuration
const COUNT_KEY: &str = "count";

// Catalog //
//*********//
/// Ordered, immutable collection of feature definitions
#[derive(Debug, Default)]
pub struct Catalog {
	features: Vec<FeatureDefinition>,
	index: HashMap<Box<str>, usize>,
}

impl Catalog {
	pub fn load(raw: &Value) -> ClResult<Catalog> {
		let mut catalog = Catalog::default();
		match raw {
			Value::Null => {}
			Value::Object(entries) => {
				for (id, entry) in entries {
					catalog.push(parse_feature(id, entry)?)?;
				}
			}
			Value::Array(entries) => {
				for entry in entries {
					let id = entry.get(ID_KEY).and_then(Value::as_str).ok_or_else(|| {
						Error::Config("feature entry without a string id".to_string())
					})?;
					catalog.push(parse_feature(id, entry)?)?;
				}
			}
			_ => {
				return Err(Error::Config(
					"features must be a mapping or a list of entries".to_string(),
				));
			}
		}
		Ok(catalog)
	}

	fn push(&mut self, feature: FeatureDefinition) -> ClResult<()> {
		if self.index.contains_key(&feature.id) {
			return Err(Error::Config(format!("duplicate feature id: {}", feature.id)));
		}
		self.index.insert(feature.id.clone(), self.features.len());
		self.features.push(feature);
		Ok(())
	}

	pub fn get(&self, id: &str) -> Option<&FeatureDefinition> {
		self.index.get(id).and_then(|&idx| self.features.get(idx))
	}

	/// Features in configuration order
	pub fn iter(&self) -> impl Iterator<Item = &FeatureDefinition> {
		self.features.iter()
	}

	pub fn len(&self) -> usize {
		self.features.len()
	}

	pub fn is_empty(&self) -> bool {
		self.features.is_empty()
	}
}

fn parse_feature(id: &str, entry: &Value) -> ClResult<FeatureDefinition> {
	if id.is_empty() {
		return Err(Error::Config("feature id must not be empty".to_string()));
	}
	let entry = match entry {
		Value::Object(entry) => entry.clone(),
		// A bare `id:` line declares a feature with no enabled verbs
		Value::Null => Map::new(),
		_ => return Err(Error::Config(format!("feature {}: entry must be a mapping", id))),
	};

	let mut verbs = BTreeMap::new();
	let mut metadata = Map::new();
	for (key, value) in entry {
		match key.as_str() {
			VERBS_KEY => verbs = parse_verbs(id, &value)?,
			ID_KEY => {}
			COUNT_KEY => warn!(feature = %id, "Ignoring reserved field 'count'"),
			_ => {
				metadata.insert(key, value);
			}
		}
	}

	Ok(FeatureDefinition { id: id.into(), verbs, metadata })
}

fn parse_verbs(id: &str, value: &Value) -> ClResult<BTreeMap<Verb, VerbPermission>> {
	let mut verbs = BTreeMap::new();
	match value {
		Value::Null => {}
		Value::Object(entries) => {
			for (name, spec) in entries {
				let Some(verb) = Verb::parse(name) else {
					warn!(feature = %id, verb = %name, "Ignoring unrecognized verb");
					continue;
				};
				verbs.insert(verb, VerbPermission::from_value(id, verb, spec)?);
			}
		}
		_ => return Err(Error::Config(format!("feature {}: verbs must be a mapping", id))),
	}
	Ok(verbs)
}

// CatalogStore //
//**************//
/// Holds the current catalog. Readers take a snapshot; a reload publishes a
/// whole new catalog, so a request never sees a half-updated one.
#[derive(Debug)]
pub struct CatalogStore {
	current: ArcSwap<Catalog>,
}

impl CatalogStore {
	pub fn new(catalog: Catalog) -> Self {
		CatalogStore { current: ArcSwap::from_pointee(catalog) }
	}

	pub fn snapshot(&self) -> Arc<Catalog> {
		self.current.load_full()
	}

	pub fn replace(&self, catalog: Catalog) {
		self.current.store(Arc::new(catalog));
	}
}


// vim: ts=4
