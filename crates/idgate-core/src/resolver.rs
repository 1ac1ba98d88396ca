//! Feature resolution: verb-filtered listings and single-feature lookups.
//!
//! All functions are pure over a catalog snapshot and keep catalog order,
//! which is also the order of the API response.

use crate::catalog::Catalog;
use crate::feature::{FeatureView, Verb};
use crate::prelude::*;

/// Features enabled for `verb` (case-insensitive). An empty verb disables
/// filtering; an unrecognized verb matches nothing.
pub fn list_by_verb(catalog: &Catalog, verb: &str) -> Vec<FeatureView> {
	if verb.is_empty() {
		return features_for(catalog, None);
	}
	match Verb::parse(verb) {
		Some(verb) => features_for(catalog, Some(verb)),
		None => {
			debug!(verb = %verb, "Unrecognized verb filter");
			Vec::new()
		}
	}
}

/// Typed form of [`list_by_verb`]; `None` returns every feature.
pub fn features_for(catalog: &Catalog, verb: Option<Verb>) -> Vec<FeatureView> {
	catalog
		.iter()
		.filter(|feature| verb.is_none_or(|verb| feature.is_enabled_for(verb)))
		.map(|feature| feature.view())
		.collect()
}

/// Exact, case-sensitive lookup
pub fn get_by_id(catalog: &Catalog, id: &str) -> ClResult<FeatureView> {
	catalog.get(id).map(|feature| feature.view()).ok_or(Error::NotFound)
}


// vim: ts=4
