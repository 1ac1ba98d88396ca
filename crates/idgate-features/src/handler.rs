//! Feature handlers
//!
//! Listing endpoints filter the catalog by the request's own HTTP verb, so
//! `PUT /features` shows exactly the features enabled for `put`.

use axum::{
	Json,
	extract::{Path, State, rejection::PathRejection},
	http::{Method, Uri},
};

use crate::prelude::*;
use idgate_core::feature::{FeatureView, Verb};
use idgate_core::resolver;

/// GET /allfeatures - every feature, unfiltered
pub async fn list_all_features(State(app): State<App>) -> Json<Vec<FeatureView>> {
	Json(resolver::list_by_verb(&app.catalog.snapshot(), ""))
}

/// GET|HEAD|PUT|POST /features - features enabled for the request verb
pub async fn list_features(State(app): State<App>, method: Method) -> Json<Vec<FeatureView>> {
	let Some(verb) = Verb::from_method(&method) else {
		return Json(Vec::new());
	};
	Json(resolver::features_for(&app.catalog.snapshot(), Some(verb)))
}

/// DELETE /features - features enabled for `delete`; the first one carries
/// the directory's account count
pub async fn list_delete_features(State(app): State<App>) -> ClResult<Json<Vec<FeatureView>>> {
	let mut features = resolver::features_for(&app.catalog.snapshot(), Some(Verb::Delete));

	if let Some(first) = features.first_mut() {
		let count = app.directory_adapter.account_count().await?;
		debug!(feature = %first.id, count, "Attaching account count");
		first.count = Some(count);
	}

	Ok(Json(features))
}

/// GET|PUT|POST|DELETE /features/{id}
///
/// Unknown and undecodable ids both answer 404 naming the request URI and
/// method.
pub async fn get_feature(
	State(app): State<App>,
	method: Method,
	uri: Uri,
	id: Result<Path<String>, PathRejection>,
) -> ClResult<Json<FeatureView>> {
	let no_route = || Error::NoRoute { method: method.as_str().into(), path: uri.path().into() };

	let Path(id) = id.map_err(|err| {
		debug!(error = %err, path = uri.path(), "Undecodable feature id");
		no_route()
	})?;
	let feature = resolver::get_by_id(&app.catalog.snapshot(), &id).map_err(|_| {
		debug!(feature = %id, "Feature not found");
		no_route()
	})?;
	Ok(Json(feature))
}

// vim: ts=4
