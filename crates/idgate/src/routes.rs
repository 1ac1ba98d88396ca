use axum::{
	Router,
	http::{Method, Uri},
	middleware,
	routing::{get, post, put},
};

use crate::prelude::*;
use crate::auth;
use idgate_core::middleware::{authenticate, log_request};

async fn no_route(method: Method, uri: Uri) -> Error {
	Error::NoRoute { method: method.as_str().into(), path: uri.path().into() }
}

async fn method_not_allowed(method: Method, uri: Uri) -> Error {
	Error::MethodNotAllowed { method: method.as_str().into(), path: uri.path().into() }
}

fn init_features() -> Router<App> {
	use crate::features::handler::*;

	Router::new()
		.route("/allfeatures", get(list_all_features))
		.route(
			"/features",
			get(list_features).put(list_features).post(list_features).delete(list_delete_features),
		)
		.route(
			"/features/{id}",
			get(get_feature).put(get_feature).post(get_feature).delete(get_feature),
		)
}

fn init_directory() -> Router<App> {
	use crate::directory::handler::*;

	Router::new()
		.route(
			"/accounts/identity/{identity}",
			get(get_accounts_for_identity).post(post_account_for_identity),
		)
		.route("/roles/account/{account}", get(get_roles_for_account).post(post_role_for_account))
		.route("/rolls/account/{account}", post(post_role_for_account))
		.route("/roles/identity/{identity}", get(get_roles_for_identity))
		.route("/identities/account/{account}", get(get_identity_for_account))
		.route("/identities/role/{role}", get(get_identities_for_role))
}

/// Route table with the middleware stack. From the outside in: request log,
/// authentication, URL-map access check.
pub fn init(app: App) -> Router {
	Router::new()
		.merge(init_features())
		.route("/identity", put(auth::handler::put_identity))
		.merge(init_directory())
		.method_not_allowed_fallback(method_not_allowed)
		.fallback(no_route)
		.layer(middleware::from_fn_with_state(app.clone(), auth::perm::check_access))
		.layer(middleware::from_fn_with_state(app.clone(), authenticate))
		.layer(middleware::from_fn(log_request))
		.with_state(app)
}

// vim: ts=4
