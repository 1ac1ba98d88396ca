//! Access-level middleware driven by the intercept URL map

use axum::{
	extract::{Request, State},
	middleware::Next,
	response::Response,
};

use crate::prelude::*;
use idgate_core::access::Access;
use idgate_core::roles;
use idgate_types::extract::OptionalPrincipal;

/// Enforce the access level the URL map assigns to the request.
///
/// Must run after the authentication middleware so the principal, if any,
/// is already in the request extensions.
pub async fn check_access(
	State(app): State<App>,
	OptionalPrincipal(principal): OptionalPrincipal,
	req: Request,
	next: Next,
) -> ClResult<Response> {
	let access = app.url_map.access_for(req.method(), req.uri().path());

	match (access, &principal) {
		(Access::Anonymous, _) => {}
		(Access::Authenticated | Access::Admin, None) => {
			warn!(path = %req.uri().path(), ?access, "Access denied - authentication required");
			return Err(Error::Unauthorized);
		}
		(Access::Authenticated, Some(_)) => {}
		(Access::Admin, Some(principal)) => {
			if roles::classify(principal, &app.opts.admin_entitlement) != Role::Admin {
				warn!(
					subject = %principal.display_name(),
					path = %req.uri().path(),
					"Access denied - admin entitlement required"
				);
				return Err(Error::PermissionDenied);
			}
		}
	}

	Ok(next.run(req).await)
}

// vim: ts=4
