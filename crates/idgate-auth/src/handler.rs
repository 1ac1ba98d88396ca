use axum::{Json, extract::State};
use serde::Serialize;

use crate::prelude::*;
use idgate_core::roles;

#[derive(Debug, Serialize)]
pub struct IdentityResponse {
	pub name: String,
	pub role: Role,
}

/// PUT /identity - display name and role of the authenticated caller
pub async fn put_identity(
	State(app): State<App>,
	principal: Principal,
) -> Json<IdentityResponse> {
	let name = principal.display_name();
	let role = roles::classify(&principal, &app.opts.admin_entitlement);
	info!("Identity: {} - {}", name, role);

	Json(IdentityResponse { name, role })
}

// vim: ts=4
