//! Directory handlers
//!
//! Responses look like `{"status": "success", "<key>": <payload>}` and carry
//! the directory's version in the `X-Api-Version` header.

use axum::{
	Form, Json,
	extract::{
		Path, State,
		rejection::{FormRejection, PathRejection},
	},
	http::{HeaderName, HeaderValue},
	response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::prelude::*;
use idgate_types::types::Success;

pub const API_VERSION_HEADER: HeaderName = HeaderName::from_static("x-api-version");

fn respond<T: Serialize>(app: &App, key: &'static str, payload: T) -> ClResult<Response> {
	let version = HeaderValue::from_str(app.directory_adapter.version())
		.map_err(|_| Error::Internal("directory version is not a valid header value".into()))?;
	Ok(([(API_VERSION_HEADER, version)], Json(Success::new(key, payload))).into_response())
}

fn require(field: &str, value: String) -> ClResult<String> {
	let value = value.trim();
	if value.is_empty() {
		return Err(Error::ValidationError(format!("{} must not be empty", field)));
	}
	Ok(value.to_string())
}

/// GET /accounts/identity/{identity}
pub async fn get_accounts_for_identity(
	State(app): State<App>,
	identity: Result<Path<String>, PathRejection>,
) -> ClResult<Response> {
	let Path(identity) = identity?;
	let accounts = app.directory_adapter.accounts_for_identity(&identity).await?;
	respond(&app, "accounts", accounts)
}

/// GET /roles/account/{account}
pub async fn get_roles_for_account(
	State(app): State<App>,
	account: Result<Path<String>, PathRejection>,
) -> ClResult<Response> {
	let Path(account) = account?;
	let roles = app.directory_adapter.roles_for_account(&account).await?;
	respond(&app, "roles", roles)
}

/// GET /roles/identity/{identity}
pub async fn get_roles_for_identity(
	State(app): State<App>,
	identity: Result<Path<String>, PathRejection>,
) -> ClResult<Response> {
	let Path(identity) = identity?;
	let roles = app.directory_adapter.roles_for_identity(&identity).await?;
	respond(&app, "roles", roles)
}

/// GET /identities/account/{account}
pub async fn get_identity_for_account(
	State(app): State<App>,
	account: Result<Path<String>, PathRejection>,
) -> ClResult<Response> {
	let Path(account) = account?;
	let identity = app.directory_adapter.identity_for_account(&account).await?;
	respond(&app, "identity", identity)
}

/// GET /identities/role/{role}
pub async fn get_identities_for_role(
	State(app): State<App>,
	role: Result<Path<String>, PathRejection>,
) -> ClResult<Response> {
	let Path(role) = role?;
	let identities = app.directory_adapter.identities_for_role(&role).await?;
	respond(&app, "identities", identities)
}

#[derive(Debug, Deserialize)]
pub struct AccountForm {
	#[serde(default)]
	pub account: String,
}

/// POST /accounts/identity/{identity} - form field `account`
pub async fn post_account_for_identity(
	State(app): State<App>,
	identity: Result<Path<String>, PathRejection>,
	form: Result<Form<AccountForm>, FormRejection>,
) -> ClResult<Response> {
	let Path(identity) = identity?;
	let Form(form) = form?;
	let account = require("account", form.account)?;

	info!(identity = %identity, account = %account, "Assigning account to identity");
	let status = app.directory_adapter.set_account_for_identity(&identity, &account).await?;
	respond(&app, "result", status)
}

#[derive(Debug, Deserialize)]
pub struct RoleForm {
	/// Older clients post the field as `roll`
	#[serde(default, alias = "roll")]
	pub role: String,
}

/// POST /roles/account/{account} - form field `role`
pub async fn post_role_for_account(
	State(app): State<App>,
	account: Result<Path<String>, PathRejection>,
	form: Result<Form<RoleForm>, FormRejection>,
) -> ClResult<Response> {
	let Path(account) = account?;
	let Form(form) = form?;
	let role = require("role", form.role)?;

	info!(account = %account, role = %role, "Assigning role to account");
	let status = app.directory_adapter.set_role_for_account(&account, &role).await?;
	respond(&app, "result", status)
}

// vim: ts=4
