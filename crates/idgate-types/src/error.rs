//! Error type shared by every idgate crate.
//!
//! Each variant maps to exactly one HTTP status code through
//! [`Error::status_code`]; the response body is always the
//! `{status, statusText, description}` envelope.

use axum::{
	Json,
	extract::rejection::{FormRejection, PathRejection},
	http::StatusCode,
	response::{IntoResponse, Response},
};
use serde::Serialize;

pub type ClResult<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
	/// Requested feature, identity, account or role does not exist
	NotFound,
	/// No route matches the request path
	NoRoute { method: Box<str>, path: Box<str> },
	/// The path exists but not for this method
	MethodNotAllowed { method: Box<str>, path: Box<str> },
	/// Credentials missing or invalid
	Unauthorized,
	PermissionDenied,
	ValidationError(String),
	/// Configuration could not be loaded (fatal at startup)
	Config(String),
	/// An external collaborator (directory, identity provider) failed
	Upstream(String),
	Internal(String),

	// externals
	Io(std::io::Error),
}

impl Error {
	pub fn status_code(&self) -> StatusCode {
		match self {
			Error::NotFound | Error::NoRoute { .. } => StatusCode::NOT_FOUND,
			Error::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
			Error::Unauthorized => StatusCode::UNAUTHORIZED,
			Error::PermissionDenied => StatusCode::FORBIDDEN,
			Error::ValidationError(_) => StatusCode::BAD_REQUEST,
			Error::Config(_) | Error::Upstream(_) | Error::Internal(_) | Error::Io(_) => {
				StatusCode::INTERNAL_SERVER_ERROR
			}
		}
	}

	/// Client-facing description. Internal failures stay generic.
	pub fn description(&self) -> String {
		match self {
			Error::NotFound => "Resource not found".to_string(),
			Error::NoRoute { method, path } => {
				format!("Resource {} using {} method does not exist.", path, method)
			}
			Error::MethodNotAllowed { method, path } => {
				format!("Resource {} does not support the {} method.", path, method)
			}
			Error::Unauthorized => "Authentication required".to_string(),
			Error::PermissionDenied => "Permission denied".to_string(),
			Error::ValidationError(msg) | Error::Upstream(msg) => msg.clone(),
			Error::Config(_) | Error::Internal(_) | Error::Io(_) => {
				"Internal server error".to_string()
			}
		}
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Error::Config(msg) => write!(f, "configuration error: {}", msg),
			Error::Upstream(msg) => write!(f, "upstream error: {}", msg),
			Error::Internal(msg) => write!(f, "internal error: {}", msg),
			Error::ValidationError(msg) => write!(f, "validation error: {}", msg),
			Error::Io(err) => write!(f, "io error: {}", err),
			_ => write!(f, "{}", self.description()),
		}
	}
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

impl From<serde_json::Error> for Error {
	fn from(err: serde_json::Error) -> Self {
		Self::Config(err.to_string())
	}
}

impl From<serde_yaml::Error> for Error {
	fn from(err: serde_yaml::Error) -> Self {
		Self::Config(err.to_string())
	}
}

impl From<FormRejection> for Error {
	fn from(err: FormRejection) -> Self {
		Self::ValidationError(err.body_text())
	}
}

/// A path segment that does not decode (e.g. invalid UTF-8) cannot name an
/// existing resource
impl From<PathRejection> for Error {
	fn from(err: PathRejection) -> Self {
		match err {
			PathRejection::FailedToDeserializePathParams(_) => Self::NotFound,
			other => Self::Internal(other.body_text()),
		}
	}
}

/// Error response body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
	pub status: u16,
	pub status_text: &'static str,
	pub description: String,
}

impl IntoResponse for Error {
	fn into_response(self) -> Response {
		let status = self.status_code();
		if status.is_server_error() {
			tracing::error!(error = %self, "request failed");
		}
		let status_text = status.canonical_reason().unwrap_or("Internal Server Error");
		let body = ErrorBody { status: status.as_u16(), status_text, description: self.description() };
		(status, Json(body)).into_response()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_status_table() {
		assert_eq!(Error::NotFound.status_code(), StatusCode::NOT_FOUND);
		assert_eq!(Error::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
		assert_eq!(Error::PermissionDenied.status_code(), StatusCode::FORBIDDEN);
		assert_eq!(Error::ValidationError("x".into()).status_code(), StatusCode::BAD_REQUEST);
		assert_eq!(
			Error::Upstream("down".into()).status_code(),
			StatusCode::INTERNAL_SERVER_ERROR
		);
		assert_eq!(
			Error::Config("dup".into()).status_code(),
			StatusCode::INTERNAL_SERVER_ERROR
		);
	}

	#[test]
	fn test_no_route_description() {
		let err = Error::NoRoute { method: "GET".into(), path: "/nope".into() };
		assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
		assert_eq!(err.description(), "Resource /nope using GET method does not exist.");
	}

	#[test]
	fn test_upstream_message_is_exposed() {
		assert_eq!(Error::Upstream("ldap timeout".into()).description(), "ldap timeout");
		assert_eq!(Error::Internal("secret detail".into()).description(), "Internal server error");
	}

	#[test]
	fn test_error_body_shape() {
		let body = ErrorBody {
			status: 404,
			status_text: "Not Found",
			description: "Resource not found".into(),
		};
		let json = serde_json::to_value(&body).unwrap();
		assert_eq!(
			json,
			serde_json::json!({
				"status": 404,
				"statusText": "Not Found",
				"description": "Resource not found"
			})
		);
	}
}

// vim: ts=4
