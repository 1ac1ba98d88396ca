//! Custom middlewares

use axum::{
	extract::{Request, State},
	middleware::Next,
	response::Response,
};
use std::time::Instant;
use tracing::Instrument;

use crate::prelude::*;

/// Resolve the caller through the auth adapter and store the [`Principal`]
/// in the request extensions. Anonymous requests pass through untouched; a
/// credential that fails verification is rejected here.
pub async fn authenticate(
	State(app): State<App>,
	mut req: Request,
	next: Next,
) -> ClResult<Response> {
	match app.auth_adapter.authenticate(req.headers()).await {
		Ok(Some(principal)) => {
			debug!(name = %principal.display_name(), "Authenticated");
			req.extensions_mut().insert(principal);
		}
		Ok(None) => {}
		Err(err) => {
			warn!(error = %err, path = %req.uri().path(), "Authentication failed");
			return Err(err);
		}
	}

	Ok(next.run(req).await)
}

/// Request/response log lines with timing
pub async fn log_request(req: Request, next: Next) -> Response {
	let start = Instant::now();
	let method = req.method().clone();
	let path = req.uri().path().to_string();
	let span = info_span!("REQ", req = %path);

	async move {
		info!("REQ {} {}", method, path);
		let res = next.run(req).await;

		let status = res.status();
		let elapsed = start.elapsed().as_millis();
		if status.is_client_error() || status.is_server_error() {
			warn!("RES: {} tm:{}", status, elapsed);
		} else {
			info!("RES: {} tm:{}", status, elapsed);
		}
		res
	}
	.instrument(span)
	.await
}

// vim: ts=4
