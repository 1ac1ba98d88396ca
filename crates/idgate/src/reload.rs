//! Feature catalog reload
//!
//! Only the catalog is swapped; listen address, TLS, adapters and the URL map
//! need a restart.

use std::path::Path;

use crate::prelude::*;
use idgate_core::{Catalog, GatewayConfig};

/// Re-read the configuration directory and publish the new catalog.
/// On error the current catalog stays in place.
pub fn reload_catalog(app: &App, dir: &Path) -> ClResult<usize> {
	let config = GatewayConfig::load_dir(dir)?;
	let catalog = Catalog::load(&config.features)?;
	let count = catalog.len();
	app.catalog.replace(catalog);
	Ok(count)
}

/// Reload the catalog on every `SIGHUP`
#[cfg(unix)]
pub fn watch(app: App) -> ClResult<()> {
	use tokio::signal::unix::{SignalKind, signal};

	let Some(dir) = app.opts.config_dir.clone() else {
		debug!("No configuration directory, catalog reload disabled");
		return Ok(());
	};
	let mut hangup = signal(SignalKind::hangup())?;

	tokio::spawn(async move {
		while hangup.recv().await.is_some() {
			info!("SIGHUP received, reloading feature catalog from {}", dir.display());
			let task_app = app.clone();
			let task_dir = dir.clone();
			match tokio::task::spawn_blocking(move || reload_catalog(&task_app, &task_dir)).await {
				Ok(Ok(count)) => info!("Reloaded {} features", count),
				Ok(Err(err)) => error!("Catalog reload failed, keeping previous catalog: {}", err),
				Err(err) => error!("Catalog reload task failed: {}", err),
			}
		}
	});

	Ok(())
}

#[cfg(not(unix))]
pub fn watch(_app: App) -> ClResult<()> {
	Ok(())
}

// vim: ts=4
