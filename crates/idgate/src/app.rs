//! App builder - constructs and runs the gateway

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::auth_adapter::AuthAdapter;
use crate::directory_adapter::DirectoryAdapter;
use crate::prelude::*;
use crate::{reload, routes, webserver};
use idgate_core::access::UrlMap;
pub use idgate_core::app::{App, AppOpts, AppState, VERSION};
use idgate_core::{Catalog, CatalogStore, GatewayConfig};

#[derive(Default)]
pub struct AppBuilder {
	config: Option<GatewayConfig>,
	auth_adapter: Option<Arc<dyn AuthAdapter>>,
	directory_adapter: Option<Arc<dyn DirectoryAdapter>>,
}

/// `RUST_LOG` wins over the configured level. Safe to call more than once.
pub fn init_tracing(level: Option<&str>) {
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(level.unwrap_or("info")));
	let _ = tracing_subscriber::fmt().with_env_filter(filter).with_target(false).try_init();
}

impl AppBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn config(&mut self, config: GatewayConfig) -> &mut Self {
		self.config = Some(config);
		self
	}

	// Adapters
	pub fn auth_adapter(&mut self, auth_adapter: Arc<dyn AuthAdapter>) -> &mut Self {
		self.auth_adapter = Some(auth_adapter);
		self
	}
	pub fn directory_adapter(&mut self, directory_adapter: Arc<dyn DirectoryAdapter>) -> &mut Self {
		self.directory_adapter = Some(directory_adapter);
		self
	}

	/// Assemble the shared state without binding any socket
	pub fn build(self) -> ClResult<App> {
		let Some(config) = self.config else {
			error!("FATAL: No configuration loaded");
			return Err(Error::Internal("No configuration loaded".to_string()));
		};
		let Some(auth_adapter) = self.auth_adapter else {
			error!("FATAL: No auth adapter configured");
			return Err(Error::Internal("No auth adapter configured".to_string()));
		};
		let Some(directory_adapter) = self.directory_adapter else {
			error!("FATAL: No directory adapter configured");
			return Err(Error::Internal("No directory adapter configured".to_string()));
		};

		let catalog = Catalog::load(&config.features).inspect_err(|err| {
			error!("FATAL: Invalid feature catalog: {}", err);
		})?;
		info!("Loaded {} features", catalog.len());

		let url_map = UrlMap::new(config.url_map);
		let config_dir =
			(!config.config_dir.as_os_str().is_empty()).then(|| config.config_dir.into_boxed_path());

		Ok(Arc::new(AppState {
			catalog: CatalogStore::new(catalog),
			url_map,
			opts: AppOpts {
				listen: config.listen,
				tls: config.tls,
				admin_entitlement: config.entitlement,
				config_dir,
			},
			auth_adapter,
			directory_adapter,
		}))
	}

	pub async fn run(self) -> ClResult<()> {
		let level = self.config.as_ref().and_then(|config| config.log.level.clone());
		init_tracing(level.as_deref());

		info!(" _     _             _");
		info!("(_) __| | __ _  __ _| |_ ___");
		info!("| |/ _` |/ _` |/ _` | __/ _ \\");
		info!("| | (_| | (_| | (_| | ||  __/");
		info!("|_|\\__,_|\\__, |\\__,_|\\__\\___|");
		info!("         |___/");
		info!("V{}", VERSION);
		info!("");

		rustls::crypto::CryptoProvider::install_default(
			rustls::crypto::aws_lc_rs::default_provider(),
		)
		.map_err(|e| {
			error!("FATAL: Failed to install default crypto provider: {:?}", e);
			Error::Internal("Failed to install default crypto provider".to_string())
		})?;

		let app = self.build()?;
		let router = routes::init(app.clone());
		reload::watch(app.clone())?;

		webserver::serve(&app, router).await
	}
}


// vim: ts=4
