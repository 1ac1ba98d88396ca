//! App state type

use std::path::Path;
use std::sync::Arc;

use crate::access::UrlMap;
use crate::catalog::CatalogStore;
use crate::config::TlsConfig;

use idgate_types::auth_adapter::AuthAdapter;
use idgate_types::directory_adapter::DirectoryAdapter;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct AppState {
	pub catalog: CatalogStore,
	pub url_map: UrlMap,
	pub opts: AppOpts,

	pub auth_adapter: Arc<dyn AuthAdapter>,
	pub directory_adapter: Arc<dyn DirectoryAdapter>,
}

pub type App = Arc<AppState>;

#[derive(Debug)]
pub struct AppOpts {
	pub listen: Box<str>,
	pub tls: Option<TlsConfig>,
	/// Entitlement that grants the `Admin` role
	pub admin_entitlement: Box<str>,
	/// Directory the configuration was loaded from, used for catalog reloads
	pub config_dir: Option<Box<Path>>,
}

// vim: ts=4
