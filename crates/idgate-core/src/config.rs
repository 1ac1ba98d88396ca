//! Gateway configuration
//!
//! Configuration lives in a directory of YAML files. Every `*.yml`/`*.yaml`
//! file is parsed and the top-level keys are merged in file-name order, so
//! `10-local.yml` can override a key from `00-base.yml`. Sections the gateway
//! does not know (adapter settings, for instance) are kept and can be read
//! with [`GatewayConfig::section`].

use serde::{Deserialize, de::DeserializeOwned};
use serde_yaml::{Mapping, Value as YamlValue};
use std::path::{Path, PathBuf};

use crate::access::AccessRule;
use crate::prelude::*;

pub const DEFAULT_LISTEN: &str = "127.0.0.1:8080";
pub const ENV_LISTEN: &str = "IDGATE_LISTEN";

fn default_listen() -> Box<str> {
	DEFAULT_LISTEN.into()
}

#[derive(Clone, Debug, Deserialize)]
pub struct TlsConfig {
	pub cert: PathBuf,
	pub key: PathBuf,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct LogConfig {
	/// Default `tracing` filter when `RUST_LOG` is not set
	pub level: Option<Box<str>>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayConfig {
	#[serde(default = "default_listen")]
	pub listen: Box<str>,
	#[serde(default)]
	pub tls: Option<TlsConfig>,
	/// Entitlement that grants the `Admin` role
	pub entitlement: Box<str>,
	/// Raw feature catalog, parsed by [`Catalog::load`](crate::catalog::Catalog::load)
	#[serde(default)]
	pub features: serde_json::Value,
	#[serde(default)]
	pub url_map: Vec<AccessRule>,
	#[serde(default)]
	pub log: LogConfig,
	#[serde(flatten)]
	pub extra: Mapping,
	#[serde(skip)]
	pub config_dir: PathBuf,
}

impl GatewayConfig {
	/// Parse a single YAML document
	pub fn from_yaml(source: &str) -> ClResult<GatewayConfig> {
		let doc: YamlValue = serde_yaml::from_str(source)?;
		let mut merged = Mapping::new();
		merge_document(&mut merged, doc, "<inline>")?;
		Self::from_mapping(merged)
	}

	/// Load and merge every YAML file of `dir`
	pub fn load_dir(dir: &Path) -> ClResult<GatewayConfig> {
		let files = config_files(dir)?;
		if files.is_empty() {
			return Err(Error::Config(format!("no configuration files in {}", dir.display())));
		}

		let mut merged = Mapping::new();
		for file in &files {
			debug!(file = %file.display(), "Loading configuration file");
			let source = std::fs::read_to_string(file).map_err(|err| {
				Error::Config(format!("cannot read {}: {}", file.display(), err))
			})?;
			let doc: YamlValue = serde_yaml::from_str(&source)
				.map_err(|err| Error::Config(format!("{}: {}", file.display(), err)))?;
			merge_document(&mut merged, doc, &file.display().to_string())?;
		}

		let mut config = Self::from_mapping(merged)?;
		config.config_dir = dir.to_path_buf();
		Ok(config)
	}

	fn from_mapping(merged: Mapping) -> ClResult<GatewayConfig> {
		let config: GatewayConfig = serde_yaml::from_value(YamlValue::Mapping(merged))?;
		if config.entitlement.is_empty() {
			return Err(Error::Config("entitlement must not be empty".to_string()));
		}
		Ok(config)
	}

	/// Apply environment overrides (`IDGATE_LISTEN`)
	pub fn apply_env(&mut self) {
		if let Ok(listen) = std::env::var(ENV_LISTEN) {
			self.listen = listen.into();
		}
	}

	/// Deserialize an adapter-specific top-level section, if present
	pub fn section<T: DeserializeOwned>(&self, name: &str) -> ClResult<Option<T>> {
		match self.extra.get(name) {
			None | Some(YamlValue::Null) => Ok(None),
			Some(value) => serde_yaml::from_value(value.clone())
				.map(Some)
				.map_err(|err| Error::Config(format!("section {}: {}", name, err))),
		}
	}

	/// Resolve a path relative to the configuration directory
	pub fn resolve_path(&self, path: &Path) -> PathBuf {
		if path.is_absolute() { path.to_path_buf() } else { self.config_dir.join(path) }
	}
}

fn config_files(dir: &Path) -> ClResult<Vec<PathBuf>> {
	let entries = std::fs::read_dir(dir)
		.map_err(|err| Error::Config(format!("cannot read {}: {}", dir.display(), err)))?;
	let mut files = Vec::new();
	for entry in entries {
		let path = entry?.path();
		let is_yaml = path
			.extension()
			.and_then(|ext| ext.to_str())
			.is_some_and(|ext| ext == "yml" || ext == "yaml");
		if is_yaml && path.is_file() {
			files.push(path);
		}
	}
	files.sort();
	Ok(files)
}

fn merge_document(merged: &mut Mapping, doc: YamlValue, source: &str) -> ClResult<()> {
	match doc {
		YamlValue::Null => Ok(()),
		YamlValue::Mapping(map) => {
			for (key, value) in map {
				merged.insert(key, value);
			}
			Ok(())
		}
		_ => Err(Error::Config(format!("{}: top level must be a mapping", source))),
	}
}


// vim: ts=4
