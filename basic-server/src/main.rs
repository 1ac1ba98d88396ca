use std::{env, path::PathBuf, process::ExitCode, sync::Arc};
use tracing::error;

use idgate::AppBuilder;
use idgate::config::GatewayConfig;
use idgate::error::ClResult;
use idgate_auth_adapter_upstream::AuthConfig;
use idgate_directory_adapter_memory::{DirectoryConfig, MemoryDirectoryAdapter};

const ENV_CONFIG_DIR: &str = "IDGATE_CONFIG_DIR";

async fn start(mut config: GatewayConfig) -> ClResult<()> {
	let auth_config: AuthConfig = config.section("auth")?.unwrap_or_default();
	let auth_adapter = idgate_auth_adapter_upstream::from_config(&auth_config)?;

	let mut directory_config: DirectoryConfig = config.section("directory")?.unwrap_or_default();
	directory_config.seed = directory_config.seed.map(|seed| config.resolve_path(&seed));
	let directory_adapter = Arc::new(MemoryDirectoryAdapter::from_config(&directory_config).await?);

	config.apply_env();

	let mut builder = AppBuilder::new();
	builder.config(config).auth_adapter(auth_adapter).directory_adapter(directory_adapter);
	builder.run().await
}

#[tokio::main]
async fn main() -> ExitCode {
	let config_dir =
		PathBuf::from(env::var(ENV_CONFIG_DIR).unwrap_or_else(|_| "./config".to_string()));

	let config = match GatewayConfig::load_dir(&config_dir) {
		Ok(config) => config,
		Err(err) => {
			eprintln!("FATAL: {}", err);
			return ExitCode::FAILURE;
		}
	};
	idgate::app::init_tracing(config.log.level.as_deref());

	match start(config).await {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => {
			error!("FATAL: {}", err);
			ExitCode::FAILURE
		}
	}
}

// vim: ts=4
