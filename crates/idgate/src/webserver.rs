//! Listener setup, plain HTTP or TLS

use axum::Router;
use axum_server::tls_rustls::RustlsConfig;
use std::net::SocketAddr;
use tokio::net::TcpListener;

use crate::prelude::*;

async fn resolve(listen: &str) -> ClResult<SocketAddr> {
	tokio::net::lookup_host(listen)
		.await
		.map_err(|err| Error::Config(format!("invalid listen address {}: {}", listen, err)))?
		.next()
		.ok_or_else(|| Error::Config(format!("listen address {} did not resolve", listen)))
}

pub async fn serve(app: &App, router: Router) -> ClResult<()> {
	let addr = resolve(&app.opts.listen).await?;

	if let Some(tls) = &app.opts.tls {
		let config = RustlsConfig::from_pem_file(&tls.cert, &tls.key).await.map_err(|err| {
			error!("FATAL: Cannot load TLS certificate: {}", err);
			Error::Config(format!("cannot load TLS certificate: {}", err))
		})?;
		info!("Listening on HTTPS {}", addr);
		axum_server::bind_rustls(addr, config).serve(router.into_make_service()).await?;
	} else {
		let listener = TcpListener::bind(addr).await?;
		info!("Listening on HTTP {}", addr);
		axum::serve(listener, router).await?;
	}

	Ok(())
}

// vim: ts=4
