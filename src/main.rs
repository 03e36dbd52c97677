//! InfluxDB HTTP auth proxy.
//!
//! ```text
//!   client ──▶ proxy (--address) ──▶ upstream (--upstream)
//!                 │
//!                 ├─ strip hop-by-hop headers
//!                 └─ append ?u=<username>&p=<password>
//! ```

use clap::Parser;

use influxdb_http_auth_proxy::config::{validate_config, CliArgs};
use influxdb_http_auth_proxy::lifecycle::{bind_listener, shutdown_signal};
use influxdb_http_auth_proxy::observability::init_logging;
use influxdb_http_auth_proxy::{HttpServer, ProxyError};

#[tokio::main]
async fn main() -> Result<(), ProxyError> {
    let args = CliArgs::parse();
    init_logging();

    if let Err(e) = run(args).await {
        tracing::error!(error = %e, "Fatal error");
        return Err(e);
    }

    tracing::info!("Shutdown complete");
    Ok(())
}

async fn run(args: CliArgs) -> Result<(), ProxyError> {
    let config = args.into_config()?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config = ?config,
        "influxdb-http-auth-proxy starting"
    );
    for warning in validate_config(&config) {
        tracing::warn!("{}", warning);
    }

    let listener = bind_listener(&config.address).await?;

    let server = HttpServer::new(config);
    server.run(listener, shutdown_signal()).await?;
    Ok(())
}
