//! Transfer server binary: configuration, observability, HTTP serving.

use std::sync::Arc;

use tracing::info;
use transfer_bridge::{BridgeConfig, HttpTransferClient, TransferService};
use transfer_server::{
    observability::{LogFormat, init_observability},
    routes::{AppState, build_router},
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_observability(LogFormat::from_env());

    let config_path =
        std::env::var("TRANSFER_CONFIG").unwrap_or_else(|_| "config.toml".to_owned());
    let config = BridgeConfig::load(&config_path)?;
    config.validate()?;

    let client = Arc::new(HttpTransferClient::new(&config.api)?);
    let state = AppState {
        service: TransferService::new(client),
        aggregation: config.aggregation.clone(),
    };

    let listener = tokio::net::TcpListener::bind(&config.server.listen).await?;
    info!(listen = %config.server.listen, environment = ?config.api.environment, "transfer server starting");

    axum::serve(listener, build_router(state)).await?;
    Ok(())
}
