//! Products API - REST server

use core_config::tracing::{init_tracing, install_color_eyre};
use products_api::{api, app, config::Config};
use tracing::info;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let repository = api::products::repository(&config.seed)?;
    let router = app(repository, &config)?;

    info!(
        "Starting {} v{} on port {}",
        config.app.name, config.app.version, config.server.port
    );

    axum_helpers::create_app(router, &config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Products API shutdown complete");
    Ok(())
}
