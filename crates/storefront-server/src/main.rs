use tracing_subscriber::EnvFilter;

use storefront_data::CatalogClient;
use storefront_server::{app, AppState, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("storefront_server=info,tower_http=info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let catalog = CatalogClient::new(&config.catalog_base_url)?;
    let state = AppState::new(catalog, config.session.clone());

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, catalog = %config.catalog_base_url, "storefront listening");

    axum::serve(listener, app(state)).await?;
    Ok(())
}
