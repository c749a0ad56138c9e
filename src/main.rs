use std::sync::Arc;

use scentify_api::{
    api::{create_router, AppState},
    config::Config,
    services::{providers::fragella::FragellaProvider, Catalog},
    store,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("scentify_api=info,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let provider = Arc::new(FragellaProvider::new(
        config.fragella_api_key.clone(),
        config.fragella_api_url.clone(),
        config.request_timeout(),
    )?);

    let catalog = if config.seed_catalog {
        Catalog::seed(provider.as_ref()).await
    } else {
        Catalog::new()
    };

    let (interactions, inventory) = store::open(&config.data_dir).await?;

    let state = AppState::new(provider, catalog, interactions, inventory);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!(address = %config.bind_address(), "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
