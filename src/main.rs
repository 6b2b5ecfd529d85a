use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use movie_recommender::{
    api::{create_router, AppState, SessionStore},
    config::Config,
    data,
    services::{MetadataProvider, Recommender, TmdbProvider},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "movie_recommender=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Catalog and similarity matrix are loaded once and shared read-only
    let (catalog, matrix) = data::load_artifacts(&config.catalog_path, &config.similarity_path)?;

    let provider = TmdbProvider::new(config.tmdb_api_key.clone(), config.tmdb_api_url.clone());
    tracing::info!(
        provider = provider.name(),
        api_url = %config.tmdb_api_url,
        "Metadata provider ready"
    );

    let recommender = Recommender::new(
        Arc::new(catalog),
        Arc::new(matrix),
        Arc::new(provider),
        config.tmdb_image_base_url.clone(),
    )
    .with_count(config.recommendation_count);

    let state = AppState::new(recommender, SessionStore::new(config.session_ttl_secs));
    let app = create_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutdown signal received");
}
