mod api;
mod middleware;
mod state;

use std::time::Duration;

use tracing_subscriber::EnvFilter;

use freshlink_catalog::{CatalogSources, Favorites, JsonFileStore};

use crate::api::build_app;
use crate::state::{AppState, FavoritesStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = freshlink_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let sources = CatalogSources::from_config(&config)?;
    let store: FavoritesStore = Box::new(JsonFileStore::new(&config.favorites_path));
    let favorites = Favorites::open(store)?;

    let state = AppState::new(sources, config.contact_settings(), favorites)
        .with_load_more_latency(Duration::from_millis(config.load_more_latency_ms));

    // Warm the cache; a failure here is retried on the first request.
    if let Err(e) = state.catalogs.get().await {
        tracing::warn!(error = %e, "initial catalog load failed");
    }

    let app = build_app(state);

    tracing::info!(env = %config.env, addr = %config.bind_addr, "freshlink server listening");
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
