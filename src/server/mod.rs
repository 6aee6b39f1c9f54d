use crate::catalog::CatalogService;
use crate::config::Config;
use crate::tmdb::TmdbClient;
use anyhow::{Context, Result};
use axum::{
    http::{Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod routes_catalog;

/// How often the expired-entry sweep runs (the caches also drop expired
/// entries lazily on access).
const CACHE_PURGE_INTERVAL_SECS: u64 = 600;

/// Shared application context
#[derive(Clone)]
pub struct AppContext {
    pub catalog: Arc<CatalogService>,
    pub config: Arc<Config>,
}

/// Create the Axum router with all routes
pub fn create_router(ctx: AppContext) -> Router {
    // The proxy is consumed by browser frontends on arbitrary origins.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .merge(routes_catalog::catalog_routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}

async fn health_check() -> impl IntoResponse {
    StatusCode::OK
}

/// Periodically sweep expired entries from both cache layers.
pub fn start_cache_purge_task(
    catalog: Arc<CatalogService>,
    interval_secs: u64,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(interval_secs));
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        loop {
            interval.tick().await;
            catalog.purge_expired();
        }
    })
}

/// Start the HTTP server
pub async fn start_server(config: Config) -> Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("Invalid server address")?;

    let client = Arc::new(TmdbClient::new(config.tmdb.token.clone()));
    let catalog = Arc::new(CatalogService::with_ttl(
        client,
        Duration::from_secs(config.cache.ttl_secs),
    ));

    let purge_handle = start_cache_purge_task(Arc::clone(&catalog), CACHE_PURGE_INTERVAL_SECS);

    let ctx = AppContext {
        catalog,
        config: Arc::new(config),
    };

    let app = create_router(ctx);

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    purge_handle.abort();
    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => {}
            Err(e) => {
                tracing::error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
