//! Shared test harness for integration tests.
//!
//! Provides [`TestHarness`] which stands up a [`wiremock::MockServer`] in
//! place of TMDB, wires a full [`AppContext`] against it, and (via
//! [`with_server`](TestHarness::with_server)) serves the router on a
//! random port for HTTP-level testing.

use std::net::SocketAddr;
use std::sync::Arc;

use wiremock::MockServer;

use marquee::catalog::CatalogService;
use marquee::config::Config;
use marquee::server::{create_router, AppContext};
use marquee::tmdb::TmdbClient;

/// Test harness wrapping a fully-constructed [`AppContext`] backed by a
/// mock upstream.
pub struct TestHarness {
    pub mock: MockServer,
    pub ctx: AppContext,
}

impl TestHarness {
    /// Create a new harness whose TMDB client points at a fresh mock server.
    pub async fn new() -> Self {
        let mock = MockServer::start().await;
        let client = Arc::new(TmdbClient::with_base_url("test-token".into(), mock.uri()));
        let catalog = Arc::new(CatalogService::new(client));

        let ctx = AppContext {
            catalog,
            config: Arc::new(Config::default()),
        };

        Self { mock, ctx }
    }

    /// Start an Axum server on a random port and return the harness together
    /// with the bound socket address.
    pub async fn with_server() -> (Self, SocketAddr) {
        let harness = Self::new().await;
        let app = create_router(harness.ctx.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind test listener");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (harness, addr)
    }
}
