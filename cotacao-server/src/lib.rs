//! cotacao-server: HTTP service for the USD-BRL quote pipeline
//!
//! Each `GET /cotacao` fetches the current quote from the upstream
//! provider, appends it to a local SQLite ledger, and returns
//! `{"bid": "<string>"}`. The two slow phases run under independent
//! deadlines: the fetch is bounded by `UPSTREAM_TIMEOUT` and dies with the
//! inbound request, the persist is bounded by `PERSIST_TIMEOUT` rooted
//! fresh so an abandoned request cannot abort it.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

pub mod db;
pub mod error;
pub mod fetch;
pub mod routes;

pub use error::{ServerError, ServerResult};
pub use fetch::QuoteFetcher;
pub use routes::{router, AppState};

/// Upper bound on one upstream fetch.
pub const UPSTREAM_TIMEOUT: Duration = Duration::from_millis(200);

/// Upper bound on one quote insert. Deliberately tighter than the fetch
/// budget and never derived from the inbound request's deadline.
pub const PERSIST_TIMEOUT: Duration = Duration::from_millis(10);

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:8080)
    pub bind_addr: SocketAddr,
    /// Path of the SQLite quote ledger
    pub db_path: PathBuf,
    /// Base URL of the upstream quote provider
    pub upstream_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            db_path: PathBuf::from("cotacao.db"),
            upstream_url: "https://economia.awesomeapi.com.br".to_string(),
        }
    }
}

/// Run the HTTP server until Ctrl+C or SIGTERM.
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    db::bootstrap(&config.db_path).await?;

    let state = AppState {
        fetcher: Arc::new(QuoteFetcher::new(config.upstream_url)),
        db_path: config.db_path,
    };

    let app = router(state).layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(config.bind_addr).await?;
    info!("quote service listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            info!("received SIGTERM, starting shutdown");
        }
    }
}
