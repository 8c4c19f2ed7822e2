//! Error types for cotacao-server
//!
//! One variant per failure phase. The wire contract collapses every
//! server-side failure to `500` with a plain-text diagnostic; the variant
//! (and the tracing log emitted when the response is built) is what keeps
//! the phases distinguishable locally.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

pub type ServerResult<T> = Result<T, ServerError>;

#[derive(Error, Debug)]
pub enum ServerError {
    /// Transport or decode failure talking to the upstream provider.
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    /// The upstream answered but carried no data for the requested pair.
    /// Logically distinct from a transport or decode failure.
    #[error("no quote data for pair {0}")]
    PairNotFound(String),

    /// The upstream fetch deadline elapsed.
    #[error("upstream fetch timed out")]
    UpstreamTimeout,

    #[error("failed to open quote store: {0}")]
    StoreOpen(#[source] sqlx::Error),

    #[error("failed to write quote: {0}")]
    StoreWrite(#[source] sqlx::Error),

    /// The persistence deadline elapsed mid-write.
    #[error("persistence timed out")]
    PersistTimeout,

    /// The persistence deadline was already expired before the write
    /// started; the fail-fast guard rejected it without touching the store.
    #[error("persistence deadline already expired")]
    Cancelled,

    #[error("persistence task failed: {0}")]
    PersistTask(#[from] tokio::task::JoinError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        // Phase-level diagnostic only; the wire never says which phase
        // timed out or why.
        let body = match &self {
            ServerError::Upstream(_)
            | ServerError::PairNotFound(_)
            | ServerError::UpstreamTimeout => "failed to fetch quote",
            ServerError::StoreOpen(_) => "failed to open quote store",
            ServerError::StoreWrite(_)
            | ServerError::PersistTimeout
            | ServerError::Cancelled
            | ServerError::PersistTask(_) => "failed to save quote",
        };

        tracing::error!(error = %self, "request failed");

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
