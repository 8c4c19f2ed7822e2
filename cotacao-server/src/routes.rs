//! The `/cotacao` request handler
//!
//! One linear pipeline per request: fetch the quote from the upstream
//! provider, open the store, persist, respond. The fetch runs under a
//! deadline derived inside the request future (so a disconnecting caller
//! cancels it); the persist runs under its own fresh deadline on a
//! detached task (so a disconnecting caller cannot).

use std::path::PathBuf;
use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use cotacao_core::{Deadline, Quote};
use tracing::debug;

use crate::db;
use crate::error::{ServerError, ServerResult};
use crate::fetch::QuoteFetcher;
use crate::UPSTREAM_TIMEOUT;

#[derive(Clone)]
pub struct AppState {
    pub fetcher: Arc<QuoteFetcher>,
    pub db_path: PathBuf,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/cotacao", get(get_cotacao))
        .with_state(state)
}

async fn get_cotacao(State(state): State<AppState>) -> ServerResult<Json<Quote>> {
    debug!("handling quote request");

    let quote = state
        .fetcher
        .fetch_latest(Deadline::after(UPSTREAM_TIMEOUT))
        .await?;

    let conn = db::open(&state.db_path)
        .await
        .map_err(ServerError::StoreOpen)?;

    // A persist failure masks the fetched quote: the caller gets a 500
    // even though a valid quote was in hand.
    let quote = db::spawn_save(conn, quote).await??;

    Ok(Json(quote))
}
