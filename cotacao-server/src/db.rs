//! SQLite persistence for quotes
//!
//! The store is a write-only ledger from the service's perspective: one
//! appended row per successfully fetched quote, never read back. Each
//! request opens its own connection and closes it on every exit path;
//! there is no pool.

use std::path::Path;

use cotacao_core::{Deadline, Quote};
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{ConnectOptions, Connection, SqliteConnection};
use tokio::task::JoinHandle;
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::error::{ServerError, ServerResult};
use crate::PERSIST_TIMEOUT;

/// Create the quote table if it does not exist yet. Run once at startup.
pub async fn bootstrap(db_path: &Path) -> Result<(), sqlx::Error> {
    let mut conn = open(db_path).await?;
    let result = sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS cotacao (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            bid TEXT
        );
    "#,
    )
    .execute(&mut conn)
    .await;
    // The query error is the interesting one; a close failure must not
    // mask it.
    if let Err(err) = conn.close().await {
        warn!(error = %err, "failed to close quote store");
    }
    result?;
    debug!(path = %db_path.display(), "quote store ready");
    Ok(())
}

/// Open a fresh connection to the store.
pub async fn open(db_path: &Path) -> Result<SqliteConnection, sqlx::Error> {
    SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true)
        .connect()
        .await
}

/// Append one quote row within `deadline`.
///
/// Fail-fast guard: a deadline that has already expired is rejected with
/// `Cancelled` before the insert is issued. The guard and the insert are
/// not atomic, so expiry between the two is caught by the surrounding
/// timeout instead.
pub async fn save_quote(
    conn: &mut SqliteConnection,
    deadline: Deadline,
    quote: &Quote,
) -> ServerResult<()> {
    if deadline.expired() {
        return Err(ServerError::Cancelled);
    }

    timeout(
        deadline.remaining(),
        sqlx::query("INSERT INTO cotacao (bid) VALUES (?)")
            .bind(&quote.bid)
            .execute(&mut *conn),
    )
    .await
    .map_err(|_| ServerError::PersistTimeout)?
    .map_err(ServerError::StoreWrite)?;

    debug!(bid = %quote.bid, "quote saved");
    Ok(())
}

/// Persist `quote` on a detached task under a fresh `PERSIST_TIMEOUT`
/// deadline, closing the connection on every exit path.
///
/// The deadline is rooted here, not derived from the inbound request, and
/// the task is spawned: dropping the returned handle (an abandoned
/// request) detaches the write instead of cancelling it.
pub fn spawn_save(mut conn: SqliteConnection, quote: Quote) -> JoinHandle<ServerResult<Quote>> {
    tokio::spawn(async move {
        let result = save_quote(&mut conn, Deadline::after(PERSIST_TIMEOUT), &quote).await;
        if let Err(err) = conn.close().await {
            warn!(error = %err, "failed to close quote store");
        }
        result.map(|()| quote)
    })
}
