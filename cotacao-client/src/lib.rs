//! cotacao-client: single-shot client for the quote service
//!
//! One bounded GET against the local quote service, then one artifact
//! write. There is no retry and no recovery path: every failure
//! propagates out of [`run`] and is fatal to the process.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use cotacao_core::Quote;
use tracing::info;

/// Total budget for the round trip to the quote service.
///
/// Deliberately tighter than the sum of the service's own worst-case
/// fetch and persist budgets, so the client may time out on requests the
/// service would still complete.
pub const REQUEST_TIMEOUT: Duration = Duration::from_millis(300);

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Quote service base URL
    pub endpoint: String,
    /// Artifact path, overwritten on every run
    pub output: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8080".to_string(),
            output: PathBuf::from("cotacao.txt"),
        }
    }
}

/// Fetch the current quote and write the artifact.
pub async fn run(config: &ClientConfig) -> Result<()> {
    let client = reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .context("failed to build HTTP client")?;

    let url = format!("{}/cotacao", config.endpoint);
    let response = client
        .get(&url)
        .send()
        .await
        .context("quote service unreachable")?;

    let status = response.status();
    if !status.is_success() {
        bail!("quote service returned {status}");
    }

    let quote: Quote = response
        .json()
        .await
        .context("failed to decode quote response")?;

    fs::write(&config.output, format!("Dólar: {}", quote.bid))
        .with_context(|| format!("failed to write {}", config.output.display()))?;

    info!(bid = %quote.bid, path = %config.output.display(), "quote saved");
    Ok(())
}
