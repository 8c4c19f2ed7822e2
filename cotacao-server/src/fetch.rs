//! Upstream quote fetcher
//!
//! One GET against the provider's `/json/last/USD-BRL` endpoint, bounded
//! by the caller's deadline. No retry, no caching: any transport, decode,
//! or timeout failure propagates to the handler as-is.

use std::collections::HashMap;

use cotacao_core::{Deadline, Quote};
use tokio::time::timeout;
use tracing::debug;

use crate::error::{ServerError, ServerResult};

/// Pair identifier the provider keys its response object by.
pub const CURRENCY_PAIR: &str = "USDBRL";

pub struct QuoteFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl QuoteFetcher {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetch the latest USD-BRL quote within `deadline`.
    ///
    /// The provider responds with an object keyed by pair identifier,
    /// e.g. `{"USDBRL": {"bid": "5.43", ...}}`. A response that decodes
    /// but lacks the pair is reported as `PairNotFound`, distinct from
    /// transport and decode failures. The bid string is never parsed.
    pub async fn fetch_latest(&self, deadline: Deadline) -> ServerResult<Quote> {
        let url = format!("{}/json/last/USD-BRL", self.base_url);

        let fetch = async {
            let response = self.client.get(&url).send().await?.error_for_status()?;
            let mut pairs: HashMap<String, Quote> = response.json().await?;
            pairs
                .remove(CURRENCY_PAIR)
                .ok_or_else(|| ServerError::PairNotFound(CURRENCY_PAIR.to_string()))
        };

        let quote = timeout(deadline.remaining(), fetch)
            .await
            .map_err(|_| ServerError::UpstreamTimeout)??;

        debug!(bid = %quote.bid, "fetched quote");
        Ok(quote)
    }
}
