//! Deadline primitive for the chained-timeout policy
//!
//! Each phase of a request (upstream fetch, persistence) runs under its own
//! `Deadline`. The two are never derived from each other: the persist
//! deadline is rooted fresh so that an inbound request going away cannot
//! abort a write already in flight.

use std::time::Duration;

use tokio::time::Instant;

/// A point in time after which an operation must not start and in-flight
/// work must be abandoned.
///
/// Built on `tokio::time::Instant`, so tests running under the paused
/// clock (`start_paused = true`) see deterministic expiry.
#[derive(Debug, Clone, Copy)]
pub struct Deadline(Instant);

impl Deadline {
    /// Deadline `timeout` from now.
    pub fn after(timeout: Duration) -> Self {
        Self(Instant::now() + timeout)
    }

    /// True once the deadline has passed.
    ///
    /// This is the fail-fast guard check: it detects a deadline that
    /// already expired, not one that expires mid-operation.
    pub fn expired(&self) -> bool {
        Instant::now() >= self.0
    }

    /// Time budget left, saturating to zero.
    pub fn remaining(&self) -> Duration {
        self.0.saturating_duration_since(Instant::now())
    }
}
