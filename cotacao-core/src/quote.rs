//! The quote domain type

use serde::{Deserialize, Serialize};

/// A currency quote as obtained from the upstream provider.
///
/// The bid is an uninterpreted string: no component of the pipeline parses
/// or validates it as a number, so a malformed bid flows through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub bid: String,
}

impl Quote {
    pub fn new(bid: impl Into<String>) -> Self {
        Self { bid: bid.into() }
    }
}
