//! cotacao-core: types shared by the quote service and client
//!
//! Holds the `Quote` domain type (the bid price for a currency pair, kept
//! as an opaque string end-to-end) and the `Deadline` primitive used to
//! bound the fetch and persist phases independently.

pub mod deadline;
pub mod quote;

pub use deadline::Deadline;
pub use quote::Quote;
