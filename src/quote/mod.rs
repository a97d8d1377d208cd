//! Swap quote retrieval.
//!
//! # Data Flow
//! ```text
//! QuoteRequest (validated)
//!     → client.rs (GET /swap/quote, caches bypassed)
//!     → QuoteResponse { quoteData.transaction }
//!     → TransactionDraft { to, data, value }
//! ```

pub mod client;
pub mod types;

pub use client::{QuoteClient, QuoteSource};
pub use types::{QuoteRequest, QuoteResponse, TransactionDraft};
