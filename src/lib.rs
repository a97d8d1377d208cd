//! Swap transaction pipeline.
//!
//! Connects to an embedded wallet, fetches a swap quote from a pricing
//! service, turns the quote into a provider-ready transaction and submits
//! it through the wallet's JSON-RPC-style provider.
//!
//! ```text
//! WalletSession ──account──┐
//!                          ├─▶ TransactionBuilder ──payload──▶ ProviderDispatcher ──▶ tx hash
//! QuoteClient ───draft─────┘        (codec)
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod flow;
pub mod observability;
pub mod provider;
pub mod quote;
pub mod transaction;
pub mod wallet;

pub use config::PipelineConfig;
pub use error::{PipelineError, PipelineResult, ProviderFailure};
pub use flow::{FlowOutcome, SwapFlow};
