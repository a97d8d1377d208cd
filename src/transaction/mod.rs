//! Transaction construction.
//!
//! # Data Flow
//! ```text
//! TransactionDraft (quote) + WalletAccount (session) + ChainId (config)
//!     → builder.rs (kind check, codec for value/chainId)
//!     → TransactionPayload (immutable, hex quantities)
//! ```

pub mod builder;
pub mod payload;

pub use builder::{build_payload, TransactionBuilder};
pub use payload::{ChainId, TransactionPayload};
