//! Error taxonomy shared by every pipeline stage.
//!
//! Each stage fails fast and hands the first error back to the caller
//! unmodified. Nothing in the pipeline retries.

use thiserror::Error;

use crate::wallet::types::ChainKind;

/// Opaque failure produced by an external wallet collaborator.
///
/// The pipeline never inspects it; it is carried to the caller as-is.
pub type ProviderFailure = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while building or submitting a swap.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Malformed input, detected before any I/O.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Transport failure (timeout, connection refused, ...).
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// Unexpected status or response shape.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The wallet session is not in the Connected state.
    #[error("Wallet not connected")]
    WalletNotConnected,

    /// Connected, but none of the accounts is an Ethereum account.
    #[error("No Ethereum account available")]
    NoEthereumAccount,

    /// A payload was requested for a non-Ethereum account.
    #[error("Unsupported chain kind: {0}")]
    UnsupportedChainKind(ChainKind),

    /// A decimal value does not fit in 256 bits.
    #[error("Value {0} exceeds the 256-bit range")]
    Overflow(String),

    /// Failure reported by the signing/broadcast collaborator.
    #[error("Provider error: {0}")]
    Provider(#[source] ProviderFailure),
}

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;
