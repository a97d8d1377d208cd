//! Configuration schema definitions.
//!
//! All sections default to the values of the reference deployment, so an
//! empty file is a valid configuration.

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct PipelineConfig {
    /// Pricing service settings.
    pub quote: QuoteConfig,

    /// What to swap, and on which chain.
    pub swap: SwapConfig,

    /// JSON-RPC node used by the bundled wallet adapter.
    pub node: NodeConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Pricing service configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct QuoteConfig {
    /// Service root; `swap/quote` is appended.
    pub base_url: String,

    /// Transport timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://tx.interface.social".to_string(),
            timeout_secs: 15,
        }
    }
}

/// Swap parameters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SwapConfig {
    /// Chain ID (8453 for Base).
    pub chain_id: u64,

    /// Token sold. The `0xeeee...` sentinel means the native asset.
    pub sell_token: String,

    /// Amount sold, base-10, in the token's smallest unit.
    pub sell_amount: String,

    /// Token bought.
    pub buy_token: String,

    /// Slippage tolerance in basis points.
    pub slippage_bps: u32,
}

impl Default for SwapConfig {
    fn default() -> Self {
        Self {
            chain_id: 8453,
            sell_token: "0xeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeee".to_string(),
            sell_amount: "10000000000000".to_string(),
            buy_token: "0x0578d8a44db98b23bf096a382e016e29a5ce0ffe".to_string(),
            slippage_bps: 100,
        }
    }
}

/// JSON-RPC node configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct NodeConfig {
    /// JSON-RPC endpoint URL.
    pub rpc_url: String,

    /// RPC request timeout in seconds.
    pub rpc_timeout_secs: u64,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            rpc_url: "http://localhost:8545".to_string(),
            rpc_timeout_secs: 10,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
