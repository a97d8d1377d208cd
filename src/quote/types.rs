//! Quote request and response types.

use alloy::primitives::Address;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::codec;
use crate::error::{PipelineError, PipelineResult};

// Re-export SwapConfig from config module to avoid duplication
pub use crate::config::schema::SwapConfig;

/// Parameters for a single quote lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// Address that will sign and send the swap.
    pub user_address: String,
    pub chain_id: u64,
    pub sell_token: String,
    /// Base-10 amount in the sell token's smallest unit.
    pub sell_amount: String,
    pub buy_token: String,
    /// Slippage tolerance in basis points.
    pub slippage_bps: u32,
}

impl QuoteRequest {
    /// Build the request for `user_address` from configured swap parameters.
    pub fn for_swap(user_address: impl Into<String>, swap: &SwapConfig) -> Self {
        Self {
            user_address: user_address.into(),
            chain_id: swap.chain_id,
            sell_token: swap.sell_token.clone(),
            sell_amount: swap.sell_amount.clone(),
            buy_token: swap.buy_token.clone(),
            slippage_bps: swap.slippage_bps,
        }
    }

    /// Reject malformed fields before any I/O.
    ///
    /// A well-formed `sell_amount` above the 256-bit range is `Overflow`;
    /// every other malformed field is `InvalidRequest`.
    pub fn validate(&self) -> PipelineResult<()> {
        parse_address("user_address", &self.user_address)?;
        parse_address("sell_token", &self.sell_token)?;
        parse_address("buy_token", &self.buy_token)?;
        codec::parse_decimal(&self.sell_amount)?;
        Ok(())
    }
}

/// Parse a `0x`-prefixed 20-byte hex address, naming the offending field on failure.
pub fn parse_address(field: &str, value: &str) -> PipelineResult<Address> {
    if !value.starts_with("0x") {
        return Err(PipelineError::InvalidRequest(format!(
            "{} '{}' is not a 0x-prefixed address",
            field, value
        )));
    }
    Address::from_str(value).map_err(|e| {
        PipelineError::InvalidRequest(format!("{} '{}' is not a valid address: {}", field, value, e))
    })
}

/// Unsigned call parameters taken from a quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionDraft {
    pub to: String,
    /// Opaque call data, hex encoded.
    pub data: String,
    /// Native value to send, base-10.
    pub value: String,
}

/// Shape of the pricing service's quote response.
///
/// Only the transaction sub-object is read; other fields are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub quote_data: QuoteData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuoteData {
    pub transaction: TransactionDraft,
}

impl QuoteResponse {
    pub fn into_draft(self) -> TransactionDraft {
        self.quote_data.transaction
    }
}
