//! Provider-ready transaction types.

use serde::{Deserialize, Serialize};

use crate::error::{PipelineError, PipelineResult};

/// Chain ID type for strong typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChainId(pub u64);

impl From<u64> for ChainId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<ChainId> for u64 {
    fn from(id: ChainId) -> Self {
        id.0
    }
}

/// Fully hex-encoded transaction, ready for `eth_sendTransaction`.
///
/// `value` and `chain_id` are hex quantities; `to`, `from` and `data` are
/// carried exactly as received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionPayload {
    pub to: String,
    pub from: String,
    pub data: String,
    pub value: String,
    pub chain_id: String,
}

impl TransactionPayload {
    /// Serialize to the JSON object string passed as the provider parameter.
    pub fn to_json(&self) -> PipelineResult<String> {
        serde_json::to_string(self)
            .map_err(|e| PipelineError::InvalidRequest(format!("Unserializable payload: {}", e)))
    }
}
