//! Merge a quote draft and the signing account into a payload.

use crate::codec;
use crate::error::{PipelineError, PipelineResult};
use crate::quote::TransactionDraft;
use crate::transaction::payload::{ChainId, TransactionPayload};
use crate::wallet::WalletAccount;

/// Transaction builder bound to one chain.
#[derive(Debug, Clone, Copy)]
pub struct TransactionBuilder {
    chain_id: ChainId,
}

impl TransactionBuilder {
    pub fn new(chain_id: impl Into<ChainId>) -> Self {
        Self {
            chain_id: chain_id.into(),
        }
    }

    pub fn chain_id(&self) -> ChainId {
        self.chain_id
    }

    /// Build the payload for `account` on this builder's chain.
    pub fn build(
        &self,
        draft: &TransactionDraft,
        account: &WalletAccount,
    ) -> PipelineResult<TransactionPayload> {
        build_payload(draft, account, self.chain_id)
    }
}

/// Build a provider-ready payload.
///
/// # Errors
/// * `UnsupportedChainKind` - `account` is not an Ethereum account
/// * `InvalidRequest` / `Overflow` - `draft.value` is not a 256-bit decimal
pub fn build_payload(
    draft: &TransactionDraft,
    account: &WalletAccount,
    chain_id: ChainId,
) -> PipelineResult<TransactionPayload> {
    if !account.is_ethereum() {
        return Err(PipelineError::UnsupportedChainKind(account.chain_kind));
    }

    let payload = TransactionPayload {
        to: draft.to.clone(),
        from: account.address.clone(),
        data: draft.data.clone(),
        value: codec::decimal_to_hex(&draft.value)?,
        chain_id: codec::u64_to_hex(chain_id.0),
    };

    tracing::debug!(
        to = %payload.to,
        from = %payload.from,
        value = %payload.value,
        chain_id = %payload.chain_id,
        data_len = payload.data.len(),
        "Transaction payload built"
    );
    Ok(payload)
}
