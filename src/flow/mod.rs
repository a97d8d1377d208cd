//! End-to-end swap and sign flows.
//!
//! # States
//! ```text
//! Disconnected → Connecting → Connected
//!     → quote fetched → payload built → dispatched → Success(hash) | Failure(error)
//! ```
//!
//! Both terminal states are final. There is no retry or rollback; a caller
//! that wants another attempt starts a new flow, which reuses the existing
//! connection if the wallet is still Connected.

use std::fmt;
use std::sync::Arc;
use tracing::Instrument;
use uuid::Uuid;

use crate::error::{PipelineError, PipelineResult};
use crate::observability::metrics;
use crate::provider::{ProviderDispatcher, RpcCall};
use crate::quote::types::SwapConfig;
use crate::quote::{QuoteRequest, QuoteSource};
use crate::transaction::TransactionBuilder;
use crate::wallet::{WalletAccount, WalletConnector, WalletSession};

/// Terminal state of a flow.
#[derive(Debug)]
pub enum FlowOutcome {
    /// Provider result: transaction hash or signature.
    Success(String),
    Failure(PipelineError),
}

impl FlowOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, FlowOutcome::Success(_))
    }

    pub fn into_result(self) -> PipelineResult<String> {
        match self {
            FlowOutcome::Success(v) => Ok(v),
            FlowOutcome::Failure(e) => Err(e),
        }
    }
}

impl From<PipelineResult<String>> for FlowOutcome {
    fn from(result: PipelineResult<String>) -> Self {
        match result {
            Ok(v) => FlowOutcome::Success(v),
            Err(e) => FlowOutcome::Failure(e),
        }
    }
}

impl fmt::Display for FlowOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlowOutcome::Success(v) => write!(f, "SUCCESS: {}", v),
            FlowOutcome::Failure(e) => write!(f, "FAILURE: {}", e),
        }
    }
}

/// Drives wallet → quote → build → dispatch for one wallet.
#[derive(Clone)]
pub struct SwapFlow {
    session: WalletSession,
    quotes: Arc<dyn QuoteSource>,
}

impl SwapFlow {
    pub fn new(connector: Arc<dyn WalletConnector>, quotes: Arc<dyn QuoteSource>) -> Self {
        Self {
            session: WalletSession::new(connector),
            quotes,
        }
    }

    pub fn session(&self) -> &WalletSession {
        &self.session
    }

    /// Connect if needed, then select the signing account.
    async fn signing_account(&self) -> PipelineResult<WalletAccount> {
        if !self.session.current_state().is_connected() {
            self.session.request_connect().await?;
        }
        self.session.select_account()
    }

    /// Fetch a quote for `swap`, build the transaction and send it.
    pub async fn execute_swap(&self, swap: &SwapConfig) -> FlowOutcome {
        let span = tracing::info_span!("swap", flow_id = %Uuid::new_v4(), chain_id = swap.chain_id);
        let outcome = FlowOutcome::from(self.try_swap(swap).instrument(span).await);
        metrics::record_flow("swap", outcome.is_success());
        outcome
    }

    async fn try_swap(&self, swap: &SwapConfig) -> PipelineResult<String> {
        let account = self.signing_account().await?;
        tracing::info!(address = %account.address, "Signing account selected");

        let request = QuoteRequest::for_swap(account.address.clone(), swap);
        let draft = self.quotes.fetch_quote(&request).await?;

        let payload = TransactionBuilder::new(swap.chain_id).build(&draft, &account)?;
        let dispatcher = ProviderDispatcher::new(self.session.provider_for(&account)?);
        let tx_hash = dispatcher.dispatch(RpcCall::SendTransaction(payload)).await?;

        tracing::info!(tx_hash = %tx_hash, "Swap transaction submitted");
        Ok(tx_hash)
    }

    /// Sign `message` with the selected account.
    pub async fn sign_message(&self, message: &str) -> FlowOutcome {
        let span = tracing::info_span!("sign", flow_id = %Uuid::new_v4());
        let outcome = FlowOutcome::from(self.try_sign(message).instrument(span).await);
        metrics::record_flow("sign", outcome.is_success());
        outcome
    }

    async fn try_sign(&self, message: &str) -> PipelineResult<String> {
        let account = self.signing_account().await?;
        let dispatcher = ProviderDispatcher::new(self.session.provider_for(&account)?);
        dispatcher
            .dispatch(RpcCall::PersonalSign {
                message: message.to_string(),
                address: account.address,
            })
            .await
    }
}

impl fmt::Debug for SwapFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwapFlow")
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_display() {
        let ok = FlowOutcome::Success("0x5e1f".into());
        assert!(ok.is_success());
        assert_eq!(ok.to_string(), "SUCCESS: 0x5e1f");

        let failed = FlowOutcome::from(Err::<String, _>(PipelineError::NoEthereumAccount));
        assert!(!failed.is_success());
        assert_eq!(failed.to_string(), "FAILURE: No Ethereum account available");
        assert!(matches!(
            failed.into_result(),
            Err(PipelineError::NoEthereumAccount)
        ));
    }
}
