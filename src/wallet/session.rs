//! Wallet session: observes connection state and selects the signing account.

use std::sync::Arc;
use tokio::sync::watch;

use crate::error::{PipelineError, PipelineResult};
use crate::provider::WalletProvider;
use crate::wallet::types::{ConnectionState, WalletAccount, WalletConnector};

/// Read-only view over a wallet collaborator's connection state.
///
/// The session never writes the state; the collaborator's [`StateUpdater`]
/// does. Each read returns an owned snapshot.
///
/// [`StateUpdater`]: crate::wallet::StateUpdater
#[derive(Clone)]
pub struct WalletSession {
    connector: Arc<dyn WalletConnector>,
    state: watch::Receiver<ConnectionState>,
}

impl WalletSession {
    /// Create a session bound to a wallet collaborator.
    pub fn new(connector: Arc<dyn WalletConnector>) -> Self {
        let state = connector.subscribe();
        Self { connector, state }
    }

    /// Snapshot of the current connection state.
    pub fn current_state(&self) -> ConnectionState {
        self.state.borrow().clone()
    }

    /// Ask the collaborator to connect and wait until it settles.
    ///
    /// Resolves with the `Connected` state. The collaborator may publish
    /// before or after its `connect` call returns. An error from `connect`
    /// surfaces as [`PipelineError::Provider`]; a state that settles back to
    /// `Disconnected`, or a closed channel, is [`PipelineError::WalletNotConnected`].
    pub async fn request_connect(&self) -> PipelineResult<ConnectionState> {
        tracing::info!("Requesting wallet connection");

        // Only publishes made after this point count as the attempt's outcome.
        let mut rx = self.state.clone();
        rx.borrow_and_update();

        self.connector
            .connect()
            .await
            .map_err(PipelineError::Provider)?;

        let mut updated = false;
        loop {
            let state = rx.borrow_and_update().clone();
            match &state {
                ConnectionState::Connected(accounts) => {
                    tracing::info!(accounts = accounts.len(), "Wallet connected");
                    return Ok(state);
                }
                ConnectionState::Disconnected if updated => {
                    tracing::warn!("Wallet did not connect");
                    return Err(PipelineError::WalletNotConnected);
                }
                _ => {}
            }

            rx.changed()
                .await
                .map_err(|_| PipelineError::WalletNotConnected)?;
            updated = true;
        }
    }

    /// Pick the first Ethereum account in wallet order.
    pub fn select_account(&self) -> PipelineResult<WalletAccount> {
        match &*self.state.borrow() {
            ConnectionState::Connected(accounts) => accounts
                .iter()
                .find(|a| a.is_ethereum())
                .cloned()
                .ok_or(PipelineError::NoEthereumAccount),
            _ => Err(PipelineError::WalletNotConnected),
        }
    }

    /// Signing provider for an account of this wallet.
    pub fn provider_for(&self, account: &WalletAccount) -> PipelineResult<Arc<dyn WalletProvider>> {
        self.connector
            .provider(&account.address)
            .map_err(PipelineError::Provider)
    }
}

impl std::fmt::Debug for WalletSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletSession")
            .field("state", &self.state.borrow().label())
            .finish()
    }
}
