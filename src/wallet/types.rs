//! Wallet-facing types and the collaborator seam.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tokio::sync::watch;

use crate::error::ProviderFailure;
use crate::provider::WalletProvider;

/// Chain family an account belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChainKind {
    Ethereum,
    Other,
}

impl fmt::Display for ChainKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChainKind::Ethereum => write!(f, "ethereum"),
            ChainKind::Other => write!(f, "other"),
        }
    }
}

/// An account reported by the wallet collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletAccount {
    /// Account address as reported by the wallet.
    pub address: String,
    /// Chain family of the account.
    pub chain_kind: ChainKind,
}

impl WalletAccount {
    /// Shorthand for an Ethereum account.
    pub fn ethereum(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            chain_kind: ChainKind::Ethereum,
        }
    }

    pub fn is_ethereum(&self) -> bool {
        self.chain_kind == ChainKind::Ethereum
    }
}

/// Connection state as last reported by the wallet collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConnectionState {
    #[default]
    Disconnected,
    Connecting,
    /// Accounts in the order the wallet reported them.
    Connected(Vec<WalletAccount>),
}

impl ConnectionState {
    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionState::Connected(_))
    }

    /// Short label for logs.
    pub fn label(&self) -> &'static str {
        match self {
            ConnectionState::Disconnected => "disconnected",
            ConnectionState::Connecting => "connecting",
            ConnectionState::Connected(_) => "connected",
        }
    }
}

/// The external wallet collaborator.
///
/// Implementations own the only writer of the connection state (a
/// [`StateUpdater`]) and hand out receivers through [`subscribe`].
///
/// [`subscribe`]: WalletConnector::subscribe
#[async_trait]
pub trait WalletConnector: Send + Sync {
    /// Ask the wallet to connect. The outcome arrives on the state channel,
    /// possibly after this call has returned.
    async fn connect(&self) -> Result<(), ProviderFailure>;

    /// Receiver for connection state notifications.
    fn subscribe(&self) -> watch::Receiver<ConnectionState>;

    /// Provider able to sign for `address`.
    fn provider(&self, address: &str) -> Result<Arc<dyn WalletProvider>, ProviderFailure>;
}

/// Single writer for a wallet's connection state.
///
/// Every update replaces the whole state value, so readers only ever see
/// complete snapshots.
#[derive(Debug)]
pub struct StateUpdater {
    tx: watch::Sender<ConnectionState>,
}

impl StateUpdater {
    /// Create the writer, starting in `Disconnected`.
    pub fn new() -> Self {
        let (tx, _) = watch::channel(ConnectionState::Disconnected);
        Self { tx }
    }

    /// Publish a new state to every subscriber.
    pub fn publish(&self, state: ConnectionState) {
        tracing::debug!(
            from = self.tx.borrow().label(),
            to = state.label(),
            "Wallet state changed"
        );
        self.tx.send_replace(state);
    }

    pub fn subscribe(&self) -> watch::Receiver<ConnectionState> {
        self.tx.subscribe()
    }

    /// Snapshot of the current state.
    pub fn current(&self) -> ConnectionState {
        self.tx.borrow().clone()
    }
}

impl Default for StateUpdater {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_kind_serde() {
        let json = serde_json::to_string(&ChainKind::Ethereum).unwrap();
        assert_eq!(json, "\"ethereum\"");
    }

    #[test]
    fn test_updater_publishes_snapshots() {
        let updater = StateUpdater::new();
        let rx = updater.subscribe();
        assert_eq!(*rx.borrow(), ConnectionState::Disconnected);

        updater.publish(ConnectionState::Connected(vec![WalletAccount::ethereum("0xabc")]));
        assert!(rx.borrow().is_connected());
        assert_eq!(updater.current().label(), "connected");
    }
}
