//! Wallet collaborator backed by a JSON-RPC node.
//!
//! # Responsibilities
//! - Report the node's unlocked accounts as a connected wallet
//! - Forward `personal_sign` / `eth_sendTransaction` to the node
//! - Bound every RPC call with the configured timeout
//!
//! Signing happens inside the node; this adapter only relays requests.
//! Useful against local dev nodes that expose unlocked accounts.

use alloy::network::Ethereum;
use alloy::providers::{Provider, RootProvider};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::timeout;

use crate::config::schema::NodeConfig;
use crate::error::{PipelineError, PipelineResult, ProviderFailure};
use crate::provider::call::{RpcMethod, RpcRequest};
use crate::provider::dispatcher::WalletProvider;
use crate::wallet::types::{ConnectionState, StateUpdater, WalletAccount, WalletConnector};

/// Wallet whose accounts live on a JSON-RPC node.
pub struct NodeWallet {
    rpc: RootProvider<Ethereum>,
    rpc_url: String,
    timeout_duration: Duration,
    state: StateUpdater,
}

impl NodeWallet {
    /// Create a wallet for the node at `config.rpc_url`.
    ///
    /// No connection is made until [`WalletConnector::connect`].
    pub fn new(config: &NodeConfig) -> PipelineResult<Self> {
        let url: url::Url = config.rpc_url.parse().map_err(|e| {
            PipelineError::InvalidRequest(format!("Invalid RPC URL '{}': {}", config.rpc_url, e))
        })?;

        Ok(Self {
            rpc: RootProvider::new_http(url),
            rpc_url: config.rpc_url.clone(),
            timeout_duration: Duration::from_secs(config.rpc_timeout_secs),
            state: StateUpdater::new(),
        })
    }

    fn owns(&self, address: &str) -> bool {
        match self.state.current() {
            ConnectionState::Connected(accounts) => accounts
                .iter()
                .any(|a| a.address.eq_ignore_ascii_case(address)),
            _ => false,
        }
    }
}

#[async_trait]
impl WalletConnector for NodeWallet {
    async fn connect(&self) -> Result<(), ProviderFailure> {
        self.state.publish(ConnectionState::Connecting);

        let accounts = match timeout(self.timeout_duration, self.rpc.get_accounts()).await {
            Ok(Ok(accounts)) => accounts,
            Ok(Err(e)) => {
                tracing::warn!(rpc_url = %self.rpc_url, error = %e, "eth_accounts failed");
                self.state.publish(ConnectionState::Disconnected);
                return Err(e.into());
            }
            Err(_) => {
                tracing::warn!(rpc_url = %self.rpc_url, "eth_accounts timed out");
                self.state.publish(ConnectionState::Disconnected);
                return Err(format!(
                    "eth_accounts timed out after {} seconds",
                    self.timeout_duration.as_secs()
                )
                .into());
            }
        };

        let accounts: Vec<WalletAccount> = accounts
            .into_iter()
            .map(|address| WalletAccount::ethereum(address.to_string()))
            .collect();
        tracing::info!(rpc_url = %self.rpc_url, accounts = accounts.len(), "Node wallet connected");
        self.state.publish(ConnectionState::Connected(accounts));
        Ok(())
    }

    fn subscribe(&self) -> watch::Receiver<ConnectionState> {
        self.state.subscribe()
    }

    fn provider(&self, address: &str) -> Result<Arc<dyn WalletProvider>, ProviderFailure> {
        if !self.owns(address) {
            return Err(format!("No connected account {}", address).into());
        }
        Ok(Arc::new(NodeProvider {
            rpc: self.rpc.clone(),
            timeout_duration: self.timeout_duration,
        }))
    }
}

impl std::fmt::Debug for NodeWallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeWallet")
            .field("rpc_url", &self.rpc_url)
            .field("timeout_secs", &self.timeout_duration.as_secs())
            .field("state", &self.state.current().label())
            .finish()
    }
}

/// Relays provider requests to the node.
#[derive(Clone)]
pub struct NodeProvider {
    rpc: RootProvider<Ethereum>,
    timeout_duration: Duration,
}

impl NodeProvider {
    /// JSON-RPC params for `request`.
    ///
    /// The transaction travels as a JSON string on the provider interface
    /// but the node expects an object. Nodes read the `personal_sign`
    /// message as hex bytes, so plain text is sent as its UTF-8 encoding.
    fn wire_params(request: RpcRequest) -> Result<Vec<Value>, ProviderFailure> {
        request.validate()?;
        match request.method {
            RpcMethod::PersonalSign => {
                let mut params = request.params.into_iter();
                let message = params.next().unwrap_or_default();
                Ok(std::iter::once(Value::String(message_bytes(&message)))
                    .chain(params.map(Value::String))
                    .collect())
            }
            RpcMethod::SendTransaction => request
                .params
                .iter()
                .map(|p| serde_json::from_str(p).map_err(ProviderFailure::from))
                .collect(),
        }
    }
}

/// `message` as `0x`-prefixed hex, unchanged if it already is.
fn message_bytes(message: &str) -> String {
    let is_hex = message
        .strip_prefix("0x")
        .is_some_and(|digits| digits.len() % 2 == 0 && digits.bytes().all(|b| b.is_ascii_hexdigit()));
    if is_hex {
        message.to_string()
    } else {
        format!("0x{}", alloy::primitives::hex::encode(message.as_bytes()))
    }
}

#[async_trait]
impl WalletProvider for NodeProvider {
    async fn request(&self, request: RpcRequest) -> Result<String, ProviderFailure> {
        let method = request.method;
        let params = Self::wire_params(request)?;

        let call = self.rpc.raw_request::<_, String>(method.as_str().into(), params);
        match timeout(self.timeout_duration, call).await {
            Ok(result) => result.map_err(ProviderFailure::from),
            Err(_) => Err(format!(
                "{} timed out after {} seconds",
                method,
                self.timeout_duration.as_secs()
            )
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> NodeConfig {
        NodeConfig {
            // Nothing listens on the discard port.
            rpc_url: "http://127.0.0.1:9".to_string(),
            rpc_timeout_secs: 2,
        }
    }

    #[test]
    fn test_invalid_rpc_url() {
        let config = NodeConfig {
            rpc_url: "not a url".to_string(),
            rpc_timeout_secs: 2,
        };
        assert!(matches!(
            NodeWallet::new(&config),
            Err(PipelineError::InvalidRequest(_))
        ));
    }

    #[tokio::test]
    async fn test_unreachable_node_stays_disconnected() {
        let wallet = NodeWallet::new(&test_config()).unwrap();
        let rx = wallet.subscribe();

        assert!(wallet.connect().await.is_err());
        assert_eq!(*rx.borrow(), ConnectionState::Disconnected);
    }

    #[test]
    fn test_provider_requires_connected_account() {
        let wallet = NodeWallet::new(&test_config()).unwrap();
        assert!(wallet.provider("0xdef").is_err());

        wallet
            .state
            .publish(ConnectionState::Connected(vec![WalletAccount::ethereum("0xDEF")]));
        assert!(wallet.provider("0xdef").is_ok());
    }

    #[test]
    fn test_transaction_param_becomes_object() {
        let request = RpcRequest {
            method: RpcMethod::SendTransaction,
            params: vec![r#"{"to":"0xabc","from":"0xdef","data":"0x","value":"0x0","chainId":"0x1"}"#.into()],
        };
        let params = NodeProvider::wire_params(request).unwrap();
        assert_eq!(params.len(), 1);
        assert_eq!(params[0]["chainId"], "0x1");
    }

    #[test]
    fn test_sign_message_sent_as_hex_bytes() {
        let request = RpcRequest {
            method: RpcMethod::PersonalSign,
            params: vec!["hello".into(), "0xdef".into()],
        };
        let params = NodeProvider::wire_params(request).unwrap();
        assert_eq!(params, vec![Value::from("0x68656c6c6f"), Value::from("0xdef")]);
    }

    #[test]
    fn test_sign_message_hex_encoding() {
        assert_eq!(
            message_bytes("Hello Interface team!"),
            "0x48656c6c6f20496e74657266616365207465616d21"
        );
        assert_eq!(message_bytes("0xdeadbeef"), "0xdeadbeef");
        assert_eq!(message_bytes("0x"), "0x");
        // Odd length or non-hex digits are text.
        assert_eq!(message_bytes("0xabc"), "0x3078616263");
        assert_eq!(message_bytes("0xzz"), "0x30787a7a");
    }
}
