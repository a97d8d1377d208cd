//! Shared fixtures for integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::{mpsc, watch};

use swap_pipeline::error::{PipelineResult, ProviderFailure};
use swap_pipeline::provider::{RpcRequest, WalletProvider};
use swap_pipeline::quote::{QuoteRequest, QuoteSource, TransactionDraft};
use swap_pipeline::wallet::{ConnectionState, StateUpdater, WalletAccount, WalletConnector};

pub const QUOTE_BODY: &str =
    r#"{"quoteData":{"transaction":{"to":"0xabc","data":"0x","value":"10000000000000"}}}"#;

pub const TX_HASH: &str = "0x88df016429689c079f3b2f6ad39fa052532c56795b733da78a91ebe6a713944b";

/// Anvil's first dev account.
pub const DEV_ACCOUNT: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

/// Start a pricing backend answering every request with `status` and `body`.
///
/// Each request head (request line + headers) is sent on the returned channel.
pub async fn start_quote_backend(
    status: u16,
    body: &'static str,
) -> (SocketAddr, mpsc::UnboundedReceiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let tx = tx.clone();
            tokio::spawn(async move {
                let head = read_head(&mut socket).await;
                let _ = tx.send(head);

                let status_text = match status {
                    200 => "200 OK",
                    404 => "404 Not Found",
                    429 => "429 Too Many Requests",
                    500 => "500 Internal Server Error",
                    503 => "503 Service Unavailable",
                    _ => "200 OK",
                };
                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status_text,
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    (addr, rx)
}

/// Start a backend that accepts connections and never answers.
pub async fn start_silent_backend() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        while let Ok((socket, _)) = listener.accept().await {
            tokio::spawn(async move {
                let _held = socket;
                tokio::time::sleep(Duration::from_secs(30)).await;
            });
        }
    });

    addr
}

/// An address nothing is listening on.
pub async fn closed_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

async fn read_head(socket: &mut tokio::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        match socket.read(&mut chunk).await {
            Ok(0) | Err(_) => break,
            Ok(n) => {
                buf.extend_from_slice(&chunk[..n]);
                if buf.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

/// Provider that records requests and answers with a fixed result.
pub struct MockProvider {
    pub requests: Mutex<Vec<RpcRequest>>,
    response: Result<String, String>,
}

impl MockProvider {
    pub fn succeeding(result: &str) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            response: Ok(result.to_string()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            response: Err(message.to_string()),
        }
    }

    pub fn requests(&self) -> Vec<RpcRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl WalletProvider for MockProvider {
    async fn request(&self, request: RpcRequest) -> Result<String, ProviderFailure> {
        self.requests.lock().unwrap().push(request);
        match &self.response {
            Ok(v) => Ok(v.clone()),
            Err(e) => Err(e.clone().into()),
        }
    }
}

/// In-memory wallet that connects immediately with a fixed account list.
pub struct MockWallet {
    updater: StateUpdater,
    accounts: Vec<WalletAccount>,
    pub provider: Arc<MockProvider>,
    pub connects: AtomicUsize,
}

impl MockWallet {
    pub fn new(accounts: Vec<WalletAccount>, provider: MockProvider) -> Self {
        Self {
            updater: StateUpdater::new(),
            accounts,
            provider: Arc::new(provider),
            connects: AtomicUsize::new(0),
        }
    }

    pub fn connect_count(&self) -> usize {
        self.connects.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WalletConnector for MockWallet {
    async fn connect(&self) -> Result<(), ProviderFailure> {
        self.connects.fetch_add(1, Ordering::SeqCst);
        self.updater.publish(ConnectionState::Connecting);
        self.updater.publish(ConnectionState::Connected(self.accounts.clone()));
        Ok(())
    }

    fn subscribe(&self) -> watch::Receiver<ConnectionState> {
        self.updater.subscribe()
    }

    fn provider(&self, _address: &str) -> Result<Arc<dyn WalletProvider>, ProviderFailure> {
        let provider: Arc<dyn WalletProvider> = self.provider.clone();
        Ok(provider)
    }
}

/// Quote source returning a fixed draft.
pub struct StubQuotes {
    draft: TransactionDraft,
    pub requests: Mutex<Vec<QuoteRequest>>,
}

impl StubQuotes {
    pub fn new(draft: TransactionDraft) -> Self {
        Self {
            draft,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl QuoteSource for StubQuotes {
    async fn fetch_quote(&self, request: &QuoteRequest) -> PipelineResult<TransactionDraft> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(self.draft.clone())
    }
}
