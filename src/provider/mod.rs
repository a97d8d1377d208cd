//! Provider dispatch subsystem.
//!
//! # Data Flow
//! ```text
//! RpcCall (typed: personal_sign | eth_sendTransaction)
//!     → call.rs (shape validation, lowering to RpcRequest)
//!     → dispatcher.rs (one call, no retry, no caching)
//!     → WalletProvider (external; node.rs for a JSON-RPC node)
//!     → signature / transaction hash
//! ```
//!
//! # Constraints
//! - Provider errors are carried to the caller untouched
//! - Malformed calls never reach the provider

pub mod call;
pub mod dispatcher;
pub mod node;

pub use call::{RpcCall, RpcMethod, RpcRequest};
pub use dispatcher::{ProviderDispatcher, WalletProvider};
pub use node::{NodeProvider, NodeWallet};
