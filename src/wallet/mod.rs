//! Wallet connection subsystem.
//!
//! # Data Flow
//! ```text
//! external wallet (connect, state callbacks)
//!     → StateUpdater (single writer, whole-value updates)
//!     → watch channel
//!     → WalletSession (snapshots, account selection)
//! ```
//!
//! # Constraints
//! - The session only observes state; it never mutates it
//! - Account selection is first Ethereum account in wallet order

pub mod session;
pub mod types;

pub use session::WalletSession;
pub use types::{ChainKind, ConnectionState, StateUpdater, WalletAccount, WalletConnector};
