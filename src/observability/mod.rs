//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events (connect, quote, build, dispatch)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → logging.rs subscriber (stdout, installed by the binary)
//!     → whatever metrics recorder the host installs
//! ```

pub mod logging;
pub mod metrics;
