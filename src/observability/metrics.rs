//! Metrics collection.
//!
//! # Metrics
//! - `swap_quote_requests_total` (counter): quote lookups by outcome
//! - `swap_quote_duration_seconds` (histogram): pricing service latency
//! - `swap_rpc_calls_total` (counter): provider calls by method, outcome
//! - `swap_rpc_duration_seconds` (histogram): provider latency by method
//! - `swap_flows_total` (counter): completed flows by kind, outcome
//!
//! Recording goes through the `metrics` facade and is a no-op until the
//! host installs a recorder.

use std::time::Duration;

fn outcome(ok: bool) -> &'static str {
    if ok {
        "success"
    } else {
        "failure"
    }
}

/// Record a quote lookup.
pub fn record_quote(ok: bool, elapsed: Duration) {
    metrics::counter!("swap_quote_requests_total", "outcome" => outcome(ok)).increment(1);
    metrics::histogram!("swap_quote_duration_seconds").record(elapsed.as_secs_f64());
}

/// Record a provider call.
pub fn record_rpc_call(method: &'static str, ok: bool, elapsed: Duration) {
    metrics::counter!("swap_rpc_calls_total", "method" => method, "outcome" => outcome(ok))
        .increment(1);
    metrics::histogram!("swap_rpc_duration_seconds", "method" => method)
        .record(elapsed.as_secs_f64());
}

/// Record the terminal state of a flow.
pub fn record_flow(kind: &'static str, ok: bool) {
    metrics::counter!("swap_flows_total", "kind" => kind, "outcome" => outcome(ok)).increment(1);
}
