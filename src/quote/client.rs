//! HTTP client for the pricing service.
//!
//! # Responsibilities
//! - Encode a QuoteRequest into the `/swap/quote` query string
//! - Bypass HTTP caches (a stale price is a wrong price)
//! - Map transport, status and body failures onto the pipeline taxonomy
//!
//! No retries here; callers decide.

use async_trait::async_trait;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use std::time::{Duration, Instant};
use url::Url;

use crate::config::schema::QuoteConfig;
use crate::error::{PipelineError, PipelineResult};
use crate::observability::metrics;
use crate::quote::types::{QuoteRequest, QuoteResponse, TransactionDraft};

/// Path of the quote endpoint, relative to the service root.
pub const QUOTE_PATH: &str = "swap/quote";

/// Anything that can turn a quote request into a transaction draft.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    async fn fetch_quote(&self, request: &QuoteRequest) -> PipelineResult<TransactionDraft>;
}

/// Pricing service client.
#[derive(Debug, Clone)]
pub struct QuoteClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl QuoteClient {
    /// Create a client from configuration.
    pub fn new(config: &QuoteConfig) -> PipelineResult<Self> {
        Self::with_base_url(&config.base_url, Duration::from_secs(config.timeout_secs))
    }

    /// Create a client for a service root such as `https://host/`.
    pub fn with_base_url(base_url: &str, timeout: Duration) -> PipelineResult<Self> {
        let mut base = Url::parse(base_url).map_err(|e| {
            PipelineError::InvalidRequest(format!("Invalid quote URL '{}': {}", base_url, e))
        })?;
        // join() replaces the last segment unless the path ends in '/'
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let endpoint = base.join(QUOTE_PATH).map_err(|e| {
            PipelineError::InvalidRequest(format!("Invalid quote URL '{}': {}", base_url, e))
        })?;

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(PipelineError::Network)?;

        Ok(Self { http, endpoint })
    }

    /// Full request URL for `request`.
    pub fn quote_url(&self, request: &QuoteRequest) -> PipelineResult<Url> {
        request.validate()?;

        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("user_address", &request.user_address)
            .append_pair("chain_id", &request.chain_id.to_string())
            .append_pair("sell_token", &request.sell_token)
            .append_pair("sell_amount", &request.sell_amount)
            .append_pair("buy_token", &request.buy_token)
            .append_pair("slippage_bps", &request.slippage_bps.to_string());
        Ok(url)
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn fetch(&self, request: &QuoteRequest) -> PipelineResult<TransactionDraft> {
        let url = self.quote_url(request)?;
        tracing::debug!(url = %url, "Fetching quote");

        let response = self
            .http
            .get(url)
            .header(CACHE_CONTROL, "no-cache, no-store")
            .header(PRAGMA, "no-cache")
            .send()
            .await
            .map_err(PipelineError::Network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(PipelineError::Parse(format!(
                "Pricing service returned status {}",
                status
            )));
        }

        let body = response.text().await.map_err(PipelineError::Network)?;
        let parsed: QuoteResponse = serde_json::from_str(&body)
            .map_err(|e| PipelineError::Parse(format!("Unexpected quote response: {}", e)))?;

        Ok(parsed.into_draft())
    }
}

#[async_trait]
impl QuoteSource for QuoteClient {
    async fn fetch_quote(&self, request: &QuoteRequest) -> PipelineResult<TransactionDraft> {
        let started = Instant::now();
        let result = self.fetch(request).await;
        metrics::record_quote(result.is_ok(), started.elapsed());

        match &result {
            Ok(draft) => tracing::info!(
                to = %draft.to,
                value = %draft.value,
                chain_id = request.chain_id,
                "Quote received"
            ),
            Err(e) => tracing::warn!(error = %e, "Quote request failed"),
        }
        result
    }
}
