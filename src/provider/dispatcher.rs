//! Dispatch of typed calls to an external wallet provider.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Instant;

use crate::error::{PipelineError, PipelineResult, ProviderFailure};
use crate::observability::metrics;
use crate::provider::call::{RpcCall, RpcRequest};

/// The signing/broadcast side of an external wallet.
///
/// Returns the method's string result (signature or transaction hash).
#[async_trait]
pub trait WalletProvider: Send + Sync {
    async fn request(&self, request: RpcRequest) -> Result<String, ProviderFailure>;
}

/// Sends one call at a time to a wallet provider.
#[derive(Clone)]
pub struct ProviderDispatcher {
    provider: Arc<dyn WalletProvider>,
}

impl ProviderDispatcher {
    pub fn new(provider: Arc<dyn WalletProvider>) -> Self {
        Self { provider }
    }

    /// Validate, lower and send `call`.
    ///
    /// Shape violations fail with `InvalidRequest` without reaching the
    /// provider. Provider failures come back as `Provider` carrying the
    /// collaborator's error untouched.
    pub async fn dispatch(&self, call: RpcCall) -> PipelineResult<String> {
        let request = call.into_request()?;
        let method = request.method;
        tracing::info!(method = %method, "Dispatching provider request");

        let started = Instant::now();
        let result = self.provider.request(request).await;
        metrics::record_rpc_call(method.as_str(), result.is_ok(), started.elapsed());

        match result {
            Ok(response) => {
                tracing::info!(method = %method, response = %response, "Provider request succeeded");
                Ok(response)
            }
            Err(e) => {
                tracing::warn!(method = %method, error = %e, "Provider request failed");
                Err(PipelineError::Provider(e))
            }
        }
    }
}

impl std::fmt::Debug for ProviderDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderDispatcher").finish_non_exhaustive()
    }
}
