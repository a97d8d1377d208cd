//! Provider method calls.
//!
//! The set of methods is closed. Each [`RpcCall`] variant knows its own
//! parameter shape and lowers to the wire-level [`RpcRequest`] the wallet
//! provider consumes.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{PipelineError, PipelineResult};
use crate::transaction::TransactionPayload;

/// Provider methods the pipeline issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RpcMethod {
    #[serde(rename = "personal_sign")]
    PersonalSign,
    #[serde(rename = "eth_sendTransaction")]
    SendTransaction,
}

impl RpcMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            RpcMethod::PersonalSign => "personal_sign",
            RpcMethod::SendTransaction => "eth_sendTransaction",
        }
    }

    /// Number of string parameters the method takes.
    pub fn arity(&self) -> usize {
        match self {
            RpcMethod::PersonalSign => 2,
            RpcMethod::SendTransaction => 1,
        }
    }
}

impl fmt::Display for RpcMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed provider call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RpcCall {
    /// Sign `message` with the key behind `address`.
    PersonalSign { message: String, address: String },
    /// Sign and broadcast a transaction.
    SendTransaction(TransactionPayload),
}

impl RpcCall {
    pub fn method(&self) -> RpcMethod {
        match self {
            RpcCall::PersonalSign { .. } => RpcMethod::PersonalSign,
            RpcCall::SendTransaction(_) => RpcMethod::SendTransaction,
        }
    }

    /// Lower to the wire request, checking the parameter shape.
    pub fn into_request(self) -> PipelineResult<RpcRequest> {
        let request = match self {
            RpcCall::PersonalSign { message, address } => {
                check_address(&address)?;
                RpcRequest {
                    method: RpcMethod::PersonalSign,
                    params: vec![message, address],
                }
            }
            RpcCall::SendTransaction(payload) => RpcRequest {
                method: RpcMethod::SendTransaction,
                params: vec![payload.to_json()?],
            },
        };
        request.validate()?;
        Ok(request)
    }
}

/// Wire-level call handed to the wallet provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcRequest {
    pub method: RpcMethod,
    pub params: Vec<String>,
}

impl RpcRequest {
    /// Check arity and per-method parameter shape.
    pub fn validate(&self) -> PipelineResult<()> {
        if self.params.len() != self.method.arity() {
            return Err(PipelineError::InvalidRequest(format!(
                "{} takes {} params, got {}",
                self.method,
                self.method.arity(),
                self.params.len()
            )));
        }

        match self.method {
            RpcMethod::PersonalSign => check_address(&self.params[1]),
            RpcMethod::SendTransaction => {
                let value: serde_json::Value = serde_json::from_str(&self.params[0]).map_err(|e| {
                    PipelineError::InvalidRequest(format!("Transaction param is not JSON: {}", e))
                })?;
                if !value.is_object() {
                    return Err(PipelineError::InvalidRequest(
                        "Transaction param must be a JSON object".to_string(),
                    ));
                }
                Ok(())
            }
        }
    }
}

fn check_address(address: &str) -> PipelineResult<()> {
    if address.len() <= 2 || !address.starts_with("0x") {
        return Err(PipelineError::InvalidRequest(format!(
            "'{}' is not a 0x-prefixed address",
            address
        )));
    }
    Ok(())
}
