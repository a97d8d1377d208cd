//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, slippage <= 100%)
//! - Check URLs, token addresses and the sell amount
//!
//! Returns every problem found, not just the first.

use std::fmt;
use url::Url;

use crate::codec;
use crate::config::schema::PipelineConfig;
use crate::quote::types::parse_address;

/// Slippage is expressed in basis points; 10 000 bps is 100%.
pub const MAX_SLIPPAGE_BPS: u32 = 10_000;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field, e.g. `swap.chain_id`.
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a parsed configuration.
pub fn validate_config(config: &PipelineConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_http_url("quote.base_url", &config.quote.base_url, &mut errors);
    if config.quote.timeout_secs == 0 {
        errors.push(ValidationError::new("quote.timeout_secs", "must be greater than 0"));
    }

    let swap = &config.swap;
    if swap.chain_id == 0 {
        errors.push(ValidationError::new("swap.chain_id", "must be greater than 0"));
    }
    if swap.slippage_bps > MAX_SLIPPAGE_BPS {
        errors.push(ValidationError::new(
            "swap.slippage_bps",
            format!("{} exceeds {}", swap.slippage_bps, MAX_SLIPPAGE_BPS),
        ));
    }
    if let Err(e) = parse_address("sell_token", &swap.sell_token) {
        errors.push(ValidationError::new("swap.sell_token", e.to_string()));
    }
    if let Err(e) = parse_address("buy_token", &swap.buy_token) {
        errors.push(ValidationError::new("swap.buy_token", e.to_string()));
    }
    if let Err(e) = codec::decimal_to_hex(&swap.sell_amount) {
        errors.push(ValidationError::new("swap.sell_amount", e.to_string()));
    }

    check_http_url("node.rpc_url", &config.node.rpc_url, &mut errors);
    if config.node.rpc_timeout_secs == 0 {
        errors.push(ValidationError::new("node.rpc_timeout_secs", "must be greater than 0"));
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::new(
            "observability.log_level",
            format!("unknown level '{}'", config.observability.log_level),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_http_url(field: &'static str, value: &str, errors: &mut Vec<ValidationError>) {
    match Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        Ok(url) => errors.push(ValidationError::new(
            field,
            format!("unsupported scheme '{}'", url.scheme()),
        )),
        Err(e) => errors.push(ValidationError::new(field, e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&PipelineConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = PipelineConfig::default();
        config.quote.base_url = "ftp://prices.example".into();
        config.swap.chain_id = 0;
        config.swap.slippage_bps = 20_000;
        config.swap.sell_amount = "0.5".into();
        config.swap.buy_token = "usdc".into();

        let errors = validate_config(&config).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            [
                "quote.base_url",
                "swap.chain_id",
                "swap.slippage_bps",
                "swap.buy_token",
                "swap.sell_amount",
            ]
        );
    }

    #[test]
    fn test_oversized_sell_amount() {
        let mut config = PipelineConfig::default();
        config.swap.sell_amount = "1".repeat(90);
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("256-bit"));
    }

    #[test]
    fn test_log_level() {
        let mut config = PipelineConfig::default();
        config.observability.log_level = "WARN".into();
        assert!(validate_config(&config).is_ok());

        config.observability.log_level = "loud".into();
        assert!(validate_config(&config).is_err());
    }
}
