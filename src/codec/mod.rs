//! Numeric encoding used when building provider payloads.
//!
//! Quote amounts arrive as base-10 strings and leave as `0x`-prefixed hex
//! quantities. Values are held as 256-bit integers, the EVM word size, so
//! any amount a chain can represent survives the conversion. Anything wider
//! is rejected with [`PipelineError::Overflow`] instead of being truncated.
//!
//! Hex digits are uppercase; the `0x` marker is lowercase.

use alloy::primitives::U256;

use crate::error::{PipelineError, PipelineResult};

/// Convert a non-negative base-10 integer string into a hex quantity.
///
/// `"0"` encodes as `"0x0"`, `"255"` as `"0xFF"`. Fractions, exponents,
/// signs and whitespace are rejected.
pub fn decimal_to_hex(input: &str) -> PipelineResult<String> {
    let value = parse_decimal(input)?;
    Ok(u256_to_hex(value))
}

/// Parse a base-10 integer string into a [`U256`].
pub fn parse_decimal(input: &str) -> PipelineResult<U256> {
    if input.is_empty() {
        return Err(PipelineError::InvalidRequest(
            "empty decimal string".to_string(),
        ));
    }
    if !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PipelineError::InvalidRequest(format!(
            "'{}' is not a non-negative base-10 integer",
            input
        )));
    }

    // Only digits remain, so the single failure mode left is width.
    U256::from_str_radix(input, 10).map_err(|_| PipelineError::Overflow(input.to_string()))
}

/// Format an integer already held in memory as a hex quantity.
pub fn u64_to_hex(value: u64) -> String {
    format!("0x{:X}", value)
}

/// Format a [`U256`] as a hex quantity without leading zeros.
pub fn u256_to_hex(value: U256) -> String {
    format!("0x{:X}", value)
}
