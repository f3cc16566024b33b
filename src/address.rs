// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Address normalization and topic padding
//!
//! Accounts arrive in their compact external form (`0x` followed by 40 hex
//! characters). Log topics are 32 bytes wide, so indexed `address` parameters
//! are stored left-padded with 12 zero bytes. Filters must carry the padded
//! form for topic equality to hold byte for byte.
//!
//! # Examples
//!
//! ```rust
//! use transferscan::address::{normalize, pad, unpad};
//!
//! let account = normalize("0xABCDEF0123456789abcdef0123456789ABCDEF01").unwrap();
//! let topic = pad(account);
//!
//! assert!(topic[..12].iter().all(|byte| *byte == 0));
//! assert_eq!(unpad(topic), Some(account));
//! ```

use alloy_primitives::{hex, Address, B256};

use crate::errors::ValidationError;

/// Number of hex characters in a compact address (20 bytes)
pub const ADDRESS_HEX_LEN: usize = 40;

/// Number of hex characters in a padded topic value (32 bytes)
pub const TOPIC_HEX_LEN: usize = 64;

/// Strip an optional `0x`/`0X` prefix.
pub fn strip_prefix(value: &str) -> &str {
    value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value)
}

/// Parse a compact address, accepting any letter case.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidAddress`] when the input, once the prefix
/// is stripped, is not exactly 40 hex characters.
pub fn parse(field: &'static str, value: &str) -> Result<Address, ValidationError> {
    let body = strip_prefix(value.trim());

    if body.len() != ADDRESS_HEX_LEN {
        return Err(ValidationError::invalid_address(
            field,
            value,
            format!("expected {ADDRESS_HEX_LEN} hex characters, got {}", body.len()),
        ));
    }

    if let Some(bad) = body.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ValidationError::invalid_address(
            field,
            value,
            format!("unexpected character {bad:?}"),
        ));
    }

    let bytes = hex::decode(body)
        .map_err(|e| ValidationError::invalid_address(field, value, e.to_string()))?;

    Ok(Address::from_slice(&bytes))
}

/// Parse an account address.
///
/// Shorthand for [`parse`] with the `address` field name.
pub fn normalize(value: &str) -> Result<Address, ValidationError> {
    parse("address", value)
}

/// Left-pad an address to the 32-byte topic width.
pub fn pad(address: Address) -> B256 {
    address.into_word()
}

/// Pad a compact address string into its `0x`-prefixed 64-character topic form.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidAddress`] for malformed input.
pub fn pad_hex(value: &str) -> Result<String, ValidationError> {
    normalize(value).map(|address| format!("{:#x}", pad(address)))
}

/// Recover the address from a padded topic value.
///
/// Returns `None` when any of the 12 high bytes is set, in which case the
/// topic does not hold an address.
pub fn unpad(topic: B256) -> Option<Address> {
    if topic[..12].iter().any(|byte| *byte != 0) {
        return None;
    }
    Some(Address::from_word(topic))
}

/// Canonical external form: `0x` followed by lowercase hex.
pub fn to_lower_hex(address: Address) -> String {
    format!("{address:#x}")
}
