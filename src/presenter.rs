// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Response bodies for a lookup

use alloy_primitives::Address;
use serde::Serialize;

use crate::address::to_lower_hex;
use crate::errors::{FetchError, TransferscanError};
use crate::types::{TransferOutcome, TransferRecord};

/// Body returned when no transfer involves the account
pub const NO_TRANSFERS_MESSAGE: &str = "No token transfers found for this address.";

/// Body returned for any backend failure; the detail is only logged
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch token transfers";

/// Body returned when the lookup exceeded its time budget
pub const TIMEOUT_MESSAGE: &str = "Timed out fetching token transfers";

/// Successful lookup response
///
/// Serializes to either
/// `{"address": "0x…", "transfers": [...]}` or `{"message": "…"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TransferResponse {
    /// At least one transfer was found
    Transfers {
        address: String,
        transfers: Vec<TransferRecord>,
    },
    /// The lookup succeeded but matched nothing
    NotFound { message: String },
}

impl TransferResponse {
    /// Records carried by the response; empty for [`TransferResponse::NotFound`].
    pub fn transfers(&self) -> &[TransferRecord] {
        match self {
            TransferResponse::Transfers { transfers, .. } => transfers,
            TransferResponse::NotFound { .. } => &[],
        }
    }
}

/// Map a lookup outcome to its response body.
///
/// # Examples
///
/// ```rust
/// use transferscan::presenter::{present, TransferResponse, NO_TRANSFERS_MESSAGE};
/// use transferscan::TransferOutcome;
/// use alloy_primitives::Address;
///
/// let response = present(Address::ZERO, TransferOutcome::NoTransfers);
/// assert_eq!(
///     response,
///     TransferResponse::NotFound { message: NO_TRANSFERS_MESSAGE.to_string() }
/// );
/// ```
pub fn present(account: Address, outcome: TransferOutcome) -> TransferResponse {
    match outcome {
        TransferOutcome::NoTransfers => TransferResponse::NotFound {
            message: NO_TRANSFERS_MESSAGE.to_string(),
        },
        TransferOutcome::Transfers(transfers) => TransferResponse::Transfers {
            address: to_lower_hex(account),
            transfers,
        },
    }
}

/// Error response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }

    /// Client-facing body for `error`.
    ///
    /// Validation messages are returned verbatim. Backend failures collapse
    /// to a fixed message.
    pub fn from_error(error: &TransferscanError) -> Self {
        match error {
            TransferscanError::Validation(e) => Self::new(e.to_string()),
            TransferscanError::Fetch(FetchError::Cancelled) => Self::new(TIMEOUT_MESSAGE),
            TransferscanError::Fetch(_) | TransferscanError::Config(_) => {
                Self::new(FETCH_FAILED_MESSAGE)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ValidationError;
    use alloy_primitives::address;
    use serde_json::json;

    #[test]
    fn test_no_transfers_renders_message_only() {
        let body = serde_json::to_value(present(Address::ZERO, TransferOutcome::NoTransfers)).unwrap();
        assert_eq!(body, json!({ "message": "No token transfers found for this address." }));
    }

    #[test]
    fn test_transfers_render_with_lowercase_address() {
        let account = address!("abc0000000000000000000000000000000000123");
        let record = TransferRecord {
            token: Some("0x1111111111111111111111111111111111111111".to_string()),
            transaction_hash: None,
            from: None,
            to: None,
            value: "0".to_string(),
        };

        let body =
            serde_json::to_value(present(account, TransferOutcome::Transfers(vec![record]))).unwrap();

        assert_eq!(
            body,
            json!({
                "address": "0xabc0000000000000000000000000000000000123",
                "transfers": [{
                    "token": "0x1111111111111111111111111111111111111111",
                    "transactionHash": null,
                    "from": null,
                    "to": null,
                    "value": "0"
                }]
            })
        );
    }

    #[test]
    fn test_error_bodies() {
        let missing = TransferscanError::from(ValidationError::MissingParameters);
        assert_eq!(
            ErrorResponse::from_error(&missing).error,
            "Address and chainId parameters are required"
        );

        let failed = TransferscanError::from(FetchError::status("http://x/query", 503, "down"));
        assert_eq!(ErrorResponse::from_error(&failed).error, FETCH_FAILED_MESSAGE);

        let cancelled = TransferscanError::from(FetchError::Cancelled);
        assert_eq!(ErrorResponse::from_error(&cancelled).error, TIMEOUT_MESSAGE);
    }
}
