// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Transfer records produced by a lookup

use serde::{Deserialize, Serialize};

/// One row of a transfer lookup.
///
/// `token` and `transaction_hash` come from the raw log; `from`, `to` and
/// `value` come from its decode. Hex values are lowercase and `0x`-prefixed.
/// `value` is the raw token amount as a decimal string, not adjusted for decimals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRecord {
    /// Contract that emitted the Transfer event
    pub token: Option<String>,
    /// Transaction that emitted the event
    pub transaction_hash: Option<String>,
    /// Sender, `None` when the log could not be decoded
    pub from: Option<String>,
    /// Recipient, `None` when the log could not be decoded
    pub to: Option<String>,
    /// Amount as a decimal integer string, `"0"` when the log could not be decoded
    pub value: String,
}

/// Result of assembling a lookup.
///
/// An empty result is reported explicitly so that callers can answer with a
/// message rather than an empty list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferOutcome {
    /// The service returned no matching logs.
    NoTransfers,
    /// Records in the service's delivery order.
    Transfers(Vec<TransferRecord>),
}

impl TransferOutcome {
    /// The records, or an empty slice for [`TransferOutcome::NoTransfers`].
    pub fn records(&self) -> &[TransferRecord] {
        match self {
            TransferOutcome::NoTransfers => &[],
            TransferOutcome::Transfers(records) => records,
        }
    }

    /// Whether the service returned nothing.
    pub fn is_empty(&self) -> bool {
        matches!(self, TransferOutcome::NoTransfers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serializes_camel_case_with_nulls() {
        let record = TransferRecord {
            token: Some("0xaa".to_string()),
            transaction_hash: Some("0xbb".to_string()),
            from: None,
            to: None,
            value: "0".to_string(),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "token": "0xaa",
                "transactionHash": "0xbb",
                "from": null,
                "to": null,
                "value": "0",
            })
        );
    }

    #[test]
    fn test_outcome_records() {
        assert!(TransferOutcome::NoTransfers.records().is_empty());
        assert!(TransferOutcome::NoTransfers.is_empty());
        assert!(!TransferOutcome::Transfers(vec![]).is_empty());
    }
}
