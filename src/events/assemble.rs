// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Merging raw logs and their decodes into transfer records

use tracing::warn;

use crate::address::to_lower_hex;
use crate::events::decode::{DecodedLog, TransferEvent};
use crate::types::{RawLogEntry, TransferOutcome, TransferRecord};

/// Build the record for one raw log and its decode.
pub fn to_record(raw: &RawLogEntry, event: Option<&TransferEvent>) -> TransferRecord {
    TransferRecord {
        token: raw.address.map(to_lower_hex),
        transaction_hash: raw.transaction_hash.map(|hash| format!("{hash:#x}")),
        from: event.map(|e| to_lower_hex(e.from)),
        to: event.map(|e| to_lower_hex(e.to)),
        value: event.map_or_else(|| "0".to_string(), |e| e.amount.to_string()),
    }
}

/// Assemble paired logs into an outcome.
///
/// Empty input yields [`TransferOutcome::NoTransfers`]. Otherwise there is one
/// record per pair, in input order.
pub fn assemble(paired: Vec<DecodedLog>) -> TransferOutcome {
    if paired.is_empty() {
        return TransferOutcome::NoTransfers;
    }

    TransferOutcome::Transfers(
        paired
            .iter()
            .map(|log| to_record(&log.raw, log.event.as_ref()))
            .collect(),
    )
}

/// Assemble two separately produced sequences, aligned by position.
///
/// The lookup pipeline pairs logs with [`decode_paired`](crate::events::decode_paired)
/// and never reaches this. It is the entry point for callers holding raw logs
/// and decodes as separate vectors. Raw logs without a decode at the same
/// position are dropped, as are decodes without a raw log; a warning is
/// logged when the lengths differ.
pub fn assemble_aligned(
    raw: &[RawLogEntry],
    decoded: &[Option<TransferEvent>],
) -> TransferOutcome {
    if raw.is_empty() {
        return TransferOutcome::NoTransfers;
    }

    if raw.len() != decoded.len() {
        warn!(
            raw = raw.len(),
            decoded = decoded.len(),
            "Raw and decoded log counts differ, dropping unmatched entries"
        );
    }

    TransferOutcome::Transfers(
        raw.iter()
            .zip(decoded)
            .map(|(raw, event)| to_record(raw, event.as_ref()))
            .collect(),
    )
}
