// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Decoding raw logs into Transfer events
//!
//! Decoding is local and synchronous: the event layout is fixed at compile time
//! by the `sol!` definition of [`Transfer`]. One bad log never aborts a batch.
//! Its position carries `None` so that raw logs and decodes stay aligned.
//!
//! # Examples
//!
//! ```rust,ignore
//! use transferscan::events::decode::decode_paired;
//!
//! let paired = decode_paired(raw_logs);
//! for log in &paired {
//!     match &log.event {
//!         Some(event) => println!("{} -> {}: {}", event.from, event.to, event.amount),
//!         None => println!("undecodable log in {:?}", log.raw.transaction_hash),
//!     }
//! }
//! ```

use alloy_primitives::{Address, LogData, U256};
use alloy_sol_types::SolEvent;
use tracing::{debug, warn};

use crate::errors::EventDecodeError;
use crate::events::definitions::Transfer;
use crate::spans;
use crate::types::RawLogEntry;

/// Decoded fields of one ERC-20 Transfer log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferEvent {
    /// Sender (topic 1)
    pub from: Address,
    /// Recipient (topic 2)
    pub to: Address,
    /// Raw amount (data)
    pub amount: U256,
}

impl From<Transfer> for TransferEvent {
    fn from(event: Transfer) -> Self {
        Self {
            from: event.from,
            to: event.to,
            amount: event.value,
        }
    }
}

/// A raw log paired with its decode.
///
/// `event` is `None` when the log could not be decoded as a Transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedLog {
    /// The log as delivered by the source
    pub raw: RawLogEntry,
    /// Its decode, if it succeeded
    pub event: Option<TransferEvent>,
}

/// Decode one raw log.
///
/// # Errors
///
/// Returns [`EventDecodeError`] when the topics cannot form a log, when topic 0
/// is not the Transfer signature, or when the data is not one `uint256`.
pub fn decode_transfer(raw: &RawLogEntry) -> Result<TransferEvent, EventDecodeError> {
    let data = LogData::new(raw.topics.clone(), raw.data.clone()).ok_or_else(|| {
        EventDecodeError::malformed_topics(format!("{} topics", raw.topics.len()))
    })?;

    Transfer::decode_log_data(&data)
        .map(TransferEvent::from)
        .map_err(|e| EventDecodeError::decode_failed(e.to_string()))
}

/// Decode one raw log, logging and swallowing failures.
fn decode_or_warn(raw: &RawLogEntry) -> Option<TransferEvent> {
    match decode_transfer(raw) {
        Ok(event) => Some(event),
        Err(e) => {
            warn!(
                error = %e,
                tx_hash = ?raw.transaction_hash,
                token = ?raw.address,
                "Failed to decode Transfer log"
            );
            None
        }
    }
}

/// Decode a batch into raw/decode pairs in a single pass.
///
/// Output length and order match the input; an undecodable log keeps its
/// position with `event: None`.
pub fn decode_paired(raws: Vec<RawLogEntry>) -> Vec<DecodedLog> {
    let span = spans::decode_transfer_logs(raws.len());
    let _guard = span.enter();

    let paired: Vec<_> = raws
        .into_iter()
        .map(|raw| {
            let event = decode_or_warn(&raw);
            DecodedLog { raw, event }
        })
        .collect();

    let undecodable = paired.iter().filter(|log| log.event.is_none()).count();
    debug!(total = paired.len(), undecodable, "Decoded Transfer logs");
    paired
}
