// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Raw log entries as delivered by a log source

use alloy_primitives::{Address, BlockNumber, Bytes, TxHash, B256};

/// One on-chain log as returned by the remote log service.
///
/// Only the fields of the transfer field selection are carried. Fields the
/// service omits stay `None`; topics are kept up to the first missing slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawLogEntry {
    /// Indexed topics in slot order (signature first)
    pub topics: Vec<B256>,
    /// Non-indexed payload
    pub data: Bytes,
    /// Contract that emitted the log
    pub address: Option<Address>,
    /// Block the log was included in
    pub block_number: Option<BlockNumber>,
    /// Transaction that emitted the log
    pub transaction_hash: Option<TxHash>,
}

impl RawLogEntry {
    /// The topic at `slot`, if present.
    pub fn topic(&self, slot: usize) -> Option<B256> {
        self.topics.get(slot).copied()
    }
}

impl From<alloy_rpc_types::Log> for RawLogEntry {
    fn from(log: alloy_rpc_types::Log) -> Self {
        Self {
            topics: log.inner.data.topics().to_vec(),
            data: log.inner.data.data.clone(),
            address: Some(log.inner.address),
            block_number: log.block_number,
            transaction_hash: log.transaction_hash,
        }
    }
}
