// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! JSON payloads of the indexed log service query API

use alloy_primitives::{Address, BlockNumber, Bytes, TxHash, B256};
use serde::{Deserialize, Deserializer, Serialize};

use crate::address::to_lower_hex;
use crate::events::filter::{LogField, LogFilter, LogQuery};
use crate::types::RawLogEntry;

/// Body of a `POST /query` request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryRequest {
    /// First block to scan (inclusive)
    pub from_block: BlockNumber,
    /// Last block to scan (exclusive); open-ended when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_block: Option<BlockNumber>,
    /// Log selections, OR-combined
    pub logs: Vec<LogSelection>,
    /// Fields to return per log
    pub field_selection: FieldSelection,
}

/// One log selection: contract addresses and topic slots, AND-combined
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogSelection {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub address: Vec<String>,
    pub topics: Vec<Vec<String>>,
}

/// Requested fields per table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSelection {
    pub log: Vec<LogField>,
}

impl From<&LogFilter> for LogSelection {
    fn from(filter: &LogFilter) -> Self {
        Self {
            address: filter.scope().contract().map(to_lower_hex).into_iter().collect(),
            topics: filter
                .trimmed_topics()
                .iter()
                .map(|slot| slot.iter().map(|topic| format!("{topic:#x}")).collect())
                .collect(),
        }
    }
}

impl From<&LogQuery> for QueryRequest {
    fn from(query: &LogQuery) -> Self {
        Self {
            from_block: query.from_block,
            to_block: None,
            logs: query.filters.iter().map(LogSelection::from).collect(),
            field_selection: FieldSelection {
                log: query.field_selection.clone(),
            },
        }
    }
}

/// Body of a `POST /query` response
#[derive(Debug, Clone, Deserialize)]
pub struct QueryResponse {
    /// Highest block the service has indexed
    #[serde(default, deserialize_with = "quantity_opt")]
    pub archive_height: Option<BlockNumber>,
    /// Block to resume from to continue this query
    #[serde(deserialize_with = "quantity")]
    pub next_block: BlockNumber,
    /// Server-side execution time in milliseconds
    #[serde(default)]
    pub total_execution_time: Option<u64>,
    /// Response data, one object or a list of batches
    #[serde(default)]
    pub data: ResponseData,
}

impl QueryResponse {
    /// All logs of the page, in service order.
    pub fn into_logs(self) -> Vec<WireLog> {
        match self.data {
            ResponseData::Batches(batches) => batches.into_iter().flat_map(|b| b.logs).collect(),
            ResponseData::Single(batch) => batch.logs,
        }
    }
}

/// The `data` member of a query response
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ResponseData {
    Batches(Vec<DataBatch>),
    Single(DataBatch),
}

impl Default for ResponseData {
    fn default() -> Self {
        ResponseData::Batches(Vec::new())
    }
}

/// One batch of response tables; only logs are requested
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataBatch {
    #[serde(default)]
    pub logs: Vec<WireLog>,
}

/// One log as serialized by the service
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WireLog {
    #[serde(default, deserialize_with = "quantity_opt")]
    pub block_number: Option<BlockNumber>,
    pub transaction_hash: Option<TxHash>,
    pub address: Option<Address>,
    pub data: Option<Bytes>,
    pub topic0: Option<B256>,
    pub topic1: Option<B256>,
    pub topic2: Option<B256>,
    pub topic3: Option<B256>,
}

impl From<WireLog> for RawLogEntry {
    fn from(log: WireLog) -> Self {
        Self {
            topics: [log.topic0, log.topic1, log.topic2, log.topic3]
                .into_iter()
                .map_while(|topic| topic)
                .collect(),
            data: log.data.unwrap_or_default(),
            address: log.address,
            block_number: log.block_number,
            transaction_hash: log.transaction_hash,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Quantity {
    Number(u64),
    Text(String),
}

impl Quantity {
    fn into_u64<E: serde::de::Error>(self) -> Result<u64, E> {
        match self {
            Quantity::Number(n) => Ok(n),
            Quantity::Text(text) => match text.strip_prefix("0x") {
                Some(hex) => u64::from_str_radix(hex, 16),
                None => text.parse(),
            }
            .map_err(|e| E::custom(format!("invalid quantity {text:?}: {e}"))),
        }
    }
}

/// Accept a block quantity as a JSON number, a `0x` hex string or a decimal string.
fn quantity<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    Quantity::deserialize(deserializer)?.into_u64()
}

fn quantity_opt<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
    Option::<Quantity>::deserialize(deserializer)?
        .map(Quantity::into_u64)
        .transpose()
}
