// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for transferscan integration tests
//!
//! Provides a mock log source and log builders so the lookup pipeline can run
//! without a network.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use alloy_chains::Chain;
use alloy_primitives::{Address, Bytes, B256, U256};
use alloy_sol_types::SolEvent;
use async_trait::async_trait;
use transferscan::address::pad;
use transferscan::provider::SourceRegistry;
use transferscan::{
    DeliveryOrder, FetchError, LogQuery, LogSource, RawLogEntry, Transfer, TransferLookup,
    TransferscanConfig,
};

/// What the mock does when asked for logs
enum Behavior {
    /// Return the canned logs that match the query
    Logs(Vec<RawLogEntry>),
    /// Fail with a status error
    Fail(u16),
    /// Never answer
    Hang,
}

/// Mock LogSource for testing the lookup pipeline
///
/// Canned logs are stored newest first and filtered with
/// [`LogQuery::matches`], so a query only sees what a real backend would
/// return for it. Every received query is recorded.
///
/// # Example
///
/// ```rust,ignore
/// let mock = MockLogSource::with_logs(vec![transfer_log(token, a, b, 5, 100, 1)]);
/// let lookup = lookup_with(Chain::from_id(8453), mock.clone());
/// ```
pub struct MockLogSource {
    behavior: Behavior,
    queries: Mutex<Vec<LogQuery>>,
}

impl MockLogSource {
    /// A source holding `logs`, newest first
    pub fn with_logs(logs: Vec<RawLogEntry>) -> Arc<Self> {
        Arc::new(Self {
            behavior: Behavior::Logs(logs),
            queries: Mutex::new(Vec::new()),
        })
    }

    /// A source that answers every query with an HTTP status error
    pub fn failing(status: u16) -> Arc<Self> {
        Arc::new(Self {
            behavior: Behavior::Fail(status),
            queries: Mutex::new(Vec::new()),
        })
    }

    /// A source that never answers
    pub fn hanging() -> Arc<Self> {
        Arc::new(Self {
            behavior: Behavior::Hang,
            queries: Mutex::new(Vec::new()),
        })
    }

    /// Queries received so far
    pub fn queries(&self) -> Vec<LogQuery> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl LogSource for MockLogSource {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn collect(
        &self,
        query: &LogQuery,
        order: DeliveryOrder,
    ) -> Result<Vec<RawLogEntry>, FetchError> {
        self.queries.lock().unwrap().push(query.clone());

        match &self.behavior {
            Behavior::Logs(logs) => {
                let mut matched: Vec<_> = logs.iter().filter(|log| query.matches(log)).cloned().collect();
                if order == DeliveryOrder::Ascending {
                    matched.reverse();
                }
                Ok(matched)
            }
            Behavior::Fail(status) => Err(FetchError::status(
                "http://mock.invalid/query",
                *status,
                "upstream unavailable",
            )),
            Behavior::Hang => futures::future::pending().await,
        }
    }
}

/// A lookup whose registry serves `chain` from `source`
pub fn lookup_with(chain: Chain, source: Arc<MockLogSource>) -> TransferLookup {
    lookup_with_config(TransferscanConfig::default(), chain, source)
}

/// Same as [`lookup_with`] with a custom configuration
pub fn lookup_with_config(
    config: TransferscanConfig,
    chain: Chain,
    source: Arc<MockLogSource>,
) -> TransferLookup {
    let registry = SourceRegistry::with_client(config, reqwest::Client::new());
    registry.insert(chain, source);
    TransferLookup::new(Arc::new(registry))
}

/// A well-formed Transfer log
pub fn transfer_log(
    token: Address,
    from: Address,
    to: Address,
    amount: u64,
    block: u64,
    tx: u8,
) -> RawLogEntry {
    RawLogEntry {
        topics: vec![Transfer::SIGNATURE_HASH, pad(from), pad(to)],
        data: Bytes::from(U256::from(amount).to_be_bytes::<32>().to_vec()),
        address: Some(token),
        block_number: Some(block),
        transaction_hash: Some(B256::repeat_byte(tx)),
    }
}

/// A Transfer-signature log whose data is too short to decode
pub fn truncated_log(token: Address, from: Address, to: Address, block: u64, tx: u8) -> RawLogEntry {
    RawLogEntry {
        data: Bytes::from(vec![0u8; 4]),
        ..transfer_log(token, from, to, 0, block, tx)
    }
}
