// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! `eth_getLogs` backed log source with chunking and rate limiting
//!
//! Used for chains configured with an RPC URL instead of the indexed log
//! service. The block range from the query start to the chain head is walked
//! newest chunk first; each filter of the query is sent as its own
//! `eth_getLogs` call per chunk and the results are merged.

use std::cmp::Reverse;
use std::collections::HashSet;
use std::time::Duration;

use alloy_chains::Chain;
use alloy_network::AnyNetwork;
use alloy_provider::Provider;
use alloy_rpc_types::Log;
use async_trait::async_trait;
use tokio::time::sleep;
use tracing::{debug, info, Instrument};

use crate::config::MaxBlockRange;
use crate::errors::{FetchError, RpcError};
use crate::events::filter::LogQuery;
use crate::source::{DeliveryOrder, LogSource};
use crate::spans;
use crate::types::RawLogEntry;

/// Log source that answers queries with plain `eth_getLogs` calls
///
/// # Examples
///
/// ```rust,ignore
/// use transferscan::provider::{create_http_provider, RpcLogSource};
/// use transferscan::config::MaxBlockRange;
/// use alloy_chains::Chain;
///
/// let chain = Chain::from_id(10);
/// let provider = create_http_provider(chain, "https://mainnet.optimism.io")?;
/// let source = RpcLogSource::new(provider, chain, MaxBlockRange::new(2000), None);
/// ```
#[derive(Debug, Clone)]
pub struct RpcLogSource<P> {
    provider: P,
    chain: Chain,
    max_block_range: MaxBlockRange,
    rate_limit_delay: Option<Duration>,
}

impl<P: Provider<AnyNetwork>> RpcLogSource<P> {
    /// Create a source over `provider`.
    pub fn new(
        provider: P,
        chain: Chain,
        max_block_range: MaxBlockRange,
        rate_limit_delay: Option<Duration>,
    ) -> Self {
        Self {
            provider,
            chain,
            max_block_range,
            rate_limit_delay,
        }
    }

    /// Scan from `query.from_block` to the current head.
    ///
    /// Any failed call aborts the scan; partial results are discarded.
    pub async fn scan(
        &self,
        query: &LogQuery,
        order: DeliveryOrder,
    ) -> Result<Vec<RawLogEntry>, FetchError> {
        let head = self
            .provider
            .get_block_number()
            .await
            .map_err(RpcError::get_block_number_failed)?;

        info!(
            chain_id = self.chain.id(),
            from_block = query.from_block,
            head,
            chunk = %self.max_block_range,
            "Starting eth_getLogs scan"
        );

        let mut logs = Vec::new();
        let mut chunks = self
            .max_block_range
            .descending_chunks(query.from_block, head)
            .peekable();

        while let Some((lo, hi)) = chunks.next() {
            let chunk_logs = self
                .fetch_chunk(query, lo, hi)
                .instrument(spans::rpc_chunk(self.chain, lo, hi))
                .await?;
            logs.extend(merge_newest_first(chunk_logs));

            if let Some(delay) = self.rate_limit_delay {
                if chunks.peek().is_some() {
                    debug!(delay_ms = delay.as_millis() as u64, "Applying rate limit delay");
                    sleep(delay).await;
                }
            }
        }

        if order == DeliveryOrder::Ascending {
            logs.reverse();
        }

        info!(
            chain_id = self.chain.id(),
            total_logs = logs.len(),
            "Finished eth_getLogs scan"
        );

        Ok(logs.into_iter().map(RawLogEntry::from).collect())
    }

    async fn fetch_chunk(
        &self,
        query: &LogQuery,
        lo: u64,
        hi: u64,
    ) -> Result<Vec<Log>, FetchError> {
        let mut logs = Vec::new();

        for (index, log_filter) in query.filters().iter().enumerate() {
            let filter = log_filter.to_rpc_filter().from_block(lo).to_block(hi);

            let batch = self.provider.get_logs(&filter).await.map_err(|e| {
                RpcError::get_logs_failed(format!("filter {index} blocks {lo}-{hi}"), e)
            })?;

            debug!(filter = index, lo, hi, logs = batch.len(), "Fetched logs for chunk");
            logs.extend(batch);
        }

        Ok(logs)
    }
}

#[async_trait]
impl<P> LogSource for RpcLogSource<P>
where
    P: Provider<AnyNetwork> + Send + Sync,
{
    fn name(&self) -> &'static str {
        "json-rpc"
    }

    async fn collect(
        &self,
        query: &LogQuery,
        order: DeliveryOrder,
    ) -> Result<Vec<RawLogEntry>, FetchError> {
        self.scan(query, order).await
    }
}

/// Sort logs newest first and drop duplicates.
///
/// A self-transfer matches both the sender and the receiver filter and comes
/// back twice; the copies share a transaction hash and log index.
pub(crate) fn merge_newest_first(mut logs: Vec<Log>) -> Vec<Log> {
    logs.sort_by_key(|log| Reverse((log.block_number, log.log_index)));

    let mut seen = HashSet::new();
    logs.retain(|log| seen.insert((log.block_number, log.transaction_hash, log.log_index)));
    logs
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::B256;

    fn log(block: u64, index: u64, tx: u8) -> Log {
        Log {
            block_number: Some(block),
            log_index: Some(index),
            transaction_hash: Some(B256::repeat_byte(tx)),
            ..Default::default()
        }
    }

    fn positions(logs: &[Log]) -> Vec<(Option<u64>, Option<u64>)> {
        logs.iter().map(|l| (l.block_number, l.log_index)).collect()
    }

    #[test]
    fn test_merge_orders_newest_first() {
        let merged = merge_newest_first(vec![log(5, 0, 1), log(9, 2, 2), log(9, 7, 3), log(1, 0, 4)]);

        assert_eq!(
            positions(&merged),
            vec![
                (Some(9), Some(7)),
                (Some(9), Some(2)),
                (Some(5), Some(0)),
                (Some(1), Some(0)),
            ]
        );
    }

    #[test]
    fn test_merge_drops_self_transfer_duplicate() {
        let merged = merge_newest_first(vec![log(5, 3, 1), log(6, 0, 2), log(5, 3, 1)]);

        assert_eq!(merged.len(), 2);
        assert_eq!(positions(&merged), vec![(Some(6), Some(0)), (Some(5), Some(3))]);
    }

    #[test]
    fn test_merge_keeps_distinct_logs_in_same_transaction() {
        let merged = merge_newest_first(vec![log(5, 3, 1), log(5, 4, 1)]);
        assert_eq!(merged.len(), 2);
    }
}
