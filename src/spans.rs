// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Span creation helpers for transferscan operations.
//!
//! Telemetry is kept apart from business logic: instead of `#[instrument]`
//! attributes, each instrumented operation has a span helper here and the
//! caller attaches it with [`tracing::Instrument`].
//!
//! ```rust,ignore
//! pub async fn my_operation(&self, param: Type) -> Result<T> {
//!     async move {
//!         // Business logic here
//!     }
//!     .instrument(spans::my_operation(param))
//!     .await
//! }
//! ```

use alloy_chains::Chain;
use alloy_primitives::{Address, BlockNumber};
use tracing::Span;

/// Create span for one account lookup.
///
/// Parent: None (root span for this operation, or the HTTP request span)
/// Children: fetch_logs, decode_transfer_logs
#[inline]
pub(crate) fn lookup_transfers(chain: Chain, account: Address, token: Option<Address>) -> Span {
    tracing::info_span!(
        "transferscan.lookup_transfers",
        chain_id = chain.id(),
        account = %account,
        token = ?token,
    )
}

/// Create span for collecting logs from a chain's source.
///
/// Parent: lookup_transfers
/// Children: query_page or rpc_chunk spans
#[inline]
pub(crate) fn fetch_logs(chain: Chain, source: &'static str, filters: usize) -> Span {
    tracing::info_span!(
        "transferscan.fetch_logs",
        chain_id = chain.id(),
        source = source,
        filters = filters,
    )
}

/// Create span for one page of the indexed log service.
///
/// Parent: fetch_logs
#[inline]
pub(crate) fn query_page(from_block: BlockNumber) -> Span {
    tracing::debug_span!("transferscan.query_page", from_block = from_block)
}

/// Create span for one `eth_getLogs` block chunk.
///
/// Parent: fetch_logs
/// Children: rpc_call spans from the transport logging layer
#[inline]
pub(crate) fn rpc_chunk(chain: Chain, from_block: BlockNumber, to_block: BlockNumber) -> Span {
    tracing::debug_span!(
        "transferscan.rpc_chunk",
        chain_id = chain.id(),
        from_block = from_block,
        to_block = to_block,
    )
}

/// Create span for decoding a batch of raw logs.
///
/// Parent: lookup_transfers
#[inline]
pub(crate) fn decode_transfer_logs(count: usize) -> Span {
    tracing::debug_span!("transferscan.decode_transfer_logs", count = count)
}
