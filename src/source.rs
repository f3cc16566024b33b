// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Log source abstraction
//!
//! A [`LogSource`] executes a [`LogQuery`] against some remote backend and
//! returns the matching logs. Two implementations ship with the crate:
//!
//! - [`HypersyncClient`](crate::hypersync::HypersyncClient): the indexed log
//!   service, queried over its JSON API (default for every chain)
//! - [`RpcLogSource`](crate::provider::RpcLogSource): plain `eth_getLogs`
//!   over an Alloy provider, for chains configured with an RPC URL
//!
//! Tests substitute their own implementation to run the pipeline without a
//! network.

use async_trait::async_trait;

use crate::errors::FetchError;
use crate::events::filter::LogQuery;
use crate::types::RawLogEntry;

/// Order in which a source delivers matching logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeliveryOrder {
    /// Oldest block first.
    Ascending,
    /// Newest block first.
    #[default]
    MostRecentFirst,
}

/// A remote backend that can answer a [`LogQuery`].
///
/// Implementations must honor the OR-across-filters / AND-within-filter
/// semantics of [`LogQuery::matches`], must deliver logs in the requested
/// [`DeliveryOrder`], and must not retry failed requests.
#[async_trait]
pub trait LogSource: Send + Sync {
    /// Short backend name for logs and spans.
    fn name(&self) -> &'static str;

    /// Collect every log matching `query`.
    ///
    /// An empty vector is a successful answer.
    async fn collect(
        &self,
        query: &LogQuery,
        order: DeliveryOrder,
    ) -> Result<Vec<RawLogEntry>, FetchError>;
}
