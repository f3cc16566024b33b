// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Remote log retrieval for one chain
//!
//! [`LogFetcher`] resolves the chain's [`LogSource`](crate::source::LogSource)
//! from the shared [`SourceRegistry`] and runs a [`LogQuery`] against it with
//! newest-first delivery. It never reorders, retries or filters what the
//! source returns.

use std::future::Future;
use std::sync::Arc;

use alloy_chains::Chain;
use tracing::{debug, Instrument};

use crate::errors::FetchError;
use crate::events::filter::LogQuery;
use crate::provider::SourceRegistry;
use crate::source::DeliveryOrder;
use crate::spans;
use crate::types::RawLogEntry;

/// Executes log queries against the per-chain source
#[derive(Debug, Clone)]
pub struct LogFetcher {
    registry: Arc<SourceRegistry>,
}

impl LogFetcher {
    /// Create a fetcher over a shared registry.
    pub fn new(registry: Arc<SourceRegistry>) -> Self {
        Self { registry }
    }

    /// The registry sources are resolved from.
    pub fn registry(&self) -> &Arc<SourceRegistry> {
        &self.registry
    }

    /// Fetch every log matching `query` on `chain`, newest first.
    ///
    /// An empty vector is a successful answer.
    pub async fn fetch(
        &self,
        chain: Chain,
        query: &LogQuery,
    ) -> Result<Vec<RawLogEntry>, FetchError> {
        self.fetch_until(chain, query, futures::future::pending()).await
    }

    /// Like [`fetch`](Self::fetch), abandoned as soon as `cancel` resolves.
    ///
    /// On cancellation the in-flight request is dropped and
    /// [`FetchError::Cancelled`] is returned.
    pub async fn fetch_until<C>(
        &self,
        chain: Chain,
        query: &LogQuery,
        cancel: C,
    ) -> Result<Vec<RawLogEntry>, FetchError>
    where
        C: Future<Output = ()>,
    {
        let source = self.registry.get_or_init(chain)?;
        let span = spans::fetch_logs(chain, source.name(), query.filters().len());

        async move {
            let logs = tokio::select! {
                biased;
                () = cancel => {
                    debug!("Fetch cancelled");
                    return Err(FetchError::Cancelled);
                }
                result = source.collect(query, DeliveryOrder::MostRecentFirst) => result?,
            };

            debug!(logs = logs.len(), "Fetched logs");
            Ok(logs)
        }
        .instrument(span)
        .await
    }
}
