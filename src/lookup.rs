// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Account transfer lookup
//!
//! [`TransferLookup`] runs the full pipeline for one request:
//!
//! 1. validate parameters into a [`TransferQuery`]
//! 2. build the bidirectional [`LogQuery`]
//! 3. fetch raw logs newest first
//! 4. decode each log against the Transfer event
//! 5. assemble transfer records and present them
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use transferscan::lookup::TransferLookup;
//! use transferscan::provider::SourceRegistry;
//! use transferscan::TransferscanConfig;
//!
//! let registry = Arc::new(SourceRegistry::new(TransferscanConfig::default())?);
//! let lookup = TransferLookup::new(registry);
//!
//! let response = lookup
//!     .respond(Some("8453"), Some("0xabc0000000000000000000000000000000000123"), None)
//!     .await?;
//! ```

use std::future::Future;
use std::sync::Arc;

use tracing::{info, Instrument};

use crate::errors::{FetchError, TransferscanError};
use crate::events::{assemble, decode_paired, LogQuery, TransferFilterBuilder};
use crate::fetch::LogFetcher;
use crate::presenter::{present, TransferResponse};
use crate::provider::SourceRegistry;
use crate::spans;
use crate::types::{TransferOutcome, TransferQuery};

/// Orchestrates a transfer lookup against the shared source registry
#[derive(Debug, Clone)]
pub struct TransferLookup {
    fetcher: LogFetcher,
}

impl TransferLookup {
    pub fn new(registry: Arc<SourceRegistry>) -> Self {
        Self {
            fetcher: LogFetcher::new(registry),
        }
    }

    /// The log query for `query`, starting at the chain's configured block.
    pub fn build_query(&self, query: &TransferQuery) -> LogQuery {
        let from_block = self.fetcher.registry().config().get_from_block(query.chain);
        TransferFilterBuilder::for_query(query)
            .from_block(from_block)
            .build()
    }

    /// Look up every transfer involving the query's account.
    pub async fn lookup(&self, query: &TransferQuery) -> Result<TransferOutcome, FetchError> {
        self.lookup_until(query, futures::future::pending()).await
    }

    /// Like [`lookup`](Self::lookup), abandoned as soon as `cancel` resolves.
    pub async fn lookup_until<C>(
        &self,
        query: &TransferQuery,
        cancel: C,
    ) -> Result<TransferOutcome, FetchError>
    where
        C: Future<Output = ()>,
    {
        let span = spans::lookup_transfers(query.chain, query.account, query.scope.contract());

        async move {
            let log_query = self.build_query(query);
            let raw = self.fetcher.fetch_until(query.chain, &log_query, cancel).await?;
            let outcome = assemble(decode_paired(raw));

            info!(records = outcome.records().len(), "Transfer lookup complete");
            Ok(outcome)
        }
        .instrument(span)
        .await
    }

    /// Validate raw parameters, look up, and present the result.
    ///
    /// # Errors
    ///
    /// [`TransferscanError::Validation`] before any remote call, or
    /// [`TransferscanError::Fetch`] when the backend fails.
    pub async fn respond(
        &self,
        chain: Option<&str>,
        account: Option<&str>,
        token: Option<&str>,
    ) -> Result<TransferResponse, TransferscanError> {
        self.respond_until(chain, account, token, futures::future::pending())
            .await
    }

    /// Like [`respond`](Self::respond), abandoned as soon as `cancel` resolves.
    pub async fn respond_until<C>(
        &self,
        chain: Option<&str>,
        account: Option<&str>,
        token: Option<&str>,
        cancel: C,
    ) -> Result<TransferResponse, TransferscanError>
    where
        C: Future<Output = ()>,
    {
        let query = TransferQuery::parse(chain, account, token)?;
        let outcome = self.lookup_until(&query, cancel).await?;
        Ok(present(query.account, outcome))
    }
}
