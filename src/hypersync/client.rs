// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP client for the indexed log service

use std::time::Instant;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info, Instrument};
use url::Url;

use crate::errors::FetchError;
use crate::events::filter::LogQuery;
use crate::hypersync::wire::{QueryRequest, QueryResponse};
use crate::source::{DeliveryOrder, LogSource};
use crate::spans;
use crate::types::RawLogEntry;

/// Client for one chain's endpoint of the indexed log service
///
/// Cheap to clone: the underlying `reqwest::Client` is a shared connection
/// pool. No request is ever retried.
///
/// # Examples
///
/// ```rust,ignore
/// use transferscan::hypersync::HypersyncClient;
/// use transferscan::source::DeliveryOrder;
///
/// let client = HypersyncClient::new(
///     reqwest::Client::new(),
///     "https://8453.hypersync.xyz".parse()?,
///     None,
/// )?;
/// let logs = client.collect(&query, DeliveryOrder::MostRecentFirst).await?;
/// ```
#[derive(Debug, Clone)]
pub struct HypersyncClient {
    http: Client,
    endpoint: Url,
    query_url: Url,
    api_token: Option<String>,
}

impl HypersyncClient {
    /// Create a client for `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidEndpoint`] when the endpoint cannot carry
    /// a `/query` path.
    pub fn new(http: Client, endpoint: Url, api_token: Option<String>) -> Result<Self, FetchError> {
        let query_url = format!("{}/query", endpoint.as_str().trim_end_matches('/'))
            .parse::<Url>()
            .map_err(|e| FetchError::invalid_endpoint(endpoint.as_str(), e.to_string()))?;

        Ok(Self {
            http,
            endpoint,
            query_url,
            api_token,
        })
    }

    /// Base endpoint of this client.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Run a single query page.
    pub async fn query(&self, request: &QueryRequest) -> Result<QueryResponse, FetchError> {
        let endpoint = self.query_url.as_str();
        let started = Instant::now();

        let mut builder = self.http.post(self.query_url.clone()).json(request);
        if let Some(token) = &self.api_token {
            builder = builder.bearer_auth(token);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| FetchError::transport(endpoint, e))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::transport(endpoint, e))?;

        if !status.is_success() {
            return Err(FetchError::status(
                endpoint,
                status.as_u16(),
                String::from_utf8_lossy(&body),
            ));
        }

        let page: QueryResponse = serde_json::from_slice(&body)
            .map_err(|e| FetchError::invalid_response(endpoint, e.to_string()))?;

        debug!(
            from_block = request.from_block,
            next_block = page.next_block,
            archive_height = ?page.archive_height,
            server_ms = ?page.total_execution_time,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Query page received"
        );

        Ok(page)
    }

    /// Collect every log matching `query`, following pagination.
    ///
    /// Pages are requested from `query.from_block` onwards, resuming at each
    /// page's `next_block`, until the service reports that its archive height
    /// has been passed or the cursor stops advancing. With
    /// [`DeliveryOrder::MostRecentFirst`] the logs are handed back newest first.
    pub async fn collect(
        &self,
        query: &LogQuery,
        order: DeliveryOrder,
    ) -> Result<Vec<RawLogEntry>, FetchError> {
        let mut request = QueryRequest::from(query);
        let mut logs = Vec::new();
        let mut pages = 0usize;

        loop {
            let page = self
                .query(&request)
                .instrument(spans::query_page(request.from_block))
                .await?;
            pages += 1;

            let next_block = page.next_block;
            let archive_height = page.archive_height;
            logs.extend(page.into_logs().into_iter().map(RawLogEntry::from));

            let exhausted = archive_height.is_none_or(|height| next_block > height);
            if exhausted || next_block <= request.from_block {
                break;
            }
            request.from_block = next_block;
        }

        if order == DeliveryOrder::MostRecentFirst {
            logs.reverse();
        }

        info!(
            endpoint = %self.endpoint,
            pages,
            logs = logs.len(),
            "Collected logs"
        );

        Ok(logs)
    }
}

#[async_trait]
impl LogSource for HypersyncClient {
    fn name(&self) -> &'static str {
        "hypersync"
    }

    async fn collect(
        &self,
        query: &LogQuery,
        order: DeliveryOrder,
    ) -> Result<Vec<RawLogEntry>, FetchError> {
        HypersyncClient::collect(self, query, order).await
    }
}
