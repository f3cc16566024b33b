// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Process-wide registry of per-chain log sources
//!
//! The [`SourceRegistry`] maps a chain id to the [`LogSource`] serving it.
//! Sources are created lazily on first use from [`TransferscanConfig`] and
//! shared afterwards, so every request for a chain reuses the same HTTP
//! connection pool.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use transferscan::provider::SourceRegistry;
//! use transferscan::TransferscanConfig;
//! use alloy_chains::Chain;
//!
//! let registry = Arc::new(SourceRegistry::new(TransferscanConfig::from_env()?)?);
//!
//! // Built on first access, shared on every later one
//! let source = registry.get_or_init(Chain::from_id(8453))?;
//! ```

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use alloy_chains::Chain;
use tracing::{debug, info};
use url::Url;

use crate::config::{Backend, TransferscanConfig};
use crate::errors::FetchError;
use crate::hypersync::HypersyncClient;
use crate::source::LogSource;

use super::{create_http_provider, RpcLogSource};

/// Shared handle to a chain's log source
pub type SharedSource = Arc<dyn LogSource>;

/// A thread-safe registry of log sources indexed by chain id
///
/// Reads take a shared lock; the write lock is held only while a chain's
/// source is inserted. A poisoned lock is recovered, since the map holds no
/// invariant a panicking writer could break.
pub struct SourceRegistry {
    sources: RwLock<HashMap<u64, SharedSource>>,
    config: TransferscanConfig,
    http: reqwest::Client,
}

impl std::fmt::Debug for SourceRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceRegistry")
            .field("chains", &self.chains())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl SourceRegistry {
    /// Create an empty registry.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Transport`] if the shared HTTP client cannot be
    /// built.
    pub fn new(config: TransferscanConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| FetchError::transport("client builder", e))?;
        Ok(Self::with_client(config, http))
    }

    /// Create an empty registry sharing an existing HTTP client.
    pub fn with_client(config: TransferscanConfig, http: reqwest::Client) -> Self {
        Self {
            sources: RwLock::new(HashMap::new()),
            config,
            http,
        }
    }

    /// Configuration the registry builds sources from.
    pub fn config(&self) -> &TransferscanConfig {
        &self.config
    }

    /// Register `source` for `chain`, replacing any existing one.
    pub fn insert(&self, chain: Chain, source: SharedSource) {
        let mut sources = self.sources.write().unwrap_or_else(PoisonError::into_inner);
        if sources.insert(chain.id(), source).is_some() {
            debug!(chain_id = chain.id(), "Replaced log source");
        }
    }

    /// Source for `chain`, if one has been created.
    pub fn get(&self, chain: Chain) -> Option<SharedSource> {
        self.sources
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&chain.id())
            .cloned()
    }

    /// Source for `chain`, creating it from configuration on first use.
    ///
    /// Only chains with a known name or a configuration override are kept in
    /// the registry. Any other chain id gets a fresh, uncached source per
    /// call, so ids taken from requests cannot grow the map or take the write
    /// lock.
    ///
    /// Concurrent first calls for the same chain may each build a source;
    /// only the first inserted one is kept and returned to all callers.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidEndpoint`] or [`FetchError::Rpc`] when the
    /// configured endpoint for the chain is unusable.
    pub fn get_or_init(&self, chain: Chain) -> Result<SharedSource, FetchError> {
        if let Some(source) = self.get(chain) {
            return Ok(source);
        }

        let built = self.build_source(chain)?;

        if !self.is_cacheable(chain) {
            debug!(
                chain_id = chain.id(),
                source = built.name(),
                "Using uncached log source for unlisted chain"
            );
            return Ok(built);
        }

        let mut sources = self.sources.write().unwrap_or_else(PoisonError::into_inner);
        let source = sources.entry(chain.id()).or_insert(built).clone();

        info!(
            chain_id = chain.id(),
            source = source.name(),
            "Registered log source"
        );

        Ok(source)
    }

    /// Whether sources for `chain` are kept across calls.
    ///
    /// Named chains and configured chains form a bounded set.
    pub fn is_cacheable(&self, chain: Chain) -> bool {
        chain.named().is_some() || self.config.chain_overrides.contains_key(&chain.id())
    }

    /// Check if a source exists for a chain
    pub fn contains(&self, chain: Chain) -> bool {
        self.sources
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&chain.id())
    }

    /// Get the number of registered sources
    pub fn len(&self) -> usize {
        self.sources.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Chain ids with a registered source
    pub fn chains(&self) -> Vec<u64> {
        self.sources
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .copied()
            .collect()
    }

    fn build_source(&self, chain: Chain) -> Result<SharedSource, FetchError> {
        match self.config.backend_for(chain) {
            Backend::Hypersync(endpoint) => {
                let url = endpoint
                    .parse::<Url>()
                    .map_err(|e| FetchError::invalid_endpoint(&endpoint, e.to_string()))?;
                let client = HypersyncClient::new(
                    self.http.clone(),
                    url,
                    self.config.hypersync_api_token.clone(),
                )?;
                Ok(Arc::new(client))
            }
            Backend::JsonRpc(url) => {
                let provider = create_http_provider(chain, &url)?;
                Ok(Arc::new(RpcLogSource::new(
                    provider,
                    chain,
                    self.config.get_max_block_range(chain),
                    self.config.get_rate_limit_delay(chain),
                )))
            }
        }
    }
}
