// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration for transferscan
//!
//! Controls where each chain's logs come from, where scans start, how the
//! JSON-RPC backend chunks and paces its requests, and the HTTP surface.
//!
//! # Example: Using defaults
//!
//! ```rust
//! use transferscan::TransferscanConfig;
//! use alloy_chains::Chain;
//!
//! let config = TransferscanConfig::default();
//! assert_eq!(config.hypersync_url(Chain::from_id(8453)), "https://8453.hypersync.xyz");
//! ```
//!
//! # Example: Custom configuration
//!
//! ```rust
//! use transferscan::{Backend, TransferscanConfigBuilder};
//! use alloy_chains::Chain;
//! use std::time::Duration;
//!
//! let config = TransferscanConfigBuilder::new()
//!     .max_block_range(1000)
//!     .chain_rpc_url(Chain::from_id(10), "http://localhost:8545")
//!     .chain_rate_limit(Chain::from_id(10), Duration::from_millis(100))
//!     .build();
//!
//! assert_eq!(
//!     config.backend_for(Chain::from_id(10)),
//!     Backend::JsonRpc("http://localhost:8545".to_string())
//! );
//! ```
//!
//! # Example: From the environment
//!
//! ```rust,ignore
//! use transferscan::TransferscanConfig;
//!
//! // Reads `.env` if present, then the process environment
//! let config = TransferscanConfig::from_env()?;
//! ```

use std::collections::HashMap;
use std::str::FromStr;
use std::time::Duration;

use alloy_chains::Chain;
use alloy_primitives::BlockNumber;
use tracing::debug;

use crate::errors::ConfigError;
use crate::types::parse_chain;

mod block_range;
pub mod constants;

pub use block_range::MaxBlockRange;

use constants::{env, CHAIN_ID_PLACEHOLDER};

/// Configuration for transferscan operations
///
/// Use [`TransferscanConfigBuilder`] for a fluent API to construct instances,
/// or [`TransferscanConfig::from_env`] in a deployed process.
#[derive(Debug, Clone)]
pub struct TransferscanConfig {
    /// Endpoint template of the indexed log service
    /// Default: `https://{chain_id}.hypersync.xyz`
    pub hypersync_url_template: String,

    /// Bearer token sent to the indexed log service
    /// Default: None
    pub hypersync_api_token: Option<String>,

    /// End-to-end budget of one HTTP lookup
    /// Default: 30 seconds
    pub request_timeout: Duration,

    /// First block scanned
    /// Default: 0
    pub from_block: BlockNumber,

    /// Maximum number of blocks per `eth_getLogs` call
    /// Default: 500
    pub max_block_range: MaxBlockRange,

    /// Delay between `eth_getLogs` chunks
    /// Default: None (no delay)
    pub rate_limit_delay: Option<Duration>,

    /// Listening port of the HTTP server
    /// Default: 3000
    pub port: u16,

    /// Chain-specific overrides, keyed by chain id
    pub chain_overrides: HashMap<u64, ChainConfig>,
}

/// Chain-specific configuration overrides
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChainConfig {
    /// Override the log backend for this chain
    pub backend: Option<Backend>,

    /// Override the first scanned block for this chain
    pub from_block: Option<BlockNumber>,

    /// Override max block range for this chain
    pub max_block_range: Option<MaxBlockRange>,

    /// Override rate limit delay for this chain
    pub rate_limit_delay: Option<Duration>,
}

/// Where a chain's logs are fetched from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backend {
    /// Indexed log service at this endpoint
    Hypersync(String),
    /// Plain `eth_getLogs` against this JSON-RPC URL
    JsonRpc(String),
}

impl Default for TransferscanConfig {
    fn default() -> Self {
        Self {
            hypersync_url_template: constants::DEFAULT_HYPERSYNC_URL_TEMPLATE.to_string(),
            hypersync_api_token: None,
            request_timeout: constants::DEFAULT_REQUEST_TIMEOUT,
            from_block: constants::DEFAULT_FROM_BLOCK,
            max_block_range: MaxBlockRange::DEFAULT,
            rate_limit_delay: None,
            port: constants::DEFAULT_PORT,
            chain_overrides: HashMap::new(),
        }
    }
}

impl TransferscanConfig {
    /// Load configuration from `.env` (if present) and the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when a recognized variable holds
    /// an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            debug!(path = %path.display(), "Loaded .env file");
        }
        Self::from_vars(std::env::vars())
    }

    /// Build configuration from `(name, value)` pairs.
    ///
    /// Unknown names are ignored and empty values count as unset.
    /// `RPC_URL_<chain>` accepts a numeric chain id or a chain name
    /// (`RPC_URL_8453`, `RPC_URL_BASE`, `RPC_URL_ARBITRUM_SEPOLIA`).
    ///
    /// # Example
    ///
    /// ```rust
    /// use transferscan::{Backend, TransferscanConfig};
    /// use alloy_chains::Chain;
    ///
    /// let config = TransferscanConfig::from_vars([
    ///     ("PORT".to_string(), "8080".to_string()),
    ///     ("RPC_URL_BASE".to_string(), "http://localhost:8545".to_string()),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(config.port, 8080);
    /// assert!(matches!(config.backend_for(Chain::from_id(8453)), Backend::JsonRpc(_)));
    /// ```
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut config = Self::default();

        for (key, value) in vars {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }

            match key.as_str() {
                env::PORT => config.port = parse_value(&key, value)?,
                env::HYPERSYNC_URL_TEMPLATE => config.hypersync_url_template = value.to_string(),
                env::HYPERSYNC_API_TOKEN => config.hypersync_api_token = Some(value.to_string()),
                env::REQUEST_TIMEOUT_SECS => {
                    config.request_timeout = Duration::from_secs(parse_value(&key, value)?)
                }
                env::FROM_BLOCK => config.from_block = parse_value(&key, value)?,
                env::MAX_BLOCK_RANGE => {
                    config.max_block_range = MaxBlockRange::new(parse_value(&key, value)?)
                }
                env::RATE_LIMIT_DELAY_MS => {
                    config.rate_limit_delay = Some(Duration::from_millis(parse_value(&key, value)?))
                }
                _ => {
                    if let Some(suffix) = key.strip_prefix(env::RPC_URL_PREFIX) {
                        let chain = parse_chain(&suffix.replace('_', "-"))
                            .map_err(|e| ConfigError::invalid_value(&key, value, e))?;
                        config.chain_override_mut(chain).backend =
                            Some(Backend::JsonRpc(value.to_string()));
                    }
                }
            }
        }

        Ok(config)
    }

    /// Endpoint of the indexed log service for `chain`.
    pub fn hypersync_url(&self, chain: Chain) -> String {
        self.hypersync_url_template
            .replace(CHAIN_ID_PLACEHOLDER, &chain.id().to_string())
    }

    /// Effective backend for `chain`.
    ///
    /// Returns the chain-specific backend if set, otherwise the indexed log
    /// service endpoint derived from the template.
    pub fn backend_for(&self, chain: Chain) -> Backend {
        self.chain_overrides
            .get(&chain.id())
            .and_then(|c| c.backend.clone())
            .unwrap_or_else(|| Backend::Hypersync(self.hypersync_url(chain)))
    }

    /// Get effective first scanned block for a specific chain
    pub fn get_from_block(&self, chain: Chain) -> BlockNumber {
        self.chain_overrides
            .get(&chain.id())
            .and_then(|c| c.from_block)
            .unwrap_or(self.from_block)
    }

    /// Get effective max block range for a specific chain
    ///
    /// Returns chain-specific override if set, otherwise returns global default.
    pub fn get_max_block_range(&self, chain: Chain) -> MaxBlockRange {
        self.chain_overrides
            .get(&chain.id())
            .and_then(|c| c.max_block_range)
            .unwrap_or(self.max_block_range)
    }

    /// Get effective rate limit delay for a specific chain
    ///
    /// Returns chain-specific override if set, otherwise returns global default.
    pub fn get_rate_limit_delay(&self, chain: Chain) -> Option<Duration> {
        self.chain_overrides
            .get(&chain.id())
            .and_then(|c| c.rate_limit_delay)
            .or(self.rate_limit_delay)
    }

    /// Set chain-specific override
    pub fn set_chain_override(&mut self, chain: Chain, config: ChainConfig) {
        self.chain_overrides.insert(chain.id(), config);
    }

    fn chain_override_mut(&mut self, chain: Chain) -> &mut ChainConfig {
        self.chain_overrides.entry(chain.id()).or_default()
    }
}

fn parse_value<T>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: ToString,
{
    value
        .parse()
        .map_err(|e: T::Err| ConfigError::invalid_value(key, value, e))
}

/// Builder for [`TransferscanConfig`]
///
/// # Example
///
/// ```rust
/// use transferscan::TransferscanConfigBuilder;
/// use alloy_chains::Chain;
/// use std::time::Duration;
///
/// let config = TransferscanConfigBuilder::new()
///     .from_block(1_000_000)
///     .request_timeout(Duration::from_secs(10))
///     .chain_from_block(Chain::from_id(1), 0)
///     .build();
///
/// assert_eq!(config.get_from_block(Chain::from_id(8453)), 1_000_000);
/// assert_eq!(config.get_from_block(Chain::from_id(1)), 0);
/// ```
#[derive(Debug, Default)]
pub struct TransferscanConfigBuilder {
    config: TransferscanConfig,
}

impl TransferscanConfigBuilder {
    /// Create a new builder with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the endpoint template of the indexed log service
    pub fn hypersync_url_template(mut self, template: impl Into<String>) -> Self {
        self.config.hypersync_url_template = template.into();
        self
    }

    /// Set the bearer token sent to the indexed log service
    pub fn hypersync_api_token(mut self, token: impl Into<String>) -> Self {
        self.config.hypersync_api_token = Some(token.into());
        self
    }

    /// Set the end-to-end lookup budget
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.config.request_timeout = timeout;
        self
    }

    /// Set the global first scanned block
    pub fn from_block(mut self, block: BlockNumber) -> Self {
        self.config.from_block = block;
        self
    }

    /// Set global max block range
    pub fn max_block_range(mut self, max: u64) -> Self {
        self.config.max_block_range = MaxBlockRange::new(max);
        self
    }

    /// Set global rate limit delay
    pub fn rate_limit_delay(mut self, delay: Duration) -> Self {
        self.config.rate_limit_delay = Some(delay);
        self
    }

    /// Set the HTTP listening port
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Add chain-specific configuration
    pub fn chain_config(mut self, chain: Chain, config: ChainConfig) -> Self {
        self.config.set_chain_override(chain, config);
        self
    }

    /// Convenience: serve a chain through `eth_getLogs` at `url`
    pub fn chain_rpc_url(mut self, chain: Chain, url: impl Into<String>) -> Self {
        self.config.chain_override_mut(chain).backend = Some(Backend::JsonRpc(url.into()));
        self
    }

    /// Convenience: point a chain at a specific indexed log service endpoint
    pub fn chain_hypersync_url(mut self, chain: Chain, url: impl Into<String>) -> Self {
        self.config.chain_override_mut(chain).backend = Some(Backend::Hypersync(url.into()));
        self
    }

    /// Convenience: set first scanned block for a specific chain
    pub fn chain_from_block(mut self, chain: Chain, block: BlockNumber) -> Self {
        self.config.chain_override_mut(chain).from_block = Some(block);
        self
    }

    /// Convenience: set rate limit delay for a specific chain
    pub fn chain_rate_limit(mut self, chain: Chain, delay: Duration) -> Self {
        self.config.chain_override_mut(chain).rate_limit_delay = Some(delay);
        self
    }

    /// Convenience: set max block range for a specific chain
    pub fn chain_max_blocks(mut self, chain: Chain, max: u64) -> Self {
        self.config.chain_override_mut(chain).max_block_range = Some(MaxBlockRange::new(max));
        self
    }

    /// Build the final configuration
    pub fn build(self) -> TransferscanConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_chains::NamedChain;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_default_config() {
        let config = TransferscanConfig::default();
        let base = Chain::from_named(NamedChain::Base);

        assert_eq!(config.port, 3000);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.get_from_block(base), 0);
        assert_eq!(config.get_max_block_range(base), MaxBlockRange::new(500));
        assert_eq!(config.get_rate_limit_delay(base), None);
        assert_eq!(
            config.backend_for(base),
            Backend::Hypersync("https://8453.hypersync.xyz".to_string())
        );
    }

    #[test]
    fn test_template_substitutes_chain_id() {
        let config = TransferscanConfigBuilder::new()
            .hypersync_url_template("http://indexer.local/{chain_id}/")
            .build();

        assert_eq!(
            config.hypersync_url(Chain::from_id(42161)),
            "http://indexer.local/42161/"
        );
    }

    #[test]
    fn test_from_vars_reads_every_setting() {
        let config = TransferscanConfig::from_vars(vars(&[
            ("PORT", "8080"),
            ("HYPERSYNC_URL_TEMPLATE", "http://localhost:9000/{chain_id}"),
            ("HYPERSYNC_API_TOKEN", "secret"),
            ("REQUEST_TIMEOUT_SECS", "5"),
            ("FROM_BLOCK", "1000"),
            ("MAX_BLOCK_RANGE", "2000"),
            ("RATE_LIMIT_DELAY_MS", "250"),
            ("RPC_URL_10", "http://localhost:8545"),
            ("UNRELATED", "ignored"),
        ]))
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.hypersync_url(Chain::from_id(1)), "http://localhost:9000/1");
        assert_eq!(config.hypersync_api_token.as_deref(), Some("secret"));
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.from_block, 1000);
        assert_eq!(config.max_block_range, MaxBlockRange::new(2000));
        assert_eq!(config.rate_limit_delay, Some(Duration::from_millis(250)));
        assert_eq!(
            config.backend_for(Chain::from_id(10)),
            Backend::JsonRpc("http://localhost:8545".to_string())
        );
        assert!(matches!(
            config.backend_for(Chain::from_id(1)),
            Backend::Hypersync(_)
        ));
    }

    #[test]
    fn test_rpc_url_accepts_chain_names() {
        let config =
            TransferscanConfig::from_vars(vars(&[("RPC_URL_BASE", "http://base.local")])).unwrap();

        assert_eq!(
            config.backend_for(Chain::from_named(NamedChain::Base)),
            Backend::JsonRpc("http://base.local".to_string())
        );
    }

    #[test]
    fn test_rpc_url_rejects_unknown_chain() {
        let err = TransferscanConfig::from_vars(vars(&[("RPC_URL_NOT_A_CHAIN", "http://x")]))
            .unwrap_err();

        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "RPC_URL_NOT_A_CHAIN"));
    }

    #[test]
    fn test_invalid_number_is_reported() {
        let err = TransferscanConfig::from_vars(vars(&[("PORT", "eighty")])).unwrap_err();

        let ConfigError::InvalidValue { key, value, .. } = err;
        assert_eq!(key, "PORT");
        assert_eq!(value, "eighty");
    }

    #[test]
    fn test_empty_values_are_unset() {
        let config =
            TransferscanConfig::from_vars(vars(&[("PORT", ""), ("HYPERSYNC_API_TOKEN", "  ")]))
                .unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(config.hypersync_api_token, None);
    }

    #[test]
    fn test_chain_override_falls_back_to_global() {
        let config = TransferscanConfigBuilder::new()
            .rate_limit_delay(Duration::from_millis(500))
            .max_block_range(1000)
            .chain_rate_limit(Chain::from_id(8453), Duration::from_millis(250))
            .chain_max_blocks(Chain::from_id(8453), 200)
            .build();

        assert_eq!(
            config.get_rate_limit_delay(Chain::from_id(8453)),
            Some(Duration::from_millis(250))
        );
        assert_eq!(
            config.get_max_block_range(Chain::from_id(8453)),
            MaxBlockRange::new(200)
        );
        assert_eq!(
            config.get_rate_limit_delay(Chain::from_id(1)),
            Some(Duration::from_millis(500))
        );
        assert_eq!(
            config.get_max_block_range(Chain::from_id(1)),
            MaxBlockRange::new(1000)
        );
    }

    #[test]
    fn test_chain_convenience_setters_preserve_existing() {
        let chain = Chain::from_id(10);
        let config = TransferscanConfigBuilder::new()
            .chain_rpc_url(chain, "http://op.local")
            .chain_from_block(chain, 7)
            .build();

        assert_eq!(
            config.chain_overrides.get(&10),
            Some(&ChainConfig {
                backend: Some(Backend::JsonRpc("http://op.local".to_string())),
                from_block: Some(7),
                max_block_range: None,
                rate_limit_delay: None,
            })
        );
    }
}
