// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Defaults and environment variable names
//!
//! Centralizes the values [`TransferscanConfig`](super::TransferscanConfig)
//! falls back to when the environment is silent.

use std::time::Duration;

/// Default listening port of the HTTP server
pub const DEFAULT_PORT: u16 = 3000;

/// Endpoint template of the indexed log service; `{chain_id}` is substituted
pub const DEFAULT_HYPERSYNC_URL_TEMPLATE: &str = "https://{chain_id}.hypersync.xyz";

/// Placeholder replaced by the numeric chain id in URL templates
pub const CHAIN_ID_PLACEHOLDER: &str = "{chain_id}";

/// Default end-to-end budget of one lookup
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// First block scanned unless overridden
pub const DEFAULT_FROM_BLOCK: u64 = 0;

/// Environment variable names
pub mod env {
    pub const PORT: &str = "PORT";
    pub const HYPERSYNC_URL_TEMPLATE: &str = "HYPERSYNC_URL_TEMPLATE";
    pub const HYPERSYNC_API_TOKEN: &str = "HYPERSYNC_API_TOKEN";
    pub const REQUEST_TIMEOUT_SECS: &str = "REQUEST_TIMEOUT_SECS";
    pub const FROM_BLOCK: &str = "FROM_BLOCK";
    pub const MAX_BLOCK_RANGE: &str = "MAX_BLOCK_RANGE";
    pub const RATE_LIMIT_DELAY_MS: &str = "RATE_LIMIT_DELAY_MS";
    /// Prefix of per-chain JSON-RPC URLs, e.g. `RPC_URL_8453` or `RPC_URL_BASE`
    pub const RPC_URL_PREFIX: &str = "RPC_URL_";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_carries_placeholder() {
        assert!(DEFAULT_HYPERSYNC_URL_TEMPLATE.contains(CHAIN_ID_PLACEHOLDER));
    }
}
