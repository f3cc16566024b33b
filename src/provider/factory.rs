// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Provider factory for the JSON-RPC log backend

use alloy_chains::Chain;
use alloy_network::AnyNetwork;
use alloy_provider::ProviderBuilder;
use alloy_rpc_client::ClientBuilder;

use crate::errors::RpcError;
use crate::transport::LoggingLayer;

use super::AnyHttpProvider;

/// Create an HTTP provider for `chain` at `url`
///
/// The provider uses `AnyNetwork`, so any EVM chain can be served, and carries
/// no fillers: only read calls are made. Every request passes through
/// [`LoggingLayer`].
///
/// # Examples
///
/// ```rust,ignore
/// use transferscan::provider::create_http_provider;
/// use alloy_chains::Chain;
///
/// let provider = create_http_provider(Chain::from_id(8453), "https://mainnet.base.org")?;
/// ```
///
/// # Errors
///
/// Returns [`RpcError::ProviderUrlInvalid`] if the URL cannot be parsed.
pub fn create_http_provider(chain: Chain, url: &str) -> Result<AnyHttpProvider, RpcError> {
    let url: url::Url = url
        .parse()
        .map_err(|e| RpcError::ProviderUrlInvalid(format!("{url}: {e}")))?;

    let client = ClientBuilder::default()
        .layer(LoggingLayer::new().with_chain_id(chain.id()))
        .http(url);

    Ok(ProviderBuilder::new()
        .disable_recommended_fillers()
        .network::<AnyNetwork>()
        .connect_client(client))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_unparseable_url() {
        let err = create_http_provider(Chain::from_id(1), "not a url").unwrap_err();
        assert!(matches!(err, RpcError::ProviderUrlInvalid(_)));
    }

    #[test]
    fn test_accepts_http_url() {
        assert!(create_http_provider(Chain::from_id(1), "http://localhost:8545").is_ok());
    }
}
