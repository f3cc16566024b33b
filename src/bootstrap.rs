// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Process startup: configuration, shared state, listener

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use crate::api::{serve_api, AppState};
use crate::config::TransferscanConfig;
use crate::lookup::TransferLookup;
use crate::provider::SourceRegistry;

/// Main entry point for the application.
pub async fn run() -> anyhow::Result<()> {
    let config = TransferscanConfig::from_env()?;

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;

    serve(listener, config).await
}

/// Serve lookups on `listener` with `config`.
pub async fn serve(listener: TcpListener, config: TransferscanConfig) -> anyhow::Result<()> {
    info!(
        hypersync_url_template = %config.hypersync_url_template,
        from_block = config.from_block,
        rpc_chains = config
            .chain_overrides
            .values()
            .filter(|c| c.backend.is_some())
            .count(),
        request_timeout_secs = config.request_timeout.as_secs(),
        "Loaded configuration"
    );

    let request_timeout = config.request_timeout;
    let registry = Arc::new(SourceRegistry::new(config)?);
    let state = AppState::new(TransferLookup::new(registry), request_timeout);

    serve_api(listener, state).await
}
