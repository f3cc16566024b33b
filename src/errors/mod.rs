// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the transferscan library.
//!
//! This module follows a hybrid approach:
//!
//! - **Module-specific errors** for fine-grained handling ([`ValidationError`],
//!   [`FetchError`], [`RpcError`], [`EventDecodeError`], [`ConfigError`])
//! - **Unified error type** ([`TransferscanError`]) for callers that only need
//!   to know which stage of a lookup failed
//!
//! # Taxonomy
//!
//! | Error | Stage | Surfaced to callers |
//! |---|---|---|
//! | [`ValidationError`] | request parsing | yes, as a 400 |
//! | [`FetchError`] | remote log retrieval | generic 500, detail logged |
//! | [`EventDecodeError`] | per-log decoding | never; the record carries nulls |
//! | [`ConfigError`] | process startup | the binary exits |
//!
//! An empty result is not an error. It is reported as
//! [`TransferOutcome::NoTransfers`](crate::TransferOutcome::NoTransfers).
//!
//! # Examples
//!
//! ```rust,ignore
//! use transferscan::{TransferscanError, FetchError};
//!
//! match lookup.respond(Some("8453"), Some("0xabc0000000000000000000000000000000000123"), None).await {
//!     Ok(response) => println!("{response:?}"),
//!     Err(TransferscanError::Fetch(FetchError::Cancelled)) => eprintln!("timed out"),
//!     Err(e) => eprintln!("lookup failed: {e}"),
//! }
//! ```

mod config;
mod decode;
mod fetch;
mod rpc;
mod validation;

pub use config::ConfigError;
pub use decode::EventDecodeError;
pub use fetch::FetchError;
pub use rpc::RpcError;
pub use validation::ValidationError;

/// Unified error type for all transferscan operations.
///
/// All module-specific error types convert via `From`, so `?` propagates
/// them naturally.
#[derive(Debug, thiserror::Error)]
pub enum TransferscanError {
    /// The request parameters were missing or malformed.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The remote log service could not be queried.
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// The environment carried an unusable setting.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl TransferscanError {
    /// Whether the caller is at fault (400-class) rather than the backend.
    pub fn is_client_error(&self) -> bool {
        matches!(self, TransferscanError::Validation(_))
    }
}
