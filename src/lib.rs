// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! # transferscan
//!
//! ERC-20 transfer lookups for EVM accounts.
//!
//! Given an account and a chain (optionally a token contract), transferscan
//! asks a remote log backend for every `Transfer(address,address,uint256)` log
//! where the account is sender or receiver, decodes them, and returns one
//! record per log, newest first.
//!
//! ## Pipeline
//!
//! 1. [`TransferQuery::parse`] validates the request parameters
//! 2. [`TransferFilterBuilder`] builds the receiver and sender filters
//! 3. [`fetch::LogFetcher`] runs them against the chain's [`source::LogSource`]
//! 4. [`events::decode_paired`] decodes each log, keeping it paired with its decode
//! 5. [`events::assemble`] and [`presenter::present`] shape the response
//!
//! [`lookup::TransferLookup`] drives all five steps.
//!
//! ## Backends
//!
//! - the indexed log service ([`hypersync::HypersyncClient`]), the default
//! - `eth_getLogs` over an Alloy provider ([`provider::RpcLogSource`]) for
//!   chains configured with an RPC URL
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use transferscan::{lookup::TransferLookup, provider::SourceRegistry, TransferscanConfig};
//!
//! let registry = Arc::new(SourceRegistry::new(TransferscanConfig::from_env()?)?);
//! let lookup = TransferLookup::new(registry);
//!
//! let response = lookup
//!     .respond(Some("base"), Some("0xabc0000000000000000000000000000000000123"), None)
//!     .await?;
//! println!("{}", serde_json::to_string_pretty(&response)?);
//! ```

pub mod address;
pub mod api;
pub mod bootstrap;
pub mod config;
pub mod errors;
pub mod events;
pub mod fetch;
pub mod hypersync;
pub mod lookup;
pub mod presenter;
pub mod provider;
pub mod source;
pub(crate) mod spans;
pub mod transport;
pub mod types;

pub use config::{
    Backend, ChainConfig, MaxBlockRange, TransferscanConfig, TransferscanConfigBuilder,
};
pub use errors::{
    ConfigError, EventDecodeError, FetchError, RpcError, TransferscanError, ValidationError,
};
pub use events::{ContractScope, LogQuery, Transfer, TransferFilterBuilder};
pub use lookup::TransferLookup;
pub use presenter::{ErrorResponse, TransferResponse};
pub use source::{DeliveryOrder, LogSource};
pub use types::{RawLogEntry, TransferOutcome, TransferQuery, TransferRecord};
