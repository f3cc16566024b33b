// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Log source construction and sharing
//!
//! This module provides:
//! - [`SourceRegistry`] - process-wide, lazily populated map from chain id to
//!   the [`LogSource`](crate::source::LogSource) serving it
//! - [`RpcLogSource`] - `eth_getLogs` backend for chains configured with an
//!   RPC URL
//! - [`create_http_provider`] - type-erased HTTP provider with request logging
//!
//! # AnyNetwork
//!
//! Providers use `AnyNetwork` so a chain chosen at runtime needs no
//! compile-time network type. Only `eth_blockNumber` and `eth_getLogs` are
//! called, and both are network-agnostic.

mod factory;
mod registry;
mod rpc_source;

pub use factory::create_http_provider;
pub use registry::{SharedSource, SourceRegistry};
pub use rpc_source::RpcLogSource;

use alloy_network::AnyNetwork;

/// Type alias for an HTTP provider using AnyNetwork
pub type AnyHttpProvider = alloy_provider::RootProvider<AnyNetwork>;
