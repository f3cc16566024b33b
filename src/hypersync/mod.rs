// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Indexed log service backend
//!
//! [`HypersyncClient`] posts [`QueryRequest`]s to `{endpoint}/query` and
//! follows `next_block` pagination until the archive height is passed.

mod client;
pub mod wire;

pub use client::HypersyncClient;
pub use wire::{QueryRequest, QueryResponse};
