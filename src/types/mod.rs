// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Domain types shared across the lookup pipeline.
//!
//! - [`TransferQuery`]: a validated request
//! - [`RawLogEntry`]: a log as delivered by a log source
//! - [`TransferRecord`] and [`TransferOutcome`]: the assembled result

pub mod log;
pub mod query;
pub mod transfer;

pub use log::RawLogEntry;
pub use query::{parse_chain, TransferQuery};
pub use transfer::{TransferOutcome, TransferRecord};
