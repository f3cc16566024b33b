// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Event processing for ERC-20 transfers.
//!
//! This module handles:
//! - The Transfer event definition
//! - Semantic filter builders for the bidirectional account query
//! - Decoding raw logs into Transfer fields
//! - Assembling decoded logs into transfer records

pub mod assemble;
pub mod decode;
pub mod definitions;
pub mod filter;

pub use assemble::{assemble, assemble_aligned};
pub use decode::{decode_paired, decode_transfer, DecodedLog, TransferEvent};
pub use definitions::Transfer;
pub use filter::{
    ContractScope, LogField, LogFilter, LogQuery, TransferFilterBuilder, TRANSFER_FIELDS,
};
