// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Errors raised while validating lookup parameters.

/// Errors that can occur while turning request parameters into a
/// [`TransferQuery`](crate::TransferQuery).
///
/// No remote call is made when validation fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The account address or chain identifier was absent or empty.
    #[error("Address and chainId parameters are required")]
    MissingParameters,

    /// An address parameter is not `0x` followed by 40 hex characters.
    #[error("Invalid {field} {value:?}: {reason}")]
    InvalidAddress {
        /// Which parameter was malformed (`address` or `token`)
        field: &'static str,
        /// The value as received
        value: String,
        /// Why it was rejected
        reason: String,
    },

    /// The chain identifier is neither a numeric chain id nor a known chain name.
    #[error("Invalid chainId {value:?}")]
    InvalidChain {
        /// The value as received
        value: String,
    },
}

impl ValidationError {
    /// Create an `InvalidAddress` error.
    pub fn invalid_address(
        field: &'static str,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ValidationError::InvalidAddress {
            field,
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an `InvalidChain` error.
    pub fn invalid_chain(value: impl Into<String>) -> Self {
        ValidationError::InvalidChain {
            value: value.into(),
        }
    }
}
