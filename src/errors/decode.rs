// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error type for decoding a single Transfer log.

/// Why a raw log could not be decoded as an ERC-20 `Transfer`.
///
/// Decode failures never fail a lookup. They are logged as warnings and the
/// affected record carries null fields.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EventDecodeError {
    /// The topic list cannot hold a `Transfer` (over four topics).
    #[error("Malformed topics: {details}")]
    MalformedTopics {
        /// Details about the topic list
        details: String,
    },

    /// The ABI decoder rejected the topics or data payload.
    #[error("Failed to decode event: {details}")]
    DecodeFailed {
        /// Details about why the decode failed
        details: String,
    },
}

impl EventDecodeError {
    /// Create a `DecodeFailed` error with details.
    pub fn decode_failed(details: impl Into<String>) -> Self {
        EventDecodeError::DecodeFailed {
            details: details.into(),
        }
    }

    /// Create a `MalformedTopics` error with details.
    pub fn malformed_topics(details: impl Into<String>) -> Self {
        EventDecodeError::MalformedTopics {
            details: details.into(),
        }
    }
}
