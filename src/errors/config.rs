// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

/// Errors raised while loading configuration from the environment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set but its value could not be used.
    #[error("Invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        /// Name of the environment variable
        key: String,
        /// The offending value
        value: String,
        /// Why it was rejected
        reason: String,
    },
}

impl ConfigError {
    /// Helper to create an `InvalidValue` error.
    pub fn invalid_value(
        key: impl Into<String>,
        value: impl Into<String>,
        reason: impl ToString,
    ) -> Self {
        ConfigError::InvalidValue {
            key: key.into(),
            value: value.into(),
            reason: reason.to_string(),
        }
    }
}
