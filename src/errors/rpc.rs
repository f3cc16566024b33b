//! Errors raised by `eth_getLogs` backed log sources.
//!
//! Chains configured with an RPC URL bypass the indexed log service; these
//! are the ways such a chain's provider can fail.

/// JSON-RPC provider failures.
///
/// # Examples
///
/// ```rust
/// use transferscan::RpcError;
///
/// let error = RpcError::ProviderUrlInvalid("relative URL without a base".to_string());
/// assert_eq!(
///     error.to_string(),
///     "Invalid provider URL: relative URL without a base"
/// );
/// ```
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    /// An `eth_getLogs` call was rejected or never answered.
    ///
    /// Providers commonly refuse ranges above their own block limit; lower
    /// the chain's `max_block_range` when this recurs.
    #[error("eth_getLogs failed for {operation}")]
    GetLogsFailed {
        /// Which filter and block range was being fetched
        operation: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The chain head could not be read, so no scan range exists.
    #[error("eth_blockNumber failed")]
    GetBlockNumberFailed {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The configured RPC URL could not be parsed.
    #[error("Invalid provider URL: {0}")]
    ProviderUrlInvalid(String),
}

impl RpcError {
    /// Wrap a failed `eth_getLogs` call described by `operation`.
    pub fn get_logs_failed(
        operation: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::GetLogsFailed {
            operation: operation.into(),
            source: Box::new(source),
        }
    }

    /// Wrap a failed `eth_blockNumber` call.
    pub fn get_block_number_failed(
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::GetBlockNumberFailed {
            source: Box::new(source),
        }
    }
}
