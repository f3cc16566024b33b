// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for remote log retrieval.

use super::RpcError;

/// Errors that can occur while fetching logs from a remote log service.
///
/// Every failure of the fetch stage collapses into this type. Callers should
/// log the detail and report a generic failure; nothing here is retried.
///
/// # Examples
///
/// ```rust,ignore
/// use transferscan::FetchError;
///
/// match fetcher.fetch(chain, &query).await {
///     Ok(logs) if logs.is_empty() => println!("nothing found"),
///     Ok(logs) => println!("{} logs", logs.len()),
///     Err(FetchError::Status { status, .. }) if status == 401 => eprintln!("bad token"),
///     Err(e) => eprintln!("fetch failed: {e}"),
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The HTTP request could not be sent or its body could not be read.
    #[error("Request to {endpoint} failed")]
    Transport {
        /// Endpoint the request was sent to
        endpoint: String,
        /// The underlying client error
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-success HTTP status.
    #[error("{endpoint} responded with HTTP {status}: {body}")]
    Status {
        /// Endpoint the request was sent to
        endpoint: String,
        /// HTTP status code
        status: u16,
        /// Response body, truncated
        body: String,
    },

    /// The service answered with a payload that does not match the query contract.
    #[error("Invalid response from {endpoint}: {details}")]
    InvalidResponse {
        /// Endpoint the request was sent to
        endpoint: String,
        /// What was wrong with the payload
        details: String,
    },

    /// The endpoint for a chain could not be built.
    #[error("Invalid endpoint {url:?}: {details}")]
    InvalidEndpoint {
        /// The offending URL
        url: String,
        /// Why it was rejected
        details: String,
    },

    /// A JSON-RPC backed source failed.
    #[error("RPC error: {0}")]
    Rpc(#[from] RpcError),

    /// The caller's cancellation signal fired before the fetch completed.
    #[error("Fetch cancelled before completion")]
    Cancelled,
}

/// Longest response body kept in [`FetchError::Status`].
const MAX_BODY_LEN: usize = 512;

impl FetchError {
    /// Create a `Transport` error.
    pub fn transport(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        FetchError::Transport {
            endpoint: endpoint.into(),
            source,
        }
    }

    /// Create a `Status` error, truncating long bodies.
    pub fn status(endpoint: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        let mut body = body.into();
        if body.len() > MAX_BODY_LEN {
            let mut cut = MAX_BODY_LEN;
            while !body.is_char_boundary(cut) {
                cut -= 1;
            }
            body.truncate(cut);
        }
        FetchError::Status {
            endpoint: endpoint.into(),
            status,
            body,
        }
    }

    /// Create an `InvalidResponse` error.
    pub fn invalid_response(endpoint: impl Into<String>, details: impl Into<String>) -> Self {
        FetchError::InvalidResponse {
            endpoint: endpoint.into(),
            details: details.into(),
        }
    }

    /// Create an `InvalidEndpoint` error.
    pub fn invalid_endpoint(url: impl Into<String>, details: impl Into<String>) -> Self {
        FetchError::InvalidEndpoint {
            url: url.into(),
            details: details.into(),
        }
    }
}
