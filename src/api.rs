// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP surface
//!
//! | Route | Response |
//! |---|---|
//! | `GET /token-transfers/{chain_id}/{address}` | transfers of `address` |
//! | `GET /token-transfers/{chain_id}/{address}/{token}` | same, for one token contract |
//! | `GET /token-transfers`, `GET /token-transfers/{chain_id}` | 400, missing parameters |
//! | `GET /health` | `{"status":"ok"}` |

use std::time::Duration;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::errors::{FetchError, TransferscanError, ValidationError};
use crate::lookup::TransferLookup;
use crate::presenter::{ErrorResponse, TransferResponse};

/// Shared handler state
#[derive(Debug, Clone)]
pub struct AppState {
    pub lookup: TransferLookup,
    /// Budget of one lookup; exceeding it answers 504
    pub request_timeout: Duration,
}

impl AppState {
    pub fn new(lookup: TransferLookup, request_timeout: Duration) -> Self {
        Self {
            lookup,
            request_timeout,
        }
    }
}

/// Path parameters of the transfer routes
#[derive(Debug, Default, Deserialize)]
struct TransferPath {
    chain_id: Option<String>,
    address: Option<String>,
    token: Option<String>,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

/// A lookup failure rendered as an HTTP response.
#[derive(Debug)]
pub struct ApiError(pub TransferscanError);

impl<E: Into<TransferscanError>> From<E> for ApiError {
    fn from(error: E) -> Self {
        ApiError(error.into())
    }
}

impl ApiError {
    /// HTTP status for the wrapped error.
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            TransferscanError::Validation(_) => StatusCode::BAD_REQUEST,
            TransferscanError::Fetch(FetchError::Cancelled) => StatusCode::GATEWAY_TIMEOUT,
            TransferscanError::Fetch(_) | TransferscanError::Config(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match status {
            StatusCode::BAD_REQUEST => warn!(error = %self.0, "Rejected transfer lookup"),
            _ => error!(error = ?self.0, "Transfer lookup failed"),
        }
        (status, Json(ErrorResponse::from_error(&self.0))).into_response()
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/token-transfers", get(missing_parameters))
        .route("/token-transfers/{chain_id}", get(missing_parameters))
        .route("/token-transfers/{chain_id}/{address}", get(token_transfers))
        .route(
            "/token-transfers/{chain_id}/{address}/{token}",
            get(token_transfers),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Starts the API server.
pub async fn serve_api(listener: TcpListener, state: AppState) -> anyhow::Result<()> {
    let app = router(state);

    let addr = listener.local_addr()?;

    info!(address = ?addr, "Starting server");

    axum::serve(listener, app).await?;

    Ok(())
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

async fn missing_parameters() -> ApiError {
    ApiError::from(ValidationError::MissingParameters)
}

async fn token_transfers(
    State(state): State<AppState>,
    Path(path): Path<TransferPath>,
) -> Result<Json<TransferResponse>, ApiError> {
    info!(
        chain_id = ?path.chain_id,
        address = ?path.address,
        token = ?path.token,
        "Received transfer lookup"
    );

    let response = state
        .lookup
        .respond_until(
            path.chain_id.as_deref(),
            path.address.as_deref(),
            path.token.as_deref(),
            tokio::time::sleep(state.request_timeout),
        )
        .await?;

    Ok(Json(response))
}
