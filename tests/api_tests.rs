// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP router tests

mod helpers;

use std::sync::Arc;
use std::time::Duration;

use alloy_chains::Chain;
use alloy_primitives::{address, Address};
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use helpers::{lookup_with, transfer_log, MockLogSource};
use serde_json::{json, Value};
use tower::util::ServiceExt;
use transferscan::api::{router, AppState};

const ACCOUNT: Address = address!("abc0000000000000000000000000000000000123");
const PEER: Address = address!("1111111111111111111111111111111111111111");
const TOKEN: Address = address!("833589fcd6edb6e08f4c7c32d4f71b54bda02913");

fn app(source: Arc<MockLogSource>) -> Router {
    app_with_timeout(source, Duration::from_secs(5))
}

fn app_with_timeout(source: Arc<MockLogSource>, timeout: Duration) -> Router {
    router(AppState::new(lookup_with(Chain::from_id(8453), source), timeout))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get(app(MockLogSource::with_logs(vec![])), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_missing_parameters_answer_400() {
    for uri in ["/token-transfers", "/token-transfers/8453"] {
        let (status, body) = get(app(MockLogSource::with_logs(vec![])), uri).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(
            body,
            json!({ "error": "Address and chainId parameters are required" })
        );
    }
}

#[tokio::test]
async fn test_malformed_address_answers_400() {
    let mock = MockLogSource::with_logs(vec![]);
    let (status, body) = get(app(mock.clone()), "/token-transfers/8453/0xnothex").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("address"));
    assert!(mock.queries().is_empty());
}

#[tokio::test]
async fn test_unknown_chain_answers_400() {
    let (status, _) = get(
        app(MockLogSource::with_logs(vec![])),
        "/token-transfers/notachain/0xabc0000000000000000000000000000000000123",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_no_transfers_answers_message() {
    let (status, body) = get(
        app(MockLogSource::with_logs(vec![])),
        "/token-transfers/8453/0xabc0000000000000000000000000000000000123",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "message": "No token transfers found for this address." })
    );
}

#[tokio::test]
async fn test_transfers_answer_records() {
    let mock = MockLogSource::with_logs(vec![transfer_log(TOKEN, PEER, ACCOUNT, 42, 100, 7)]);

    let (status, body) = get(
        app(mock),
        "/token-transfers/8453/0xABC0000000000000000000000000000000000123/0x833589fcd6edb6e08f4c7c32d4f71b54bda02913",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "address": "0xabc0000000000000000000000000000000000123",
            "transfers": [{
                "token": "0x833589fcd6edb6e08f4c7c32d4f71b54bda02913",
                "transactionHash": "0x0707070707070707070707070707070707070707070707070707070707070707",
                "from": "0x1111111111111111111111111111111111111111",
                "to": "0xabc0000000000000000000000000000000000123",
                "value": "42"
            }]
        })
    );
}

#[tokio::test]
async fn test_fetch_failure_answers_generic_500() {
    let (status, body) = get(
        app(MockLogSource::failing(502)),
        "/token-transfers/8453/0xabc0000000000000000000000000000000000123",
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to fetch token transfers" }));
}

#[tokio::test]
async fn test_timeout_answers_504() {
    let (status, body) = get(
        app_with_timeout(MockLogSource::hanging(), Duration::from_millis(20)),
        "/token-transfers/8453/0xabc0000000000000000000000000000000000123",
    )
    .await;

    assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
    assert!(body["error"].is_string());
}
