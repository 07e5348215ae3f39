//! Contract Test: ストリクト検証ポリシー
//!
//! `CHARGELOG_VALIDATION=strict`相当の設定でのHTTP境界の挙動

use crate::support::{build_app, build_app_with, test_config, TEST_API_KEY};
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use chargelog::validate::ValidationPolicy;
use serde_json::{json, Value};
use tower::ServiceExt;

fn strict_app() -> Router {
    let mut config = test_config();
    config.validation = ValidationPolicy::Strict;
    build_app_with(config)
}

async fn post_log(app: &Router, payload: &Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/logs")
                .header("x-api-key", TEST_API_KEY)
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(payload).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

async fn stored_count(app: &Router) -> usize {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/logs")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice::<Vec<Value>>(&body).unwrap().len()
}

/// 整形済みペイロードはストリクトでも受理される
#[tokio::test]
async fn test_strict_accepts_well_formed_payload() {
    let app = strict_app();

    let payload = json!({
        "sender": "0xAbC123",
        "amount": "12.75",
        "txHash": "0x9f86d081884c7d65",
        "timestamp": "2024-02-20T15:30:00+09:00",
        "status": "completed"
    });

    let (status, body) = post_log(&app, &payload).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["log"]["status"], "completed");
}

/// 0xプレフィックスのないsenderは400
#[tokio::test]
async fn test_strict_rejects_unprefixed_sender() {
    let app = strict_app();

    let payload = json!({
        "sender": "abc123",
        "amount": "0.5",
        "txHash": "0x123",
        "timestamp": "2024-02-20T15:30:00Z"
    });

    let (status, body) = post_log(&app, &payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Invalid field 'sender': must be 0x-prefixed hexadecimal"
    );
    assert_eq!(stored_count(&app).await, 0);
}

/// RFC 3339としてパースできないtimestampは400
#[tokio::test]
async fn test_strict_rejects_unparseable_timestamp() {
    let app = strict_app();

    let payload = json!({
        "sender": "0xabc",
        "amount": "0.5",
        "txHash": "0x123",
        "timestamp": "2024-02-20 15:30"
    });

    let (status, body) = post_log(&app, &payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Invalid field 'timestamp': must be an RFC 3339 datetime"
    );
}

/// 数値として不正なamountは400
#[tokio::test]
async fn test_strict_rejects_non_numeric_amount() {
    let app = strict_app();

    let payload = json!({
        "sender": "0xabc",
        "amount": "half an ether",
        "txHash": "0x123",
        "timestamp": "2024-02-20T15:30:00Z"
    });

    let (status, _body) = post_log(&app, &payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(stored_count(&app).await, 0);
}

/// 列挙外のstatusはストリクトでは400
#[tokio::test]
async fn test_strict_rejects_out_of_enum_status() {
    let app = strict_app();

    let payload = json!({
        "sender": "0xabc",
        "amount": "0.5",
        "txHash": "0x123",
        "timestamp": "2024-02-20T15:30:00Z",
        "status": "settled"
    });

    let (status, body) = post_log(&app, &payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Invalid field 'status': must be one of pending, completed, failed"
    );
    assert_eq!(stored_count(&app).await, 0);
}

/// 対照: ルーズ（デフォルト）は列挙外のstatusをそのまま保存する
#[tokio::test]
async fn test_loose_stores_out_of_enum_status_verbatim() {
    let app = build_app();

    let payload = json!({
        "sender": "0xabc",
        "amount": "0.5",
        "txHash": "0x123",
        "timestamp": "2024-02-20T15:30:00Z",
        "status": "settled"
    });

    let (status, body) = post_log(&app, &payload).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["log"]["status"], "settled");
    assert_eq!(stored_count(&app).await, 1);
}
