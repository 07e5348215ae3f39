//! Contract Test: OPTIONS /logs とCORSヘッダー
//!
//! 別オリジンのダッシュボードからの呼び出し前提の契約テスト

use crate::support::build_app;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
};
use tower::ServiceExt;

/// OPTIONS /logs - プリフライトは認証なしで204と許可ヘッダーを返す
#[tokio::test]
async fn test_options_preflight_returns_204_with_cors_headers() {
    let app = build_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/logs")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .unwrap(),
        "*"
    );
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-methods")
            .unwrap(),
        "GET, POST, OPTIONS"
    );
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-headers")
            .unwrap(),
        "Content-Type, x-api-key"
    );

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(body.is_empty());
}

/// GET /logs - 成功レスポンスにもCORSヘッダーが付与される
#[tokio::test]
async fn test_cors_headers_present_on_get() {
    let app = build_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/logs")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .unwrap(),
        "*"
    );
}

/// エラーレスポンス（401）にもCORSヘッダーが付与される
///
/// ブラウザがエラー本文を読めるために必要。
#[tokio::test]
async fn test_cors_headers_present_on_error_responses() {
    let app = build_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/logs")
                .header("content-type", "application/json")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .unwrap(),
        "*"
    );
}
