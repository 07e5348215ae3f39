//! REST APIハンドラー

/// 充電器メタデータプロキシ
pub mod chargers;

/// エラーレスポンス型
pub mod error;

/// トランザクションログAPI
pub mod logs;

/// システムAPI（ヘルスチェック）
pub mod system;

use crate::{auth, AppState};
use axum::{
    extract::Request,
    http::{header, HeaderValue},
    middleware::{self, Next},
    response::Response,
    routing::get,
    Router,
};
use tower_http::trace::TraceLayer;

/// 全レスポンスへ許可CORSヘッダーを付与するミドルウェア
///
/// ダッシュボードは別オリジンのブラウザクライアントのため、
/// エラーレスポンスを含むすべての応答にヘッダーが必要。
async fn apply_cors_headers(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type, x-api-key"),
    );
    response
}

/// アプリケーションのルーターを構築する
///
/// `route_layer`の認証は`/logs`にのみ掛かる。`/chargers`と`/health`は
/// それより後に登録されるため認証対象外。
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route(
            "/logs",
            get(logs::list_logs)
                .post(logs::append_log)
                .options(logs::logs_preflight),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_api_key,
        ))
        .route("/chargers", get(chargers::get_chargers))
        .route("/health", get(system::health))
        .layer(middleware::from_fn(apply_cors_headers))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
