//! 認証・認可機能

use crate::api::error::AppError;
use crate::common::error::ServiceError;
use crate::AppState;
use axum::{
    extract::{Request, State},
    http::Method,
    middleware::Next,
    response::{IntoResponse, Response},
};

/// APIキー認証ミドルウェア
///
/// `x-api-key`ヘッダーをサーバー側シークレットと完全一致で比較する。
/// 書き込み（POST）のみ認証対象で、読み取り（GET）とCORSプリフライト
/// （OPTIONS）は認証より前に素通しする。
///
/// # Returns
/// * `Ok(Response)` - 認証成功、または認証対象外のメソッド
/// * `Err(Response)` - 認証失敗、401 Unauthorized
pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, Response> {
    if request.method() != Method::POST {
        return Ok(next.run(request).await);
    }

    let provided = request
        .headers()
        .get("x-api-key")
        .and_then(|header| header.to_str().ok());

    match (state.config.api_key.as_deref(), provided) {
        (Some(expected), Some(key)) if key == expected => Ok(next.run(request).await),
        (expected, _) => {
            if expected.is_none() {
                tracing::warn!("Rejected log write: no API key is configured");
            } else {
                tracing::warn!("Rejected log write: missing or invalid API key");
            }
            Err(
                AppError(ServiceError::Unauthorized("API key mismatch".to_string()))
                    .into_response(),
            )
        }
    }
}
