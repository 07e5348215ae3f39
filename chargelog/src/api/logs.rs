//! トランザクションログAPI
//!
//! `/logs`エンドポイントを提供する。書き込みはAPIキー認証
//! （`auth::require_api_key`）を経由してのみ到達する。

use super::error::AppError;
use crate::common::{error::ServiceError, types::LogEntry};
use crate::AppState;
use axum::{body::Bytes, extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

/// POST /logs
///
/// ボディを型なしJSONとして読み、設定済みポリシーで検証・正規化して
/// ストアへ追加する。成功時は正規化済みレコードをエコーバックする。
/// 不正なJSONボディは検証エラーではなく内部エラー（500）として扱う。
pub async fn append_log(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let payload: Value = serde_json::from_slice(&body)
        .map_err(|err| ServiceError::Internal(format!("Malformed JSON body: {err}")))?;

    let entry = state.config.validation.normalize(&payload)?;
    state.store.append(entry.clone()).await;

    tracing::info!(
        tx_hash = %entry.tx_hash,
        network = %entry.network,
        "Stored transaction log"
    );

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Log received successfully",
            "log": entry
        })),
    ))
}

/// GET /logs
///
/// 保存済みレコード全件を挿入順（古い順）で返す。認証不要。
/// クエリパラメーターは受け付けない。
pub async fn list_logs(State(state): State<AppState>) -> Json<Vec<LogEntry>> {
    Json(state.store.all().await)
}

/// OPTIONS /logs - CORSプリフライト
///
/// 認証より前に素通しされ、空の成功レスポンスを返す。
/// 許可ヘッダーはレスポンス共通のCORSミドルウェアが付与する。
pub async fn logs_preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}
