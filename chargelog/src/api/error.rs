//! APIエラーレスポンス型
//!
//! axum用の共通エラーハンドリング

use crate::common::error::ServiceError;
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// Axum用のエラーレスポンス型
#[derive(Debug)]
pub struct AppError(pub ServiceError);

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        AppError(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        // external_message()は内部詳細（上流URL、パースエラー位置等）を
        // 含まない。完全なエラー内容はここでサーバーログにのみ残す。
        let status = self.0.status_code();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self.0, "Request failed");
        } else {
            tracing::debug!(error = %self.0, "Request rejected");
        }

        let payload = json!({
            "error": self.0.external_message()
        });

        (status, Json(payload)).into_response()
    }
}
