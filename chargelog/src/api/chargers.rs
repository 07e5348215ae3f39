//! 充電器メタデータプロキシAPI
//!
//! 外部chargers APIへの単発パススルー。変換ロジックは持たない。

use super::error::AppError;
use crate::common::error::ServiceError;
use crate::AppState;
use axum::{extract::State, Json};
use serde_json::Value;
use std::time::Duration;

const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

/// GET /chargers
///
/// 設定済みの上流URLへGETを発行し、JSONボディをそのまま返す。
/// 非2xx、ネットワークエラー、タイムアウト、設定欠落はいずれも
/// 汎用メッセージの500として報告し、原因はサーバーログにのみ残す。
pub async fn get_chargers(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let url = state
        .config
        .chargers_api_url
        .clone()
        .ok_or_else(|| ServiceError::Config("CHARGELOG_CHARGERS_API_URL is not set".to_string()))?;

    let response = state
        .http_client
        .get(&url)
        .timeout(UPSTREAM_TIMEOUT)
        .send()
        .await
        .map_err(|err| ServiceError::Upstream(err.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(ServiceError::Upstream(format!("Chargers API returned {status}")).into());
    }

    let data: Value = response
        .json()
        .await
        .map_err(|err| ServiceError::Upstream(err.to_string()))?;

    Ok(Json(data))
}
