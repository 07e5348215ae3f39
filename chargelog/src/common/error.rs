//! エラー型定義
//!
//! 統一エラー型（thiserror使用）
//!
//! すべてのエラーはHTTP境界で捕捉され、`{"error": "<message>"}`形式で
//! 呼び出し元へ返される。内部詳細はサーバーログにのみ記録する。

use axum::http::StatusCode;
use thiserror::Error;

/// サービス統一エラー型
#[derive(Debug, Error)]
pub enum ServiceError {
    /// 必須フィールド欠落（呼び出し元が修正可能）
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    /// フィールド形式不正（ストリクトポリシーのみ、呼び出し元が修正可能）
    #[error("Invalid field '{field}': {reason}")]
    InvalidField {
        /// 対象フィールドのワイヤ名
        field: String,
        /// 拒否理由
        reason: String,
    },

    /// APIキー不一致または欠落
    #[error("Authentication error: {0}")]
    Unauthorized(String),

    /// chargers上流APIの失敗（非2xx、ネットワークエラー、タイムアウト）
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// 設定不備
    #[error("Configuration error: {0}")]
    Config(String),

    /// 予期しない内部エラー（不正なJSONボディ等）
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    /// 外部クライアント向けの安全なエラーメッセージを返す
    ///
    /// 呼び出し元が修正可能なエラー（欠落フィールド、形式不正）のみ詳細を含め、
    /// それ以外は内部実装を漏らさない汎用メッセージを返す。
    /// デバッグには`Display`実装（`to_string()`）をサーバーログでのみ使用する。
    pub fn external_message(&self) -> String {
        match self {
            Self::MissingFields(fields) => {
                format!("Missing required fields: {}", fields.join(", "))
            }
            Self::InvalidField { field, reason } => {
                format!("Invalid field '{}': {}", field, reason)
            }
            Self::Unauthorized(_) => "Invalid API key".to_string(),
            Self::Upstream(_) => "Failed to fetch chargers data".to_string(),
            Self::Config(_) | Self::Internal(_) => "Internal server error".to_string(),
        }
    }

    /// このエラーに対応するHTTPステータスコードを返す
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingFields(_) => StatusCode::BAD_REQUEST,
            Self::InvalidField { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Result型エイリアス
pub type ServiceResult<T> = Result<T, ServiceError>;
