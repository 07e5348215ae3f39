//! 取引ログの型定義
//!
//! ダッシュボードと交換するJSONはcamelCaseキー（`txHash`等）を使用する。

use serde::{Deserialize, Serialize};

/// `network`フィールド省略時のデフォルト値
pub const DEFAULT_NETWORK: &str = "mantle-testnet";

/// 取引ステータス
///
/// ルーズポリシーではステータス文字列は検証されずそのまま保存されるため、
/// `LogEntry`側は文字列で保持し、この列挙はデフォルト値と
/// ストリクトポリシーの検証にのみ使用する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogStatus {
    /// 受領済み・未確定
    Pending,
    /// 確定
    Completed,
    /// 失敗
    Failed,
}

impl LogStatus {
    /// ワイヤ表現を返す
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }

    /// ワイヤ表現からパースする
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "completed" => Some(Self::Completed),
            "failed" => Some(Self::Failed),
            _ => None,
        }
    }
}

/// 取引ログレコード
///
/// 保存後は不変。更新・削除操作は存在しない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    /// 送信元ウォレットアドレス
    pub sender: String,
    /// 金額（浮動小数の精度損失を避けるため文字列で保持）
    pub amount: String,
    /// トランザクションハッシュ
    pub tx_hash: String,
    /// ISO-8601形式の日時
    pub timestamp: String,
    /// ステータス（省略時は`pending`）
    pub status: String,
    /// ネットワーク名（省略時は`mantle-testnet`）
    pub network: String,
}
