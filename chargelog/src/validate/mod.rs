//! 受信ペイロードの検証・正規化
//!
//! 受信レコードは型なしのJSONオブジェクトとして受け取り、
//! 選択されたポリシーで検証した上で`LogEntry`へ正規化する。

use crate::common::error::{ServiceError, ServiceResult};
use crate::common::types::{LogEntry, LogStatus, DEFAULT_NETWORK};
use serde_json::Value;

/// 必須フィールド（ワイヤ名）
const REQUIRED_FIELDS: [&str; 4] = ["sender", "amount", "txHash", "timestamp"];

/// 検証ポリシー
///
/// - `Loose`: 必須フィールドの存在・非空のみ確認し、`status`と`network`を
///   デフォルト補完する。ダッシュボードの既存契約と同一で、範囲外の
///   `status`値もそのまま保存される。
/// - `Strict`: 加えてアドレス/ハッシュの`0x`プレフィックス、RFC 3339日時、
///   数値として妥当な`amount`、列挙内の`status`を要求する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationPolicy {
    /// 存在チェックのみ（デフォルト）
    #[default]
    Loose,
    /// 形式検証あり
    Strict,
}

impl ValidationPolicy {
    /// 設定文字列からパースする
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "loose" => Some(Self::Loose),
            "strict" => Some(Self::Strict),
            _ => None,
        }
    }

    /// 受信ペイロードを検証し、正規化済みの`LogEntry`を返す
    ///
    /// 必須フィールドの欠落は`MissingFields`として全件まとめて報告する。
    /// 部分受理はない。ストアは変更されない。
    pub fn normalize(&self, payload: &Value) -> ServiceResult<LogEntry> {
        let values = REQUIRED_FIELDS.map(|field| non_empty_string(payload, field));

        let missing: Vec<String> = REQUIRED_FIELDS
            .iter()
            .zip(values.iter())
            .filter(|(_, value)| value.is_none())
            .map(|(field, _)| field.to_string())
            .collect();

        if !missing.is_empty() {
            return Err(ServiceError::MissingFields(missing));
        }

        let [Some(sender), Some(amount), Some(tx_hash), Some(timestamp)] = values else {
            return Err(ServiceError::MissingFields(
                REQUIRED_FIELDS.iter().map(|field| field.to_string()).collect(),
            ));
        };

        let entry = LogEntry {
            sender: sender.to_string(),
            amount: amount.to_string(),
            tx_hash: tx_hash.to_string(),
            timestamp: timestamp.to_string(),
            status: non_empty_string(payload, "status")
                .unwrap_or(LogStatus::Pending.as_str())
                .to_string(),
            network: non_empty_string(payload, "network")
                .unwrap_or(DEFAULT_NETWORK)
                .to_string(),
        };

        if *self == Self::Strict {
            check_strict(&entry)?;
        }

        Ok(entry)
    }
}

/// 存在し、文字列で、かつ非空の場合のみ値を返す
fn non_empty_string<'a>(payload: &'a Value, field: &str) -> Option<&'a str> {
    payload
        .get(field)
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
}

fn check_strict(entry: &LogEntry) -> ServiceResult<()> {
    check_hex_identifier("sender", &entry.sender)?;
    check_hex_identifier("txHash", &entry.tx_hash)?;

    if chrono::DateTime::parse_from_rfc3339(&entry.timestamp).is_err() {
        return Err(ServiceError::InvalidField {
            field: "timestamp".to_string(),
            reason: "must be an RFC 3339 datetime".to_string(),
        });
    }

    match entry.amount.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => {}
        _ => {
            return Err(ServiceError::InvalidField {
                field: "amount".to_string(),
                reason: "must be a non-negative decimal number".to_string(),
            });
        }
    }

    if LogStatus::parse(&entry.status).is_none() {
        return Err(ServiceError::InvalidField {
            field: "status".to_string(),
            reason: "must be one of pending, completed, failed".to_string(),
        });
    }

    Ok(())
}

fn check_hex_identifier(field: &str, value: &str) -> ServiceResult<()> {
    let digits = value.strip_prefix("0x").unwrap_or("");
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ServiceError::InvalidField {
            field: field.to_string(),
            reason: "must be 0x-prefixed hexadecimal".to_string(),
        });
    }
    Ok(())
}
