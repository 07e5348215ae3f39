//! Configuration management via environment variables
//!
//! Provides helper functions for reading environment variables with fallback
//! to deprecated variable names with warning logs, plus the application
//! configuration struct loaded once at process start.

use crate::validate::ValidationPolicy;

/// Get an environment variable with fallback to a deprecated name
///
/// If the new variable name is set, returns its value.
/// If only the old (deprecated) variable name is set, returns its value
/// and logs a deprecation warning.
///
/// # Arguments
/// * `new_name` - The new environment variable name (preferred)
/// * `old_name` - The deprecated environment variable name (fallback)
///
/// # Returns
/// * `Some(value)` - The environment variable value
/// * `None` - Neither variable is set
pub fn get_env_with_fallback(new_name: &str, old_name: &str) -> Option<String> {
    if let Ok(val) = std::env::var(new_name) {
        return Some(val);
    }
    if let Ok(val) = std::env::var(old_name) {
        tracing::warn!(
            "Environment variable '{}' is deprecated, use '{}' instead",
            old_name,
            new_name
        );
        return Some(val);
    }
    None
}

/// Get an environment variable with fallback and default value
///
/// Similar to `get_env_with_fallback`, but returns a default value
/// if neither variable is set.
pub fn get_env_with_fallback_or(new_name: &str, old_name: &str, default: &str) -> String {
    get_env_with_fallback(new_name, old_name).unwrap_or_else(|| default.to_string())
}

/// Get an environment variable with fallback, parsing to a specific type
///
/// Returns the default value if neither variable is set or parsing fails.
pub fn get_env_with_fallback_parse<T: std::str::FromStr>(
    new_name: &str,
    old_name: &str,
    default: T,
) -> T {
    get_env_with_fallback(new_name, old_name)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// デフォルトのログ保持上限（0は無制限）
pub const DEFAULT_LOG_CAPACITY: usize = 10_000;

/// アプリケーション設定
///
/// プロセス起動時に一度だけ環境から読み込み、必要とするコンポーネントへ
/// 明示的に渡す。リクエスト毎に環境を再読み込みしない。
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// ログ書き込み用の共有シークレット（`x-api-key`と完全一致比較）
    pub api_key: Option<String>,
    /// chargers上流APIのURL
    pub chargers_api_url: Option<String>,
    /// 受信ペイロードの検証ポリシー
    pub validation: ValidationPolicy,
    /// ログ保持上限（0は無制限）
    pub log_capacity: usize,
}

impl AppConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Self {
        let validation = std::env::var("CHARGELOG_VALIDATION")
            .ok()
            .map(|value| match ValidationPolicy::parse(&value) {
                Some(policy) => policy,
                None => {
                    tracing::warn!(
                        "Unknown validation policy '{}', falling back to 'loose'",
                        value
                    );
                    ValidationPolicy::Loose
                }
            })
            .unwrap_or_default();

        let log_capacity = std::env::var("CHARGELOG_LOG_CAPACITY")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_LOG_CAPACITY);

        Self {
            api_key: get_env_with_fallback("CHARGELOG_API_KEY", "API_SECRET_KEY"),
            chargers_api_url: get_env_with_fallback(
                "CHARGELOG_CHARGERS_API_URL",
                "CHARGERS_API_URL",
            ),
            validation,
            log_capacity,
        }
    }

    /// 起動時診断
    ///
    /// 欠落した設定は警告するのみで起動は継続する。シークレット未設定なら
    /// すべての書き込みが401、上流URL未設定ならすべてのプロキシ呼び出しが
    /// 500になる。
    pub fn log_startup_diagnostics(&self) {
        if self.api_key.is_none() {
            tracing::warn!(
                "CHARGELOG_API_KEY is not set; every POST /logs request will be rejected with 401"
            );
        }
        if self.chargers_api_url.is_none() {
            tracing::warn!(
                "CHARGELOG_CHARGERS_API_URL is not set; every GET /chargers request will fail with 500"
            );
        }
        tracing::info!(
            policy = ?self.validation,
            log_capacity = self.log_capacity,
            "Log validation configured"
        );
    }
}
