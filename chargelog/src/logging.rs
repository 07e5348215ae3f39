//! ロギング初期化ユーティリティ

use tracing_subscriber::EnvFilter;

/// tracingサブスクライバを初期化する
///
/// フィルタは`RUST_LOG`、未設定なら`CHARGELOG_LOG_LEVEL`、
/// どちらもなければ`info`を使用する。
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = std::env::var("RUST_LOG")
        .ok()
        .or_else(|| std::env::var("CHARGELOG_LOG_LEVEL").ok())
        .unwrap_or_else(|| "info".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .try_init()?;

    Ok(())
}
