//! 契約テスト用ヘルパー

use axum::Router;
use chargelog::config::AppConfig;
use chargelog::store::MemoryLogStore;
use chargelog::validate::ValidationPolicy;
use chargelog::{api, AppState};
use std::sync::Arc;

/// テストで使用する書き込みシークレット
pub const TEST_API_KEY: &str = "test-secret-key";

/// デフォルト（ルーズポリシー）のテスト設定
pub fn test_config() -> AppConfig {
    AppConfig {
        api_key: Some(TEST_API_KEY.to_string()),
        chargers_api_url: None,
        validation: ValidationPolicy::Loose,
        log_capacity: 0,
    }
}

/// デフォルト設定でアプリケーションを構築する
pub fn build_app() -> Router {
    build_app_with(test_config())
}

/// 指定した設定でアプリケーションを構築する
///
/// ストアは常に空のインメモリ実装を注入する。
pub fn build_app_with(config: AppConfig) -> Router {
    let state = AppState {
        store: Arc::new(MemoryLogStore::new()),
        config,
        http_client: reqwest::Client::new(),
    };
    api::create_app(state)
}
