//! Chargelog Server
//!
//! EV充電RWAプロトコルのダッシュボードが参照する取引ログ・充電器情報API

#![warn(missing_docs)]

/// 共通型定義
pub mod common;

/// REST APIハンドラー
pub mod api;

/// 認証・認可機能
pub mod auth;

/// 設定管理（環境変数ヘルパー）
pub mod config;

/// ロギング初期化ユーティリティ
pub mod logging;

/// トランザクションログストア
pub mod store;

/// 受信ペイロードの検証・正規化
pub mod validate;

/// CLIインターフェース
pub mod cli;

/// サーバー起動・シャットダウン
pub mod server;

/// アプリケーション状態
#[derive(Clone)]
pub struct AppState {
    /// トランザクションログストア（エンドポイントのみが書き込む）
    pub store: std::sync::Arc<dyn store::LogStore>,
    /// アプリケーション設定（起動時に一度だけ読み込む）
    pub config: config::AppConfig,
    /// 共有HTTPクライアント（接続プーリング有効）
    pub http_client: reqwest::Client,
}
