//! Chargelog Server Entry Point

use chargelog::cli::Cli;
use chargelog::config::{get_env_with_fallback_or, get_env_with_fallback_parse, AppConfig};
use chargelog::store::{LogStore, MemoryLogStore};
use chargelog::{logging, server, AppState};
use clap::Parser;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
struct ServerConfig {
    host: String,
    port: u16,
}

impl ServerConfig {
    fn from_env() -> Self {
        let host = get_env_with_fallback_or("CHARGELOG_HOST", "HOST", "0.0.0.0");
        let port = get_env_with_fallback_parse("CHARGELOG_PORT", "PORT", 3001);
        Self { host, port }
    }

    fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[tokio::main]
async fn main() {
    // Parse CLI (only -h/--help and -V/--version)
    let _cli = Cli::parse();

    logging::init().expect("failed to initialize logging");

    info!("Chargelog v{}", env!("CARGO_PKG_VERSION"));

    let server_config = ServerConfig::from_env();
    let config = AppConfig::from_env();
    config.log_startup_diagnostics();

    let store: Arc<dyn LogStore> = Arc::new(MemoryLogStore::with_capacity(config.log_capacity));

    // HTTPクライアント（接続プーリング有効）を作成
    let http_client = reqwest::Client::builder()
        .pool_max_idle_per_host(32)
        .pool_idle_timeout(std::time::Duration::from_secs(60))
        .tcp_keepalive(std::time::Duration::from_secs(30))
        .build()
        .expect("Failed to create HTTP client");

    let state = AppState {
        store,
        config,
        http_client,
    };

    server::run(state, &server_config.bind_addr()).await;
}
