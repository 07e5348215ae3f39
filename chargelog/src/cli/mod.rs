//! CLI module for chargelog
//!
//! Provides command-line interface for the log service.
//! All operations are performed via the HTTP API.

use clap::Parser;

/// Chargelog - Transaction log and charger metadata API for the EV-charging dashboard
#[derive(Parser, Debug)]
#[command(name = "chargelog")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    CHARGELOG_HOST               Bind address (default: 0.0.0.0)
    CHARGELOG_PORT               Listen port (default: 3001)
    CHARGELOG_API_KEY            Shared secret for POST /logs (writes are 401 without it)
    CHARGELOG_CHARGERS_API_URL   Upstream chargers API URL
    CHARGELOG_VALIDATION         Log validation policy: loose | strict (default: loose)
    CHARGELOG_LOG_CAPACITY       Retained log entries, 0 = unbounded (default: 10000)
    CHARGELOG_LOG_LEVEL          Log level (default: info)
"#)]
pub struct Cli;
