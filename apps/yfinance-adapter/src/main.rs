//! YFinance Adapter Binary
//!
//! Builds the Yahoo Finance market data client, applies the configured
//! proxy through the adapter, and reports the resulting client settings.
//!
//! # Usage
//!
//! ```bash
//! PROXY_URL=http://proxy.example.com:8080 cargo run --bin yfinance-adapter
//! ```
//!
//! # Environment Variables
//!
//! ## Optional
//! - `PROXY_URL`: Proxy for all market data requests (unset or empty: direct)
//! - `YFINANCE_TIMEOUT_SECS`: HTTP request timeout in seconds (default: 30)
//! - `YFINANCE_USER_AGENT`: HTTP user agent (default: yfinance-adapter/<version>)
//! - `OTEL_ENABLED`: Enable OpenTelemetry export (default: false)
//! - `OTEL_EXPORTER_OTLP_ENDPOINT`: OTLP endpoint (default: <http://localhost:4318>)
//! - `OTEL_SERVICE_NAME`: Service name (default: yfinance-adapter)
//! - `RUST_LOG`: Log level (default: info)

use anyhow::Context;
use yfinance_adapter::infrastructure::telemetry;
use yfinance_adapter::{AdapterConfig, connect, redact};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv();

    // Initialize telemetry (tracing + optional OpenTelemetry)
    let _telemetry_guard = telemetry::init();

    tracing::info!("Starting YFinance adapter");

    let config = AdapterConfig::from_env().context("failed to load adapter configuration")?;
    log_config(&config);

    let adapter = connect(&config).context("failed to configure market data client")?;
    tracing::debug!(?adapter, settings = ?adapter.client().settings(), "Adapter ready");

    Ok(())
}

/// Load .env file from current or ancestor directories.
fn load_dotenv() {
    if dotenvy::dotenv().is_err() {
        load_dotenv_from_ancestors();
    }
}

/// Log the parsed configuration.
fn log_config(config: &AdapterConfig) {
    let proxy_url = config
        .proxy_url
        .as_deref()
        .map_or_else(|| "<unset>".to_string(), redact);
    tracing::info!(
        proxy_url = %proxy_url,
        timeout_secs = config.timeout.as_secs(),
        user_agent = %config.user_agent,
        "Configuration loaded"
    );
}

/// Load .env file from any ancestor directory.
fn load_dotenv_from_ancestors() {
    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd.as_path();
        while let Some(parent) = dir.parent() {
            let env_path = parent.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
            dir = parent;
        }
    }
}
