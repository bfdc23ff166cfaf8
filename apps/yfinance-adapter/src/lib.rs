#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::needless_pass_by_value
    )
)]

//! YFinance Adapter - Market Data Client Wrapper
//!
//! Wraps the Yahoo Finance market data client and forwards an optional
//! network proxy to it when the adapter is constructed.
//!
//! # Layers (inside -> outside)
//!
//! - **Domain**: Value types with no infrastructure dependencies
//!   - `proxy`: Proxy URL parsing and credential redaction
//!
//! - **Application**: Use cases and port definitions
//!   - `ports`: Configuration interface of the market data client
//!   - `services`: The adapter and its construction contract
//!
//! - **Infrastructure**: Adapters and external integrations
//!   - `yfinance`: `reqwest`-backed market data client and `connect` startup
//!   - `config`: Environment configuration
//!   - `telemetry`: Logging and OpenTelemetry export
//!
//! # Proxy Flow
//!
//! ```text
//! PROXY_URL ──► AdapterConfig ──► YFinanceAdapter::new ──► set_config ──► YFinanceClient
//!                                       │                                     │
//!                              None / "" : skipped                 reqwest::Proxy::all
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Module Declarations
// =============================================================================

/// Domain layer - Proxy value types.
pub mod domain;

/// Application layer - Use cases and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

// =============================================================================
// Re-exports
// =============================================================================

// Domain types
pub use domain::proxy::{ProxyScheme, ProxyUrl, ProxyUrlError, redact};

// Ports and services
pub use application::ports::{ClientConfig, ClientConfigError, MarketDataClientPort};
pub use application::services::YFinanceAdapter;

// Infrastructure config
pub use infrastructure::config::{AdapterConfig, ConfigError};

// Market data client
pub use infrastructure::yfinance::{ClientSettings, YFinanceClient, connect};

// Telemetry
pub use infrastructure::telemetry::{TelemetryConfig, TelemetryGuard, init as init_telemetry};
