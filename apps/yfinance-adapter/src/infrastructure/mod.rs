//! Infrastructure Layer - Adapters and external integrations.
//!
//! This layer contains the concrete implementations of the port interfaces
//! defined in the application layer.

/// Configuration loaded from the environment.
pub mod config;

/// OpenTelemetry tracing integration.
pub mod telemetry;

/// Yahoo Finance HTTP client adapter.
pub mod yfinance;
