//! Application Layer - Use cases and port definitions.
//!
//! This layer contains the adapter service and the port interface
//! that defines how it drives the third-party market data client.

/// Port interfaces for external systems (market data client).
pub mod ports;

/// Application services (the market data adapter).
pub mod services;
