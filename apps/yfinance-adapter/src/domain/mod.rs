//! Domain Layer - Core proxy types with no infrastructure dependencies.
//!
//! This layer holds the value types shared by the adapter and the
//! concrete market data client. URL parsing leans on the `url` crate only.

/// Proxy URL parsing and credential redaction.
pub mod proxy;
