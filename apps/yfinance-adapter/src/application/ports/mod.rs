//! Port Interfaces
//!
//! Defines the interfaces (ports) for external systems following
//! the Hexagonal Architecture pattern. These are the contracts that
//! infrastructure adapters must implement.
//!
//! ## Driven Ports (Outbound)
//!
//! - `MarketDataClientPort`: Configuration surface of the third-party
//!   market data client (Yahoo Finance)

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::proxy::{ProxyUrlError, redact};

/// Configuration payload accepted by the market data client.
///
/// Serializes as `{"proxy": "<url>"}`, mirroring the keyword the
/// client's own configuration call takes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Proxy URL for all outbound requests. `None` means a direct connection.
    pub proxy: Option<String>,
}

impl ClientConfig {
    /// Create a configuration that routes traffic through `proxy`.
    #[must_use]
    pub fn with_proxy(proxy: impl Into<String>) -> Self {
        Self {
            proxy: Some(proxy.into()),
        }
    }
}

/// Errors applying a client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientConfigError {
    /// The proxy URL was rejected.
    #[error("invalid proxy {proxy}: {reason}")]
    InvalidProxy {
        /// Proxy URL with credentials masked.
        proxy: String,
        /// Why the URL was rejected.
        reason: ProxyUrlError,
    },

    /// The underlying HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Build(String),
}

impl ClientConfigError {
    /// Build an `InvalidProxy` error, masking any credentials in `raw`.
    #[must_use]
    pub fn invalid_proxy(raw: &str, reason: ProxyUrlError) -> Self {
        Self::InvalidProxy {
            proxy: redact(raw),
            reason,
        }
    }
}

/// Configuration port of the third-party market data client.
///
/// Implementations apply the settings to every request issued after the
/// call returns. The call is synchronous and is made at most once per
/// adapter construction.
#[cfg_attr(test, mockall::automock)]
pub trait MarketDataClientPort: Send + Sync {
    /// Apply a new client configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be applied; the
    /// previous configuration stays in effect.
    fn set_config(&self, config: ClientConfig) -> Result<(), ClientConfigError>;
}
