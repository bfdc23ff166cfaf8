//! Application Services
//!
//! Services that orchestrate domain logic and coordinate between ports.
//!
//! - `YFinanceAdapter`: Wraps the market data client and forwards the
//!   configured proxy to it at construction

use std::fmt;
use std::sync::Arc;

use crate::application::ports::{ClientConfig, ClientConfigError, MarketDataClientPort};
use crate::domain::proxy::redact;

/// Adapter mediating access to the Yahoo Finance market data client.
///
/// Construction is the only point where the adapter touches the client's
/// configuration: a non-empty proxy URL is forwarded exactly once, while
/// `None` or an empty string leaves the client untouched.
pub struct YFinanceAdapter<C: MarketDataClientPort> {
    client: Arc<C>,
    proxy_url: Option<String>,
}

impl<C: MarketDataClientPort> YFinanceAdapter<C> {
    /// Create a new adapter around `client`.
    ///
    /// # Errors
    ///
    /// Returns the client's error if it rejects the proxy configuration.
    pub fn new(client: Arc<C>, proxy_url: Option<String>) -> Result<Self, ClientConfigError> {
        match proxy_url.as_deref() {
            Some(proxy) if !proxy.is_empty() => {
                client.set_config(ClientConfig::with_proxy(proxy))?;
                tracing::debug!(proxy = %redact(proxy), "Market data client proxy configured");
            }
            _ => {
                tracing::debug!("No proxy URL provided, market data client left unconfigured");
            }
        }

        Ok(Self { client, proxy_url })
    }

    /// Get the proxy URL exactly as passed to the constructor.
    #[must_use]
    pub fn proxy_url(&self) -> Option<&str> {
        self.proxy_url.as_deref()
    }

    /// Get the wrapped market data client.
    #[must_use]
    pub const fn client(&self) -> &Arc<C> {
        &self.client
    }
}

impl<C: MarketDataClientPort> fmt::Debug for YFinanceAdapter<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("YFinanceAdapter")
            .field("proxy_url", &self.proxy_url.as_deref().map(redact))
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Tests
// =============================================================================
