//! Yahoo Finance HTTP client with runtime proxy configuration.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use reqwest::{Client, Proxy};

use crate::application::ports::{ClientConfig, ClientConfigError, MarketDataClientPort};
use crate::application::services::YFinanceAdapter;
use crate::domain::proxy::ProxyUrl;
use crate::infrastructure::config::AdapterConfig;

/// Settings currently applied to the HTTP client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    /// Proxy for all outbound requests.
    pub proxy: Option<ProxyUrl>,
    /// HTTP request timeout.
    pub timeout: Duration,
    /// HTTP user agent.
    pub user_agent: String,
}

/// Settings and the HTTP client built from them, swapped together.
#[derive(Debug)]
struct ClientState {
    settings: ClientSettings,
    http: Client,
}

/// Market data client for the Yahoo Finance API.
#[derive(Debug)]
pub struct YFinanceClient {
    state: RwLock<ClientState>,
}

impl YFinanceClient {
    /// Create a new client from config, without a proxy.
    ///
    /// The proxy in `config` is deliberately ignored here; it is applied
    /// through `set_config` by the adapter.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be built.
    pub fn new(config: &AdapterConfig) -> Result<Self, ClientConfigError> {
        let settings = ClientSettings {
            proxy: None,
            timeout: config.timeout,
            user_agent: config.user_agent.clone(),
        };
        let http = build_http_client(&settings)?;

        Ok(Self {
            state: RwLock::new(ClientState { settings, http }),
        })
    }

    /// Get a handle to the current HTTP client.
    ///
    /// `reqwest::Client` is reference counted, so this is cheap. A handle
    /// taken before a `set_config` keeps the settings it was built with.
    #[must_use]
    pub fn http(&self) -> Client {
        self.state.read().http.clone()
    }

    /// Get a snapshot of the applied settings.
    #[must_use]
    pub fn settings(&self) -> ClientSettings {
        self.state.read().settings.clone()
    }

    /// Get the active proxy, if any.
    #[must_use]
    pub fn proxy(&self) -> Option<ProxyUrl> {
        self.state.read().settings.proxy.clone()
    }
}

impl MarketDataClientPort for YFinanceClient {
    fn set_config(&self, config: ClientConfig) -> Result<(), ClientConfigError> {
        let proxy = config
            .proxy
            .as_deref()
            .map(|raw| {
                ProxyUrl::parse(raw).map_err(|reason| ClientConfigError::invalid_proxy(raw, reason))
            })
            .transpose()?;

        let mut state = self.state.write();
        let settings = ClientSettings {
            proxy,
            ..state.settings.clone()
        };
        let http = build_http_client(&settings)?;

        match &settings.proxy {
            Some(proxy) => tracing::info!(
                proxy = %proxy,
                scheme = %proxy.scheme(),
                authenticated = proxy.has_credentials(),
                "Proxy applied to market data client"
            ),
            None => tracing::info!("Proxy cleared from market data client"),
        }

        *state = ClientState { settings, http };
        Ok(())
    }
}

/// Build the market data client and hand it to an adapter with the
/// configured proxy.
///
/// This is the startup sequence of the binary. The outcome (proxied or
/// direct) is logged at info level.
///
/// # Errors
///
/// Returns error if the HTTP client cannot be built or the proxy is rejected.
pub fn connect(
    config: &AdapterConfig,
) -> Result<YFinanceAdapter<YFinanceClient>, ClientConfigError> {
    let client = Arc::new(YFinanceClient::new(config)?);
    let adapter = YFinanceAdapter::new(client, config.proxy_url.clone())?;

    match adapter.client().proxy() {
        Some(proxy) => tracing::info!(
            proxy = %proxy,
            scheme = %proxy.scheme(),
            "Market data requests routed through proxy"
        ),
        None => tracing::info!("Market data requests use a direct connection"),
    }

    Ok(adapter)
}

fn build_http_client(settings: &ClientSettings) -> Result<Client, ClientConfigError> {
    let mut builder = Client::builder()
        .timeout(settings.timeout)
        .user_agent(settings.user_agent.as_str());

    // Without an explicit proxy the client connects directly, ignoring
    // HTTP_PROXY and friends from the environment.
    builder = match &settings.proxy {
        Some(proxy) => builder.proxy(Proxy::all(proxy.as_str()).map_err(|e| {
            ClientConfigError::Build(format!("proxy {proxy} rejected: {}", e.without_url()))
        })?),
        None => builder.no_proxy(),
    };

    builder
        .build()
        .map_err(|e| ClientConfigError::Build(e.without_url().to_string()))
}
