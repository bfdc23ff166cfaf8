//! Client Proxy Routing Integration Tests
//!
//! Tests that requests issued through the market data client after the
//! adapter applies a proxy are actually sent to that proxy. A local mock
//! server stands in for the HTTP proxy.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;
use std::time::Duration;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use yfinance_adapter::{AdapterConfig, YFinanceAdapter, YFinanceClient};

/// Upstream host that only resolves through the proxy.
const UPSTREAM: &str = "http://query1.finance.yahoo.invalid";

const CHART_PATH: &str = "/v8/finance/chart/AAPL";

fn client() -> Arc<YFinanceClient> {
    let config = AdapterConfig::default().with_timeout(Duration::from_secs(5));
    Arc::new(YFinanceClient::new(&config).unwrap())
}

#[tokio::test]
async fn requests_go_through_configured_proxy() {
    let proxy = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CHART_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"chart":{"result":[]}}"#))
        .expect(1)
        .mount(&proxy)
        .await;

    let client = client();
    let _adapter = YFinanceAdapter::new(Arc::clone(&client), Some(proxy.uri())).unwrap();

    let response = client
        .http()
        .get(format!("{UPSTREAM}{CHART_PATH}"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), r#"{"chart":{"result":[]}}"#);
}

#[tokio::test]
async fn proxy_credentials_sent_as_basic_auth() {
    let proxy = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CHART_PATH))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&proxy)
        .await;

    let authenticated = proxy.uri().replacen("http://", "http://user:password@", 1);
    let client = client();
    let _adapter = YFinanceAdapter::new(Arc::clone(&client), Some(authenticated)).unwrap();

    client
        .http()
        .get(format!("{UPSTREAM}{CHART_PATH}"))
        .send()
        .await
        .unwrap();

    let received = proxy.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    // base64("user:password")
    assert_eq!(
        received[0]
            .headers
            .get("proxy-authorization")
            .and_then(|v| v.to_str().ok()),
        Some("Basic dXNlcjpwYXNzd29yZA==")
    );
}

#[tokio::test]
async fn empty_proxy_leaves_client_direct() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CHART_PATH))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client();
    let _adapter = YFinanceAdapter::new(Arc::clone(&client), Some(String::new())).unwrap();

    let response = client
        .http()
        .get(format!("{}{CHART_PATH}", server.uri()))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert!(client.proxy().is_none());
}
