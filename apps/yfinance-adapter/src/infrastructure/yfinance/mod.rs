//! Yahoo Finance Client Adapter
//!
//! Implements `MarketDataClientPort` on top of a shared `reqwest` client.
//! Configuration swaps the HTTP client in place, so every caller holding
//! the same `Arc<YFinanceClient>` picks up a new proxy on its next request.

mod client;

pub use client::{ClientSettings, YFinanceClient, connect};
