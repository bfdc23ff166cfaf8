//! Configuration Module
//!
//! Configuration loading for the adapter binary.

mod settings;

pub use settings::{AdapterConfig, ConfigError, PROXY_URL_VAR, TIMEOUT_SECS_VAR, USER_AGENT_VAR};
