//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the client.
//! All types derive Serde traits for deserialization from config files.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::http::Params;

/// Root configuration for the theme client.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct ClientConfig {
    /// Target store and credentials.
    pub store: StoreConfig,

    /// Outbound transport settings (proxy, timeout).
    pub transport: TransportConfig,

    /// Request pacing settings.
    pub rate_limit: RateLimitConfig,

    /// Logging settings.
    pub log: LogConfig,
}

impl ClientConfig {
    /// Convert a validated configuration into client parameters.
    pub fn params(&self) -> Params {
        Params {
            domain: self.store.domain.clone(),
            password: self.store.password.clone(),
            api_limit: Duration::from_millis(self.rate_limit.interval_ms),
            proxy_url: self.transport.proxy_url.clone(),
            timeout: Duration::from_secs(self.transport.timeout_secs),
            allow_insecure: self.transport.allow_insecure,
        }
    }
}

/// Store identity and credentials.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct StoreConfig {
    /// Shop host (e.g. "test.myshopify.com"); scheme optional.
    pub domain: String,

    /// Access token sent with every request.
    pub password: String,
}

/// Outbound transport configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct TransportConfig {
    /// Optional outbound proxy URL. Absent or empty means direct.
    pub proxy_url: Option<String>,

    /// Total per-request timeout in seconds.
    pub timeout_secs: u64,

    /// Preserve an explicit `http://` scheme in the domain (local
    /// backends only).
    pub allow_insecure: bool,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            proxy_url: None,
            timeout_secs: 30,
            allow_insecure: false,
        }
    }
}

/// Request pacing configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct RateLimitConfig {
    /// Minimum spacing between request starts, in milliseconds.
    /// Zero disables pacing.
    pub interval_ms: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self { interval_ms: 500 }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    /// Default tracing filter when RUST_LOG is unset.
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "themectl=info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_yields_defaults() {
        let config: ClientConfig = toml::from_str("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.transport.timeout_secs, 30);
        assert_eq!(config.rate_limit.interval_ms, 500);
    }

    #[test]
    fn test_partial_document_keeps_other_defaults() {
        let config: ClientConfig = toml::from_str(
            r#"
            [store]
            domain = "test.myshopify.com"
            password = "secret_password"

            [rate_limit]
            interval_ms = 250
            "#,
        )
        .unwrap();

        assert_eq!(config.store.domain, "test.myshopify.com");
        assert_eq!(config.rate_limit.interval_ms, 250);
        assert_eq!(config.transport.timeout_secs, 30);
        assert!(config.transport.proxy_url.is_none());
    }

    #[test]
    fn test_params_conversion() {
        let mut config = ClientConfig::default();
        config.store.domain = "test.myshopify.com".to_string();
        config.store.password = "secret_password".to_string();
        config.rate_limit.interval_ms = 250;
        config.transport.proxy_url = Some("http://127.0.0.1:8080".to_string());

        let params = config.params();
        assert_eq!(params.domain, "test.myshopify.com");
        assert_eq!(params.api_limit, Duration::from_millis(250));
        assert_eq!(params.timeout, Duration::from_secs(30));
        assert_eq!(params.proxy_url.as_deref(), Some("http://127.0.0.1:8080"));
    }
}
