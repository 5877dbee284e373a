//! Client parameters and error definitions.

use std::time::Duration;

use thiserror::Error;

/// Construction-time parameters for [`HttpClient`](crate::http::HttpClient).
///
/// Only `domain` and `password` are required in practice; everything else
/// has a usable default via [`Params::default`].
#[derive(Debug, Clone)]
pub struct Params {
    /// Target shop host (e.g. "test.myshopify.com"). A scheme is optional;
    /// `https://` is assumed when absent.
    pub domain: String,

    /// Access token sent on every request via `X-Shopify-Access-Token`.
    pub password: String,

    /// Minimum spacing enforced between consecutive request starts.
    /// Zero disables pacing.
    pub api_limit: Duration,

    /// Optional outbound proxy. `None` or an empty string means a direct
    /// connection.
    pub proxy_url: Option<String>,

    /// Total per-request timeout applied to the transport.
    pub timeout: Duration,

    /// Preserve an explicit `http://` scheme in `domain` instead of
    /// rewriting it to `https`. Intended for local test backends only.
    pub allow_insecure: bool,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            domain: String::new(),
            password: String::new(),
            api_limit: Duration::ZERO,
            proxy_url: None,
            timeout: Duration::from_secs(30),
            allow_insecure: false,
        }
    }
}

/// Errors produced by client construction and request execution.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The domain string cannot be parsed into a URL with a valid host.
    #[error("invalid domain {0:?}")]
    InvalidDomain(String),

    /// The proxy string is not a parseable URI.
    #[error("invalid proxy URI {0:?}")]
    InvalidProxyUri(String),

    /// The password contains bytes that cannot form a header value.
    #[error("password is not a valid header value")]
    InvalidToken,

    /// The request path does not join onto the base URL.
    #[error("invalid request path {0:?}")]
    InvalidPath(String),

    /// Connection or protocol failure from the underlying transport.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The request body could not be encoded as JSON.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;
