//! Outbound transport construction.
//!
//! # Responsibilities
//! - Translate an optional proxy string into a configured proxy
//! - Assemble the shared `reqwest::Client` (headers, User-Agent, timeout)
//!
//! # Design Decisions
//! - No network I/O at construction; this only configures future dials
//! - Proxy strings are validated eagerly so a bad URI fails client
//!   creation, not the first request

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Proxy;
use url::Url;

use crate::http::types::{ClientError, ClientResult};

/// User-Agent sent on every request: `rust/themectl (<os>; <arch>; <version>)`.
pub(crate) fn user_agent() -> String {
    format!(
        "rust/themectl ({}; {}; {})",
        std::env::consts::OS,
        std::env::consts::ARCH,
        env!("CARGO_PKG_VERSION"),
    )
}

/// Translate an optional proxy string into a `reqwest::Proxy`.
///
/// `None` or an empty string selects the standard direct transport.
pub(crate) fn proxy_for(proxy_url: Option<&str>) -> ClientResult<Option<Proxy>> {
    let raw = match proxy_url {
        None | Some("") => return Ok(None),
        Some(raw) => raw,
    };

    let uri: Url = raw
        .parse()
        .map_err(|_| ClientError::InvalidProxyUri(raw.to_string()))?;
    let proxy = Proxy::all(uri).map_err(|_| ClientError::InvalidProxyUri(raw.to_string()))?;

    Ok(Some(proxy))
}

/// Assemble the shared HTTP transport, optionally routed through a proxy.
pub(crate) fn build_transport(proxy: Option<Proxy>, timeout: Duration) -> ClientResult<reqwest::Client> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    let mut builder = reqwest::Client::builder()
        .default_headers(headers)
        .user_agent(user_agent())
        .timeout(timeout);

    if let Some(proxy) = proxy {
        builder = builder.proxy(proxy);
    }

    Ok(builder.build()?)
}
