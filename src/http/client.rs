//! The authenticated, rate-limited HTTP client.
//!
//! # Responsibilities
//! - Validate the shop domain and derive the base URL
//! - Hold the shared transport, access token, and interval gate
//! - Issue JSON requests with the fixed header set
//!
//! # Design Decisions
//! - All validation happens in `new`; no partial client is ever returned
//! - The raw client does not interpret status codes — callers (the `api`
//!   layer, the CLI) decide what a 404 or 422 means
//! - Per-request failures never invalidate the client

use reqwest::header::HeaderValue;
use reqwest::{Method, Response};
use serde::Serialize;
use url::Url;

use crate::http::transport;
use crate::http::types::{ClientError, ClientResult, Params};
use crate::ratelimit::IntervalGate;

/// Header carrying the shop access token.
pub const HEADER_ACCESS_TOKEN: &str = "X-Shopify-Access-Token";

/// Parse a shop domain into the scheme-qualified base URL.
///
/// A bare host gets `https://` prepended. An explicit `http://` scheme is
/// rewritten to `https` unless `allow_insecure` is set.
pub(crate) fn parse_base_url(domain: &str, allow_insecure: bool) -> ClientResult<Url> {
    let trimmed = domain.trim();
    let candidate = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };

    let mut url =
        Url::parse(&candidate).map_err(|_| ClientError::InvalidDomain(domain.to_string()))?;

    match url.host_str() {
        Some(host) if !host.is_empty() => {}
        _ => return Err(ClientError::InvalidDomain(domain.to_string())),
    }

    if url.scheme() != "https" && !(allow_insecure && url.scheme() == "http") {
        url.set_scheme("https")
            .map_err(|()| ClientError::InvalidDomain(domain.to_string()))?;
    }

    Ok(url)
}

/// HTTP client for the theme asset API.
///
/// Immutable after construction apart from the interval gate, which is the
/// one shared mutable resource and serializes concurrent callers.
pub struct HttpClient {
    base_url: Url,
    access_token: HeaderValue,
    http: reqwest::Client,
    gate: IntervalGate,
}

impl HttpClient {
    /// Create a new client from construction parameters.
    ///
    /// Fails with `InvalidDomain` or `InvalidProxyUri` when the domain or
    /// proxy string does not validate; see [`ClientError`].
    pub fn new(params: Params) -> ClientResult<Self> {
        let base_url = parse_base_url(&params.domain, params.allow_insecure)?;
        let proxy = transport::proxy_for(params.proxy_url.as_deref())?;
        let http = transport::build_transport(proxy, params.timeout)?;

        let mut access_token =
            HeaderValue::from_str(&params.password).map_err(|_| ClientError::InvalidToken)?;
        access_token.set_sensitive(true);

        tracing::info!(
            base_url = %base_url,
            api_limit_ms = params.api_limit.as_millis() as u64,
            proxied = params.proxy_url.as_deref().is_some_and(|p| !p.is_empty()),
            "theme client initialized"
        );

        Ok(Self {
            base_url,
            access_token,
            http,
            gate: IntervalGate::new(params.api_limit),
        })
    }

    /// Issue a request against the API.
    ///
    /// Blocks on the interval gate first, then serializes `body` (if any)
    /// to JSON and dispatches. Returns the raw response; status codes are
    /// the caller's to interpret.
    pub async fn send<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ClientResult<Response>
    where
        B: Serialize + ?Sized,
    {
        self.gate.acquire().await;

        let url = self
            .base_url
            .join(path)
            .map_err(|_| ClientError::InvalidPath(path.to_string()))?;

        tracing::debug!(%method, %url, "dispatching request");

        let mut request = self
            .http
            .request(method, url)
            .header(HEADER_ACCESS_TOKEN, self.access_token.clone());

        if let Some(body) = body {
            request = request.body(serde_json::to_vec(body)?);
        }

        Ok(request.send().await?)
    }

    /// GET `path`, no body.
    pub async fn get(&self, path: &str) -> ClientResult<Response> {
        self.send(Method::GET, path, None::<&()>).await
    }

    /// POST a JSON body to `path`.
    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ClientResult<Response> {
        self.send(Method::POST, path, Some(body)).await
    }

    /// PUT a JSON body to `path`.
    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ClientResult<Response> {
        self.send(Method::PUT, path, Some(body)).await
    }

    /// DELETE `path`, no body.
    pub async fn delete(&self, path: &str) -> ClientResult<Response> {
        self.send(Method::DELETE, path, None::<&()>).await
    }

    /// The validated base URL this client targets.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url.as_str())
            .field("access_token", &"<redacted>")
            .field("gate", &self.gate)
            .finish()
    }
}
