//! Rate-limited HTTP client for the Shopify theme asset API.

pub mod api;
pub mod config;
pub mod http;
pub mod observability;
pub mod ratelimit;

pub use api::{ApiError, Asset, AssetClient};
pub use config::ClientConfig;
pub use http::{ClientError, HttpClient, Params};
pub use ratelimit::IntervalGate;
