//! Typed operations over the theme asset API.
//!
//! # Data Flow
//! ```text
//! AssetClient method (list / get / update / delete)
//!     → build path + query ("/assets.json?asset[key]=...")
//!     → http::HttpClient::send (rate gate, headers, JSON body)
//!     → status interpretation (non-2xx → ApiError::Status)
//!     → envelope decode ({"asset": ...} / {"assets": [...]})
//! ```
//!
//! # Design Decisions
//! - Status codes are interpreted here, not in the raw client
//! - Error bodies are carried verbatim so callers can surface the API's
//!   own message

pub mod assets;

pub use assets::{Asset, AssetClient};

use reqwest::StatusCode;
use thiserror::Error;

use crate::http::ClientError;

/// Errors produced by typed API operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Failure below the API layer (construction, gate, transport).
    #[error(transparent)]
    Client(#[from] ClientError),

    /// The API answered with a non-success status.
    #[error("API returned status {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// A success response body did not match the expected envelope.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type for typed API operations.
pub type ApiResult<T> = Result<T, ApiError>;
