//! HTTP client subsystem.
//!
//! # Data Flow
//! ```text
//! Params (domain, password, proxy, limits)
//!     → client.rs (validate domain, derive base URL)
//!     → transport.rs (proxy wiring, headers, timeout)
//!     → HttpClient (immutable; shared transport + interval gate)
//!
//! Per request:
//!     send(method, path, body)
//!     → ratelimit gate (global minimum spacing)
//!     → JSON body + access-token header
//!     → transport → raw Response to the caller
//! ```
//!
//! # Design Decisions
//! - Construction fails fast: a bad domain or proxy never yields a client
//! - Fixed headers ride on the transport; the token is attached per call
//! - Status codes are returned raw, not translated into errors

pub mod client;
pub mod transport;
pub mod types;

pub use client::{HttpClient, HEADER_ACCESS_TOKEN};
pub use types::{ClientError, ClientResult, Params};
