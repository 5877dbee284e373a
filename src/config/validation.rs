//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the domain resolves to a usable base URL
//! - Validate value ranges (timeout > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ClientConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use crate::config::schema::ClientConfig;
use crate::http::client::parse_base_url;
use crate::http::transport::proxy_for;

/// A single semantic problem found in a configuration.
#[derive(Debug, PartialEq)]
pub enum ValidationError {
    MissingDomain,
    InvalidDomain(String),
    MissingPassword,
    InvalidProxyUrl(String),
    ZeroTimeout,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::MissingDomain => write!(f, "store.domain is required"),
            ValidationError::InvalidDomain(d) => write!(f, "store.domain {d:?} is not a valid host"),
            ValidationError::MissingPassword => write!(f, "store.password is required"),
            ValidationError::InvalidProxyUrl(p) => {
                write!(f, "transport.proxy_url {p:?} is not a valid URI")
            }
            ValidationError::ZeroTimeout => write!(f, "transport.timeout_secs must be positive"),
        }
    }
}

/// Validate a configuration, collecting every semantic error.
pub fn validate_config(config: &ClientConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.store.domain.trim().is_empty() {
        errors.push(ValidationError::MissingDomain);
    } else if parse_base_url(&config.store.domain, config.transport.allow_insecure).is_err() {
        errors.push(ValidationError::InvalidDomain(config.store.domain.clone()));
    }

    if config.store.password.is_empty() {
        errors.push(ValidationError::MissingPassword);
    }

    if let Some(proxy) = config.transport.proxy_url.as_deref() {
        if proxy_for(Some(proxy)).is_err() {
            errors.push(ValidationError::InvalidProxyUrl(proxy.to_string()));
        }
    }

    if config.transport.timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
