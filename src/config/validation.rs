//! Semantic configuration checks.
//!
//! Serde handles the syntactic layer; everything here operates on an
//! already-deserialized [`AppConfig`].

use std::net::SocketAddr;

use crate::config::schema::AppConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A bind address does not parse as `host:port`.
    InvalidBindAddress { field: &'static str, value: String },
    /// The request timeout is zero.
    ZeroTimeout,
    /// The log level is not one of the supported levels.
    UnknownLogLevel(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidBindAddress { field, value } => {
                write!(f, "{} is not a valid bind address: {:?}", field, value)
            }
            ValidationError::ZeroTimeout => write!(f, "timeouts.request_secs must be positive"),
            ValidationError::UnknownLogLevel(level) => {
                write!(f, "unknown log level {:?}", level)
            }
        }
    }
}

/// Run all semantic checks, collecting every failure.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.api.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress {
            field: "api.bind_address",
            value: config.api.bind_address.clone(),
        });
    }

    if config.bootstrap.enabled && config.bootstrap.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress {
            field: "bootstrap.bind_address",
            value: config.bootstrap.bind_address.clone(),
        });
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if !LOG_LEVELS.contains(&config.observability.log_level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
