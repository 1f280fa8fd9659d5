//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate addresses, namespace shape and value ranges
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: GatewayConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::GatewayConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("resolver.namespace must not be empty")]
    EmptyNamespace,

    #[error("resolver.namespace '{0}' must not start or end with '.'")]
    MalformedNamespace(String),

    #[error("{field} '{value}' is not a valid socket address")]
    InvalidAddress { field: &'static str, value: String },

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroTimeout,

    #[error("routes[{index}].service must not be empty")]
    EmptyRouteService { index: usize },

    #[error("routes[{index}].address '{address}' must be host:port")]
    InvalidRouteAddress { index: usize, address: String },
}

pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let namespace = &config.resolver.namespace;
    if namespace.is_empty() {
        errors.push(ValidationError::EmptyNamespace);
    } else if namespace.starts_with('.') || namespace.ends_with('.') {
        errors.push(ValidationError::MalformedNamespace(namespace.clone()));
    }

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field: "listener.bind_address",
            value: config.listener.bind_address.clone(),
        });
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidAddress {
            field: "observability.metrics_address",
            value: config.observability.metrics_address.clone(),
        });
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    for (index, route) in config.routes.iter().enumerate() {
        if route.service.is_empty() {
            errors.push(ValidationError::EmptyRouteService { index });
        }
        if !has_port(&route.address) {
            errors.push(ValidationError::InvalidRouteAddress {
                index,
                address: route.address.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Accepts "host:port" where host may be a name, IPv4 or bracketed IPv6.
fn has_port(address: &str) -> bool {
    match address.rsplit_once(':') {
        Some((host, port)) => !host.is_empty() && port.parse::<u16>().is_ok(),
        None => false,
    }
}
