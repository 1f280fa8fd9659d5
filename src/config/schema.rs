//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the gateway.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::selector::SelectorKind;

/// Root configuration for the gateway.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GatewayConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Resolver configuration (namespace, default options, strategy).
    pub resolver: ResolverConfig,

    /// Static route definitions served by the bundled route table.
    pub routes: Vec<RouteConfig>,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Resolver configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Namespace prefixed to every service token (e.g., "go.micro.web").
    pub namespace: String,

    /// Default network filter. Empty means unfiltered.
    pub network: String,

    /// Route selection strategy.
    pub selector: SelectorKind,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            namespace: "go.micro.web".to_string(),
            network: String::new(),
            selector: SelectorKind::RoundRobin,
        }
    }
}

/// A single route registration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Fully qualified service name (e.g., "go.micro.web.greeter").
    pub service: String,

    /// Backend address (e.g., "127.0.0.1:3000").
    pub address: String,

    /// Network the route belongs to.
    #[serde(default = "default_network")]
    pub network: String,
}

fn default_network() -> String {
    "local".to_string()
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (resolution plus upstream round trip) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config() {
        let config: GatewayConfig = toml::from_str("").unwrap();
        assert_eq!(config.resolver.namespace, "go.micro.web");
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
        assert!(config.routes.is_empty());
    }

    #[test]
    fn test_full_config() {
        let config: GatewayConfig = toml::from_str(
            r#"
            [listener]
            bind_address = "127.0.0.1:9000"

            [resolver]
            namespace = "acme.web"
            network = "edge"
            selector = "random"

            [[routes]]
            service = "acme.web.greeter"
            address = "10.0.0.1:8080"

            [[routes]]
            service = "acme.web.greeter"
            address = "10.0.1.1:8080"
            network = "edge"

            [timeouts]
            request_secs = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.resolver.namespace, "acme.web");
        assert_eq!(config.resolver.network, "edge");
        assert_eq!(config.resolver.selector, SelectorKind::Random);
        assert_eq!(config.routes.len(), 2);
        assert_eq!(config.routes[0].network, "local");
        assert_eq!(config.routes[1].network, "edge");
        assert_eq!(config.timeouts.request_secs, 5);
    }
}
