//! Route and query types exchanged with the routing fabric.

use serde::{Deserialize, Serialize};

/// Network filter value that matches every network.
pub const ANY_NETWORK: &str = "*";

/// A reachable instance of a backend service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Route {
    /// Fully qualified service name the route was registered under.
    pub service: String,
    /// Network location of the instance (e.g. "10.0.0.1:8080").
    pub address: String,
    /// Network segment the route belongs to.
    pub network: String,
}

impl Route {
    pub fn new(
        service: impl Into<String>,
        address: impl Into<String>,
        network: impl Into<String>,
    ) -> Self {
        Self {
            service: service.into(),
            address: address.into(),
            network: network.into(),
        }
    }
}

/// A lookup submitted to a [`RouteLookup`](super::RouteLookup).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteQuery {
    /// Qualified service name, `<namespace>.<service token>`.
    pub service: String,
    /// Network filter. Empty or `*` means unfiltered.
    pub network: String,
}

impl RouteQuery {
    /// Compose the query for `token` within `namespace`.
    pub fn for_service(namespace: &str, token: &str, network: impl Into<String>) -> Self {
        Self {
            service: format!("{namespace}.{token}"),
            network: network.into(),
        }
    }

    /// Returns true if the query does not restrict the network.
    pub fn is_unfiltered(&self) -> bool {
        self.network.is_empty() || self.network == ANY_NETWORK
    }

    /// Returns true if `route` satisfies this query.
    pub fn matches(&self, route: &Route) -> bool {
        route.service == self.service && (self.is_unfiltered() || route.network == self.network)
    }
}
