//! Per-call resolution options and the resolution result.

use axum::http::Method;

/// Options for a single resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Network the route lookup is scoped to.
    ///
    /// Default: empty, meaning no network filter.
    pub network: String,
}

impl ResolveOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the network filter.
    pub fn with_network(mut self, network: impl Into<String>) -> Self {
        self.network = network.into();
        self
    }
}

/// Concrete backend destination for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// Service token taken from the request path.
    pub name: String,
    /// Method of the original request, unchanged.
    pub method: Method,
    /// Address of the selected route.
    pub host: String,
    /// Request path with the service segment removed.
    pub path: String,
    /// Network of the selected route.
    pub network: String,
}
