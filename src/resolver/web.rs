//! Namespace-scoped resolver for web services.

use std::sync::Arc;

use axum::http::request::Parts;
use tokio_util::sync::CancellationToken;

use crate::config::GatewayConfig;
use crate::resolver::path::parse_path;
use crate::resolver::{Endpoint, ResolveError, ResolveOptions};
use crate::routing::{RouteLookup, RouteQuery, StaticRouteTable};
use crate::selector::{build_selector, RouteSelector};

/// Maps `/<service>/<rest>` onto a route of `<namespace>.<service>`.
///
/// Holds no mutable state; share it behind an `Arc` and replace the whole
/// instance to change configuration.
#[derive(Debug, Clone)]
pub struct WebResolver {
    namespace: String,
    router: Arc<dyn RouteLookup>,
    selector: Arc<dyn RouteSelector>,
}

impl WebResolver {
    pub fn new(
        namespace: impl Into<String>,
        router: Arc<dyn RouteLookup>,
        selector: Arc<dyn RouteSelector>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            router,
            selector,
        }
    }

    /// Build a resolver over the static route table described by `config`.
    pub fn from_config(config: &GatewayConfig) -> Self {
        let table = StaticRouteTable::from_config(&config.routes);
        tracing::debug!(
            namespace = %config.resolver.namespace,
            services = table.service_count(),
            selector = ?config.resolver.selector,
            "Resolver built"
        );
        Self::new(
            config.resolver.namespace.clone(),
            Arc::new(table),
            build_selector(config.resolver.selector),
        )
    }

    pub fn name(&self) -> &'static str {
        "web/resolver"
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Resolve `request` to a backend endpoint.
    ///
    /// Path errors return before either collaborator is consulted. Collaborator
    /// errors are wrapped, never retried. Cancelling `cancel` aborts whichever
    /// collaborator call is in flight.
    pub async fn resolve(
        &self,
        request: &Parts,
        options: &ResolveOptions,
        cancel: &CancellationToken,
    ) -> Result<Endpoint, ResolveError> {
        let parsed = parse_path(request.uri.path())?;
        let query = RouteQuery::for_service(&self.namespace, parsed.service, options.network.as_str());

        let routes = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(ResolveError::Cancelled),
            res = self.router.lookup(&query, cancel) => res.map_err(ResolveError::Lookup)?,
        };

        let route = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(ResolveError::Cancelled),
            res = self.selector.select(&routes, cancel) => res.map_err(ResolveError::Selection)?,
        };

        tracing::debug!(
            service = %query.service,
            candidates = routes.len(),
            host = %route.address,
            network = %route.network,
            "Resolved endpoint"
        );

        Ok(Endpoint {
            name: parsed.service.to_string(),
            method: request.method.clone(),
            host: route.address,
            path: parsed.path,
            network: route.network,
        })
    }
}

impl std::fmt::Display for WebResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
