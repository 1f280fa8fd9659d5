//! In-memory route table built from configuration.
//!
//! # Responsibilities
//! - Group configured routes by qualified service name
//! - Answer queries with the routes of one service, optionally network-scoped
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(1) service lookup via HashMap, O(n) network filter within a service

use std::collections::HashMap;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::config::RouteConfig;
use crate::routing::{Route, RouteLookup, RouteQuery, RouterError};

/// Static routing fabric.
#[derive(Debug, Default)]
pub struct StaticRouteTable {
    services: HashMap<String, Vec<Route>>,
}

impl StaticRouteTable {
    /// Build a table from route definitions, keeping their order per service.
    pub fn new(routes: impl IntoIterator<Item = Route>) -> Self {
        let mut services: HashMap<String, Vec<Route>> = HashMap::new();
        for route in routes {
            services.entry(route.service.clone()).or_default().push(route);
        }
        Self { services }
    }

    /// Build a table from the `[[routes]]` section of the config.
    pub fn from_config(configs: &[RouteConfig]) -> Self {
        Self::new(
            configs
                .iter()
                .map(|c| Route::new(&c.service, &c.address, &c.network)),
        )
    }

    /// Number of distinct services known to the table.
    pub fn service_count(&self) -> usize {
        self.services.len()
    }

    /// Synchronous query used by both the async lookup and offline tools.
    pub fn query(&self, query: &RouteQuery) -> Vec<Route> {
        self.services
            .get(&query.service)
            .map(|routes| {
                routes
                    .iter()
                    .filter(|r| query.matches(r))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[async_trait]
impl RouteLookup for StaticRouteTable {
    async fn lookup(
        &self,
        query: &RouteQuery,
        cancel: &CancellationToken,
    ) -> Result<Vec<Route>, RouterError> {
        if cancel.is_cancelled() {
            return Err(RouterError::Cancelled);
        }

        let routes = self.query(query);
        tracing::trace!(
            service = %query.service,
            network = %query.network,
            candidates = routes.len(),
            "Route lookup"
        );
        Ok(routes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> StaticRouteTable {
        StaticRouteTable::new(vec![
            Route::new("go.micro.web.greeter", "10.0.0.1:8080", "local"),
            Route::new("go.micro.web.greeter", "10.0.1.1:8080", "edge"),
            Route::new("go.micro.web.greeter", "10.0.0.2:8080", "local"),
            Route::new("go.micro.web.store", "10.0.0.9:9000", "local"),
        ])
    }

    #[tokio::test]
    async fn test_lookup_keeps_registration_order() {
        let cancel = CancellationToken::new();
        let query = RouteQuery::for_service("go.micro.web", "greeter", "");
        let routes = table().lookup(&query, &cancel).await.unwrap();

        let addrs: Vec<_> = routes.iter().map(|r| r.address.as_str()).collect();
        assert_eq!(addrs, vec!["10.0.0.1:8080", "10.0.1.1:8080", "10.0.0.2:8080"]);
    }

    #[tokio::test]
    async fn test_lookup_network_scoped() {
        let cancel = CancellationToken::new();
        let query = RouteQuery::for_service("go.micro.web", "greeter", "edge");
        let routes = table().lookup(&query, &cancel).await.unwrap();

        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].address, "10.0.1.1:8080");
    }

    #[tokio::test]
    async fn test_unknown_service_is_empty_not_error() {
        let cancel = CancellationToken::new();
        let query = RouteQuery::for_service("go.micro.web", "missing", "");
        let routes = table().lookup(&query, &cancel).await.unwrap();
        assert!(routes.is_empty());
    }

    #[tokio::test]
    async fn test_cancelled_lookup() {
        let cancel = CancellationToken::new();
        cancel.cancel();
        let query = RouteQuery::for_service("go.micro.web", "greeter", "");
        let err = table().lookup(&query, &cancel).await.unwrap_err();
        assert_eq!(err, RouterError::Cancelled);
    }

    #[test]
    fn test_from_config() {
        let configs = vec![
            RouteConfig {
                service: "go.micro.web.greeter".into(),
                address: "127.0.0.1:3000".into(),
                network: "local".into(),
            },
            RouteConfig {
                service: "go.micro.web.store".into(),
                address: "127.0.0.1:3001".into(),
                network: "local".into(),
            },
        ];
        assert_eq!(StaticRouteTable::from_config(&configs).service_count(), 2);
    }
}
