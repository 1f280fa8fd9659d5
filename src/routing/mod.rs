//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Resolver
//!     → RouteQuery { service: "<namespace>.<token>", network }
//!     → RouteLookup::lookup (table.rs or any other fabric)
//!     → Vec<Route> (possibly empty) handed to the selector
//!
//! Table compilation (at startup / reload):
//!     RouteConfig[]
//!     → Group by qualified service name
//!     → Freeze as immutable StaticRouteTable
//! ```
//!
//! # Design Decisions
//! - An empty result is a valid answer, not an error
//! - Registration order is preserved so selection is deterministic
//! - The table is immutable; reloads build a new one

pub mod route;
pub mod table;

use async_trait::async_trait;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

pub use route::{Route, RouteQuery, ANY_NETWORK};
pub use table::StaticRouteTable;

/// Errors returned by a routing fabric.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    /// The fabric could not answer the query.
    #[error("routing fabric unavailable: {0}")]
    Unavailable(String),

    /// The lookup was abandoned because the caller cancelled.
    #[error("route lookup cancelled")]
    Cancelled,
}

/// Answers "which routes exist for this service".
///
/// Implementations must be safe for concurrent use.
#[async_trait]
pub trait RouteLookup: Send + Sync + std::fmt::Debug {
    /// Return candidate routes for `query`, in a stable order.
    async fn lookup(
        &self,
        query: &RouteQuery,
        cancel: &CancellationToken,
    ) -> Result<Vec<Route>, RouterError>;
}
