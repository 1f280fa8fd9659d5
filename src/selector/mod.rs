//! Route selection subsystem.
//!
//! # Data Flow
//! ```text
//! Candidate routes (from RouteLookup)
//!     → Apply selection strategy:
//!         - round_robin.rs (rotate through candidates)
//!         - random.rs (uniform pick)
//!     → Return one Route or SelectError
//! ```
//!
//! # Design Decisions
//! - Empty candidate sets fail with `NoAvailableRoute`, never panic
//! - Strategies hold no per-route state; candidates arrive fresh per call
//! - Strategy chosen per resolver via config

pub mod random;
pub mod round_robin;

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio_util::sync::CancellationToken;

use crate::routing::Route;

pub use random::Random;
pub use round_robin::RoundRobin;

/// Errors returned by a selection strategy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    /// The candidate set was empty.
    #[error("no available route")]
    NoAvailableRoute,

    /// Selection was abandoned because the caller cancelled.
    #[error("route selection cancelled")]
    Cancelled,
}

/// Picks one route out of a candidate set.
///
/// Implementations must be safe for concurrent use.
#[async_trait]
pub trait RouteSelector: Send + Sync + std::fmt::Debug {
    async fn select(&self, routes: &[Route], cancel: &CancellationToken) -> Result<Route, SelectError>;
}

/// Configured selection strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectorKind {
    #[default]
    RoundRobin,
    Random,
}

/// Construct the strategy for `kind`.
pub fn build_selector(kind: SelectorKind) -> Arc<dyn RouteSelector> {
    match kind {
        SelectorKind::RoundRobin => Arc::new(RoundRobin::new()),
        SelectorKind::Random => Arc::new(Random::new()),
    }
}

/// Shared precondition of every strategy.
fn check_candidates(routes: &[Route], cancel: &CancellationToken) -> Result<(), SelectError> {
    if cancel.is_cancelled() {
        return Err(SelectError::Cancelled);
    }
    if routes.is_empty() {
        return Err(SelectError::NoAvailableRoute);
    }
    Ok(())
}
