//! Round-robin selection strategy.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::routing::Route;
use crate::selector::{check_candidates, RouteSelector, SelectError};

/// Round-robin selector.
/// Stores an internal counter to rotate through candidates.
#[derive(Debug, Default)]
pub struct RoundRobin {
    counter: AtomicUsize,
}

impl RoundRobin {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RouteSelector for RoundRobin {
    async fn select(&self, routes: &[Route], cancel: &CancellationToken) -> Result<Route, SelectError> {
        check_candidates(routes, cancel)?;

        let index = self.counter.fetch_add(1, Ordering::Relaxed) % routes.len();
        Ok(routes[index].clone())
    }
}
