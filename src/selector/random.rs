//! Uniform random selection strategy.

use async_trait::async_trait;
use rand::Rng;
use tokio_util::sync::CancellationToken;

use crate::routing::Route;
use crate::selector::{check_candidates, RouteSelector, SelectError};

/// Picks a candidate uniformly at random.
#[derive(Debug, Default)]
pub struct Random;

impl Random {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl RouteSelector for Random {
    async fn select(&self, routes: &[Route], cancel: &CancellationToken) -> Result<Route, SelectError> {
        check_candidates(routes, cancel)?;

        let index = rand::thread_rng().gen_range(0..routes.len());
        Ok(routes[index].clone())
    }
}
