//! Validated multi-leg routes.
//!
//! `Route::new` is the ingestion boundary: it rejects malformed input once,
//! and everything downstream assumes validity without re-checking.

use crate::models::types::{EngineError, Result, Waypoint};

/// An ordered sequence of at least two waypoints with no consecutive
/// duplicates.
#[derive(Clone, Debug)]
pub struct Route {
    waypoints: Vec<Waypoint>,
}

impl Route {
    /// Validate and build a route.
    ///
    /// Fails on fewer than two waypoints or on consecutive entries sharing
    /// an id or a location. The engine never silently repairs a malformed
    /// route.
    pub fn new(waypoints: Vec<Waypoint>) -> Result<Self> {
        if waypoints.len() < 2 {
            return Err(EngineError::RouteTooShort(waypoints.len()));
        }
        for (i, pair) in waypoints.windows(2).enumerate() {
            if pair[0].id == pair[1].id || pair[0].location == pair[1].location {
                return Err(EngineError::DuplicateWaypoint(i + 1, pair[1].id.clone()));
            }
        }
        Ok(Self { waypoints })
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    /// Consecutive waypoint pairs, one per leg.
    pub fn legs(&self) -> impl Iterator<Item = (&Waypoint, &Waypoint)> {
        self.waypoints.windows(2).map(|pair| (&pair[0], &pair[1]))
    }
}
