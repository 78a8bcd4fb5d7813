//! # flyway-engine
//!
//! The computational core behind a multi-leg flight-route visualizer.
//!
//! ## Features
//!
//! - **Geodesy**: bearings, haversine distances, point-to-polyline distance,
//!   antimeridian-aware bounding boxes
//! - **Duration model**: empirical per-leg flight-time estimates with wind
//!   belts and route factors
//! - **Corridor filter**: two-phase landmark filtering around a route
//! - **Visibility diffing**: minimal add/remove deltas as the viewport and
//!   tier filters change
//!
//! The engine is synchronous and side-effect-free; rendering, map-provider
//! plumbing and event debouncing live in the presentation layer, which calls
//! in with validated inputs.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use flyway_engine::prelude::*;
//!
//! let route = Route::new(vec![
//!     Waypoint::new("LHR", 51.47, -0.45),
//!     Waypoint::new("JFK", 40.64, -73.78),
//! ]).unwrap();
//!
//! // Per-leg and total distance/duration for the info panel
//! let summary = RouteSummary::of(&route);
//! assert_eq!(summary.legs.len(), 1);
//! assert!(summary.total_duration_hours > 8.0);
//!
//! // Landmarks near the corridor, recomputed on route change only
//! let landmarks = vec![
//!     Arc::new(Landmark::new("Stonehenge", 51.18, -1.83, Tier::GlobalIcon)),
//!     Arc::new(Landmark::new("Sydney Opera House", -33.86, 151.22, Tier::GlobalIcon)),
//! ];
//! let candidates = filter_corridor(&landmarks, route.waypoints(), &TierRadiusKm::default());
//! assert_eq!(candidates.len(), 1);
//!
//! // Incremental visibility as the viewport moves
//! let mut visible = VisibilitySet::new();
//! let viewport = BoundingBox::new(55.0, 45.0, 5.0, -10.0);
//! let delta = visible.update(&candidates, Some(&viewport), TierSet::default());
//! assert_eq!(delta.to_add.len(), 1);
//! assert!(visible.update(&candidates, Some(&viewport), TierSet::default()).is_empty());
//! ```

pub mod corridor;
pub mod flight;
pub mod format;
pub mod geodesy;
pub mod identifiers;
pub mod labels;
pub mod models;
pub mod visibility;

// Re-exports for convenience
pub mod prelude {
    pub use crate::corridor::{
        filter_corridor, filter_corridor_with_stats, CandidateSet, CorridorStats, TierRadiusKm,
    };
    pub use crate::flight::{estimate_duration, LegSummary, RouteSummary};
    pub use crate::format::{format_distance, format_duration, DistanceText};
    pub use crate::geodesy::{
        distance_to_path, haversine_distance, initial_bearing, BoundingBox,
    };
    pub use crate::identifiers::*;
    pub use crate::labels::{label_placements, LabelPlacement, LabelSide};
    pub use crate::models::{route::Route, types::*};
    pub use crate::visibility::{VisibilityDelta, VisibilitySet};
}

pub use prelude::*;
