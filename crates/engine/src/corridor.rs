//! Two-phase corridor filter.
//!
//! Given the full landmark collection and a route, produces the route-static
//! candidate set: every landmark within its tier's radius of the route
//! polyline. A cheap bounding-box prefilter runs before the precise
//! cross-track distance check, so the expensive phase only ever sees
//! landmarks that are at least plausibly near the corridor.
//!
//! The polyline legs are treated as straight great-circle segments between
//! consecutive waypoints; long legs are not resampled. The output depends
//! only on `(landmarks, waypoints, radii)` and is recomputed whole on every
//! route change, never patched incrementally.

use std::collections::HashSet;
use std::sync::Arc;

use geo::Point;
use tracing::debug;

use crate::geodesy::{distance_to_path, BoundingBox};
use crate::identifiers::LandmarkIdentifier;
use crate::models::{Landmark, Tier, Waypoint};

/// Extra slack added to the prefilter bounding box, in kilometers, on top
/// of the largest tier radius.
///
/// The box is built from the waypoints alone, so the margin covers the tier
/// radii around them but not the great-circle bulge of very long legs; a
/// landmark hugging the midpoint of such a leg can fall outside phase 1
/// even within its tier radius. That matches the original filter.
pub const PREFILTER_MARGIN_KM: f64 = 50.0;

/// Corridor inclusion radius per tier, in kilometers.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TierRadiusKm {
    pub global_icon: f64,
    pub national_landmark: f64,
    pub local_interest: f64,
}

impl TierRadiusKm {
    pub fn radius(&self, tier: Tier) -> f64 {
        match tier {
            Tier::GlobalIcon => self.global_icon,
            Tier::NationalLandmark => self.national_landmark,
            Tier::LocalInterest => self.local_interest,
        }
    }

    pub fn max(&self) -> f64 {
        self.global_icon
            .max(self.national_landmark)
            .max(self.local_interest)
    }
}

impl Default for TierRadiusKm {
    fn default() -> Self {
        Self {
            global_icon: 300.0,
            national_landmark: 150.0,
            local_interest: 75.0,
        }
    }
}

/// Phase counters, mostly for tests asserting that the prefilter actually
/// short-circuits the precise check.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CorridorStats {
    /// Landmarks examined.
    pub total: usize,
    /// Survivors of the bounding-box prefilter, i.e. how many reached the
    /// precise distance check.
    pub prefiltered: usize,
    /// Landmarks accepted into the candidate set.
    pub accepted: usize,
}

/// Landmarks relevant to the current route, independent of viewport.
///
/// Preserves the order of the input collection and is cheap to query by id.
#[derive(Clone, Debug, Default)]
pub struct CandidateSet {
    landmarks: Vec<Arc<Landmark>>,
    ids: HashSet<LandmarkIdentifier>,
}

impl CandidateSet {
    pub fn empty() -> Self {
        Self::default()
    }

    fn from_landmarks(landmarks: Vec<Arc<Landmark>>) -> Self {
        let ids = landmarks.iter().map(|lm| lm.id.clone()).collect();
        Self { landmarks, ids }
    }

    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    pub fn contains(&self, id: &LandmarkIdentifier) -> bool {
        self.ids.contains(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Landmark>> {
        self.landmarks.iter()
    }
}

/// Filter `landmarks` down to those within their tier radius of the route
/// through `waypoints`.
///
/// An empty landmark list or a route with fewer than two waypoints yields an
/// empty set; neither is an error.
pub fn filter_corridor(
    landmarks: &[Arc<Landmark>],
    waypoints: &[Waypoint],
    radii: &TierRadiusKm,
) -> CandidateSet {
    filter_corridor_with_stats(landmarks, waypoints, radii).0
}

/// As [`filter_corridor`], also returning phase counters.
pub fn filter_corridor_with_stats(
    landmarks: &[Arc<Landmark>],
    waypoints: &[Waypoint],
    radii: &TierRadiusKm,
) -> (CandidateSet, CorridorStats) {
    if landmarks.is_empty() || waypoints.len() < 2 {
        return (CandidateSet::empty(), CorridorStats::default());
    }

    let path: Vec<Point> = waypoints.iter().map(|w| w.location).collect();

    // Phase 1: bounding box with a generous buffer
    let bounds = BoundingBox::around(&path, radii.max() + PREFILTER_MARGIN_KM);

    let mut stats = CorridorStats {
        total: landmarks.len(),
        ..CorridorStats::default()
    };

    // Phase 2: precise corridor distance for the survivors
    let mut accepted = Vec::new();
    for landmark in landmarks {
        if !bounds.contains(landmark.location) {
            continue;
        }
        stats.prefiltered += 1;

        let distance_km = distance_to_path(landmark.location, &path) / 1000.0;
        if distance_km <= radii.radius(landmark.tier) {
            accepted.push(landmark.clone());
        }
    }
    stats.accepted = accepted.len();

    debug!(
        total = stats.total,
        prefiltered = stats.prefiltered,
        accepted = stats.accepted,
        "corridor filter"
    );

    (CandidateSet::from_landmarks(accepted), stats)
}
