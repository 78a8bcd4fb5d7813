//! Per-leg and whole-route distance/duration summaries.

use crate::flight::duration::estimate_duration;
use crate::geodesy::haversine_distance;
use crate::identifiers::WaypointIdentifier;
use crate::models::Route;

/// Distance and estimated duration for one leg.
#[derive(Clone, Debug)]
pub struct LegSummary {
    pub origin: WaypointIdentifier,
    pub dest: WaypointIdentifier,
    pub distance_meters: f64,
    pub duration_hours: f64,
}

/// Summary of a whole route, for the flight-info panel.
#[derive(Clone, Debug)]
pub struct RouteSummary {
    pub legs: Vec<LegSummary>,
    pub total_distance_meters: f64,
    pub total_duration_hours: f64,
}

impl RouteSummary {
    pub fn of(route: &Route) -> Self {
        let mut legs = Vec::with_capacity(route.waypoints().len() - 1);
        let mut total_distance_meters = 0.0;
        let mut total_duration_hours = 0.0;

        for (origin, dest) in route.legs() {
            let distance_meters = haversine_distance(origin.location, dest.location);
            let duration_hours = estimate_duration(origin.location, dest.location, distance_meters);

            total_distance_meters += distance_meters;
            total_duration_hours += duration_hours;
            legs.push(LegSummary {
                origin: origin.id.clone(),
                dest: dest.id.clone(),
                distance_meters,
                duration_hours,
            });
        }

        Self {
            legs,
            total_distance_meters,
            total_duration_hours,
        }
    }
}
