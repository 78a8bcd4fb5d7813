//! Empirical flight-duration model.
//!
//! Estimates block time from distance, prevailing-wind belts and route
//! factors. The model is asymmetric on purpose: reversing origin and
//! destination flips the wind term, so an eastbound leg is generally faster
//! than the same leg flown westbound.

use geo::Point;

use crate::geodesy::initial_bearing;

/// Westerly jet-stream cap in km/h, before scaling.
const MAX_WIND_KMH: f64 = 200.0;

/// Minimum effective ground speed in km/h, a floor against degenerate
/// inputs.
const MIN_SPEED_KMH: f64 = 200.0;

/// Estimate flight duration in hours for a single leg.
///
/// `distance_meters` is the leg's great-circle distance; it is a parameter
/// rather than recomputed here so the caller can display the same figure it
/// feeds the model.
pub fn estimate_duration(origin: Point, dest: Point, distance_meters: f64) -> f64 {
    let bearing = initial_bearing(origin, dest);
    let distance_km = distance_meters / 1000.0;

    // Route efficiency: long hauls fly closer to the great circle
    let route_efficiency = if distance_km >= 12_000.0 {
        1.03
    } else if distance_km >= 6_000.0 {
        1.05
    } else if distance_km >= 3_000.0 {
        1.08
    } else {
        1.10
    };
    let effective_distance_km = distance_km * route_efficiency;

    // Base cruise speed by stage length
    let base_speed = if distance_km < 500.0 {
        650.0
    } else if distance_km < 2_000.0 {
        800.0
    } else if distance_km < 6_000.0 {
        880.0
    } else {
        900.0
    };

    // Wind direction: +1 full tailwind eastbound, -1 full headwind westbound
    let direction_factor = ((bearing - 90.0).to_radians()).cos();

    // How much of the wind belt a flight of this length actually samples;
    // ultra-long-haul routes are dampened (polar routings)
    let wind_scale = if distance_km < 300.0 {
        0.15
    } else if distance_km < 2_000.0 {
        0.60
    } else if distance_km < 6_000.0 {
        0.90
    } else if distance_km < 12_000.0 {
        1.00
    } else {
        0.35
    };

    // Jet streams live at mid latitudes; fade out below ~10 degrees
    let mid_lat = (origin.y().abs() + dest.y().abs()) / 2.0;
    let lat_factor = ((mid_lat - 10.0) / 40.0).clamp(0.0, 1.0);

    // Northern-hemisphere westerlies run slightly stronger
    let hemisphere_factor = if origin.y() > 0.0 && dest.y() > 0.0 {
        1.08
    } else if origin.y() < 0.0 && dest.y() < 0.0 {
        0.92
    } else {
        1.0
    };

    let max_wind = MAX_WIND_KMH * wind_scale * lat_factor * hemisphere_factor;
    let wind_component = direction_factor * max_wind;

    let effective_speed = (base_speed + wind_component).max(MIN_SPEED_KMH);
    let flight_hours = effective_distance_km / effective_speed;

    // Taxi, climb and descent overhead, by raw stage length
    let overhead_hours = if distance_km < 50.0 {
        0.10
    } else if distance_km < 300.0 {
        0.50
    } else if distance_km < 2_000.0 {
        0.50
    } else if distance_km < 6_000.0 {
        0.75
    } else {
        1.00
    };

    flight_hours + overhead_hours
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geodesy::haversine_distance;
    use approx::assert_relative_eq;

    #[test]
    fn test_transatlantic_regression() {
        // LHR -> JFK: 5540 km band means efficiency 1.08 and base speed 880,
        // flown into the North Atlantic headwind
        let lhr = Point::new(-0.45, 51.47);
        let jfk = Point::new(-73.78, 40.64);

        let westbound = estimate_duration(lhr, jfk, 5_540_000.0);
        assert_relative_eq!(westbound, 9.138082605827, epsilon = 1e-9);

        let eastbound = estimate_duration(jfk, lhr, 5_540_000.0);
        assert_relative_eq!(eastbound, 6.634062531939, epsilon = 1e-9);
    }

    #[test]
    fn test_eastbound_beats_westbound_at_mid_latitudes() {
        let a = Point::new(0.0, 40.0);
        let b = Point::new(10.0, 40.0);
        let d = haversine_distance(a, b);

        let east = estimate_duration(a, b, d);
        let west = estimate_duration(b, a, d);
        assert!(east < west, "eastbound {east} should beat westbound {west}");
        assert_relative_eq!(east, 1.543970929278, epsilon = 1e-9);
        assert_relative_eq!(west, 1.832223050550, epsilon = 1e-9);
    }

    #[test]
    fn test_equatorial_legs_have_no_wind() {
        // lat_factor is zero at the equator, so reversal ties exactly
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 0.0);
        let d = haversine_distance(a, b);

        assert_eq!(estimate_duration(a, b, d), estimate_duration(b, a, d));
    }

    #[test]
    fn test_short_hop_overhead() {
        // 40 km at the equator: base 650, efficiency 1.10, overhead 0.10,
        // no wind
        let hours = estimate_duration(Point::new(0.0, 0.0), Point::new(0.36, 0.0), 40_000.0);
        assert_relative_eq!(hours, 40.0 * 1.10 / 650.0 + 0.10, epsilon = 1e-12);
    }

    #[test]
    fn test_duration_band_monotonic_in_distance() {
        // Within a single band, more distance means more time
        let a = Point::new(0.0, 45.0);
        let b = Point::new(10.0, 45.0);
        assert!(
            estimate_duration(a, b, 2_500_000.0) < estimate_duration(a, b, 3_500_000.0)
        );
    }
}
