//! Bearing and distance calculations.
//!
//! Uses the haversine formula for distances on Earth's surface, and the
//! spherical cross-track construction for point-to-polyline distance.

use geo::Point;

/// Fixed Earth radius in meters (spherical model).
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Forward great-circle azimuth from `p1` to `p2`, degrees in [0, 360).
///
/// Coincident points have bearing 0 by contract (never an undefined result).
pub fn initial_bearing(p1: Point, p2: Point) -> f64 {
    if p1 == p2 {
        return 0.0;
    }

    let lat1 = p1.y().to_radians();
    let lat2 = p2.y().to_radians();
    let d_lon = (p2.x() - p1.x()).to_radians();

    let y = d_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

    (y.atan2(x).to_degrees() + 360.0) % 360.0
}

/// Great-circle distance between two points in meters.
///
/// Symmetric, and zero for coincident points.
pub fn haversine_distance(p1: Point, p2: Point) -> f64 {
    let lat1 = p1.y().to_radians();
    let lat2 = p2.y().to_radians();
    let d_lat = (p2.y() - p1.y()).to_radians();
    let d_lon = (p2.x() - p1.x()).to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * a.sqrt().min(1.0).asin()
}

/// Minimum great-circle distance in meters from `point` to the polyline
/// through `path`, taking each leg as a straight great-circle segment.
///
/// Legs are treated independently: the cross-track distance to the leg's
/// great circle, clamped to the leg endpoints when the projection falls
/// outside the segment. A point coincident with any vertex has distance 0.
/// A path with fewer than two points has no legs and yields `+INFINITY`.
pub fn distance_to_path(point: Point, path: &[Point]) -> f64 {
    path.windows(2)
        .map(|leg| distance_to_leg(point, leg[0], leg[1]))
        .fold(f64::INFINITY, f64::min)
}

fn distance_to_leg(point: Point, start: Point, end: Point) -> f64 {
    let d13 = haversine_distance(start, point);
    if d13 == 0.0 {
        return 0.0;
    }

    let leg_length = haversine_distance(start, end);
    if leg_length == 0.0 {
        return d13;
    }

    let bearing_to_point = initial_bearing(start, point).to_radians();
    let bearing_to_end = initial_bearing(start, end).to_radians();
    let delta = bearing_to_point - bearing_to_end;

    // Signed cross-track distance from the leg's great circle
    let cross_track = ((d13 / EARTH_RADIUS_M).sin() * delta.sin()).asin() * EARTH_RADIUS_M;

    // Along-track position of the projection, negative when it falls behind
    // the leg start
    let cos_ratio = ((d13 / EARTH_RADIUS_M).cos() / (cross_track / EARTH_RADIUS_M).cos())
        .clamp(-1.0, 1.0);
    let mut along_track = cos_ratio.acos() * EARTH_RADIUS_M;
    if delta.cos() < 0.0 {
        along_track = -along_track;
    }

    if along_track < 0.0 {
        d13
    } else if along_track > leg_length {
        haversine_distance(end, point)
    } else {
        cross_track.abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_haversine_distance_sanity() {
        // Distance from NYC to LA is approximately 3,936 km
        let nyc = Point::new(-74.0060, 40.7128);
        let la = Point::new(-118.2437, 34.0522);

        let dist = haversine_distance(nyc, la);
        assert!((dist - 3_936_000.0).abs() < 50_000.0); // Within 50km
    }

    #[test]
    fn test_haversine_distance_symmetric() {
        let lhr = Point::new(-0.45, 51.47);
        let jfk = Point::new(-73.78, 40.64);

        assert_relative_eq!(
            haversine_distance(lhr, jfk),
            haversine_distance(jfk, lhr)
        );
        assert_relative_eq!(haversine_distance(lhr, jfk), 5_540_510.157, epsilon = 1.0);
        assert_eq!(haversine_distance(lhr, lhr), 0.0);
    }

    #[test]
    fn test_haversine_distance_along_equator() {
        // Ten degrees of longitude at the equator
        let d = haversine_distance(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        assert_relative_eq!(d, 1_111_949.266, epsilon = 1.0);
    }

    #[test]
    fn test_initial_bearing() {
        let origin = Point::new(0.0, 0.0);
        assert_relative_eq!(initial_bearing(origin, Point::new(10.0, 0.0)), 90.0);
        assert_relative_eq!(initial_bearing(Point::new(10.0, 0.0), origin), 270.0);
        assert_relative_eq!(initial_bearing(origin, Point::new(0.0, 10.0)), 0.0);

        let lhr = Point::new(-0.45, 51.47);
        let jfk = Point::new(-73.78, 40.64);
        assert_relative_eq!(initial_bearing(lhr, jfk), 287.9457043, epsilon = 1e-6);
    }

    #[test]
    fn test_initial_bearing_coincident_points() {
        let p = Point::new(-73.78, 40.64);
        assert_eq!(initial_bearing(p, p), 0.0);
    }

    #[test]
    fn test_distance_to_path_perpendicular() {
        // One degree of latitude above the middle of an equatorial leg
        let path = [Point::new(0.0, 0.0), Point::new(10.0, 0.0)];
        let d = distance_to_path(Point::new(5.0, 1.0), &path);
        assert_relative_eq!(d, 111_194.927, epsilon = 1.0);
    }

    #[test]
    fn test_distance_to_path_clamps_to_endpoints() {
        // Projection falls behind the leg start: distance to the start vertex
        let path = [Point::new(0.0, 0.0), Point::new(10.0, 0.0)];
        let behind = Point::new(-3.0, 0.0);
        assert_relative_eq!(
            distance_to_path(behind, &path),
            haversine_distance(behind, path[0])
        );

        // And beyond the end: distance to the end vertex
        let beyond = Point::new(14.0, 0.0);
        assert_relative_eq!(
            distance_to_path(beyond, &path),
            haversine_distance(beyond, path[1])
        );
    }

    #[test]
    fn test_distance_to_path_vertex_is_zero() {
        let path = [
            Point::new(-0.45, 51.47),
            Point::new(-73.78, 40.64),
            Point::new(-118.41, 33.94),
        ];
        for vertex in path {
            assert_eq!(distance_to_path(vertex, &path), 0.0);
        }
    }

    #[test]
    fn test_distance_to_path_picks_nearest_leg() {
        // V-shaped path; the point sits close to the second leg only
        let path = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
        ];
        let near_second_leg = Point::new(10.5, 5.0);
        let d = distance_to_path(near_second_leg, &path);
        assert!(d < 60_000.0, "expected < 60km, got {d}");
    }

    #[test]
    fn test_distance_to_degenerate_path() {
        assert_eq!(distance_to_path(Point::new(0.0, 0.0), &[]), f64::INFINITY);
        assert_eq!(
            distance_to_path(Point::new(0.0, 0.0), &[Point::new(1.0, 1.0)]),
            f64::INFINITY
        );
    }
}
