//! Antimeridian-aware bounding boxes.
//!
//! Wraparound is represented as `east < west` plus an explicit flag; a
//! wrapped box contains a longitude when it falls outside the excluded
//! middle band rather than inside `[west, east]`.

use geo::Point;

/// Kilometers per degree of latitude (and of longitude at the equator).
const KM_PER_DEGREE: f64 = 111.0;

/// A lat/lon rectangle, possibly wrapped across the antimeridian.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
    pub wraps: bool,
}

impl BoundingBox {
    /// Build a box from raw edges, e.g. a viewport rectangle reported by the
    /// map layer. `east < west` signals antimeridian wraparound.
    pub fn new(north: f64, south: f64, east: f64, west: f64) -> Self {
        Self {
            north,
            south,
            east,
            west,
            wraps: east < west,
        }
    }

    /// Compute the box covering `points`, widened by `buffer_km` on every
    /// side.
    ///
    /// Latitude is widened by `buffer_km / 111`; longitude by
    /// `buffer_km / (111 * cos(max_abs_lat))` so the buffer stays
    /// conservative toward the poles. When the raw longitude span exceeds
    /// 180 degrees the extremes are taken in a +360-shifted frame, so the
    /// box hugs the antimeridian instead of spanning the globe.
    ///
    /// `points` must be non-empty.
    pub fn around(points: &[Point], buffer_km: f64) -> Self {
        debug_assert!(!points.is_empty());

        let mut south = f64::INFINITY;
        let mut north = f64::NEG_INFINITY;
        let mut min_lon = f64::INFINITY;
        let mut max_lon = f64::NEG_INFINITY;
        for p in points {
            south = south.min(p.y());
            north = north.max(p.y());
            min_lon = min_lon.min(p.x());
            max_lon = max_lon.max(p.x());
        }

        // A raw span beyond 180 degrees means the short way round crosses
        // the antimeridian; recompute the extremes with negative longitudes
        // shifted into [180, 360)
        if max_lon - min_lon > 180.0 {
            min_lon = f64::INFINITY;
            max_lon = f64::NEG_INFINITY;
            for p in points {
                let lon = if p.x() < 0.0 { p.x() + 360.0 } else { p.x() };
                min_lon = min_lon.min(lon);
                max_lon = max_lon.max(lon);
            }
        }

        let lat_pad = buffer_km / KM_PER_DEGREE;
        let max_abs_lat = north.abs().max(south.abs());
        let lon_pad = buffer_km / (KM_PER_DEGREE * max_abs_lat.to_radians().cos().max(1e-6));

        let north = (north + lat_pad).min(90.0);
        let south = (south - lat_pad).max(-90.0);
        let west = min_lon - lon_pad;
        let east = max_lon + lon_pad;

        if east - west >= 360.0 {
            // Buffer swallowed every longitude
            return Self {
                north,
                south,
                east: 180.0,
                west: -180.0,
                wraps: false,
            };
        }

        let west = normalize_lon_west(west);
        let east = normalize_lon_east(east);
        Self {
            north,
            south,
            east,
            west,
            wraps: east < west,
        }
    }

    /// Rectangle containment test. For a wrapped box the longitude check is
    /// "outside the excluded middle band": `lon >= west || lon <= east`.
    pub fn contains(&self, point: Point) -> bool {
        let lat = point.y();
        let lon = point.x();
        if lat < self.south || lat > self.north {
            return false;
        }
        if self.wraps {
            lon >= self.west || lon <= self.east
        } else {
            lon >= self.west && lon <= self.east
        }
    }
}

/// Map into [-180, 180), keeping a west edge at the antimeridian as -180.
fn normalize_lon_west(lon: f64) -> f64 {
    (lon + 180.0).rem_euclid(360.0) - 180.0
}

/// Map into (-180, 180], keeping an east edge at the antimeridian as 180.
fn normalize_lon_east(lon: f64) -> f64 {
    let l = (lon + 180.0).rem_euclid(360.0) - 180.0;
    if l == -180.0 {
        180.0
    } else {
        l
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_simple_box_contains() {
        let points = [Point::new(-0.45, 51.47), Point::new(-73.78, 40.64)];
        let bounds = BoundingBox::around(&points, 0.0);

        assert!(!bounds.wraps);
        assert!(bounds.contains(Point::new(-30.0, 45.0)));
        assert!(!bounds.contains(Point::new(-30.0, 60.0))); // north of it
        assert!(!bounds.contains(Point::new(10.0, 45.0))); // east of it
    }

    #[test]
    fn test_buffer_widens_edges() {
        let points = [Point::new(0.0, 0.0), Point::new(10.0, 0.0)];
        let bounds = BoundingBox::around(&points, 111.0);

        assert_relative_eq!(bounds.north, 1.0);
        assert_relative_eq!(bounds.south, -1.0);
        assert_relative_eq!(bounds.west, -1.0);
        assert_relative_eq!(bounds.east, 11.0);
    }

    #[test]
    fn test_lon_buffer_grows_with_latitude() {
        let equator = BoundingBox::around(&[Point::new(0.0, 0.0), Point::new(1.0, 0.0)], 111.0);
        let arctic = BoundingBox::around(&[Point::new(0.0, 70.0), Point::new(1.0, 70.0)], 111.0);

        let equator_span = equator.east - equator.west;
        let arctic_span = arctic.east - arctic.west;
        assert!(arctic_span > equator_span * 2.0);
    }

    #[test]
    fn test_lat_clamped_at_poles() {
        let bounds = BoundingBox::around(&[Point::new(0.0, 89.0)], 500.0);
        assert_eq!(bounds.north, 90.0);
    }

    #[test]
    fn test_wraparound_route() {
        // Tokyo to San Francisco crosses the antimeridian
        let points = [Point::new(139.78, 35.55), Point::new(-122.38, 37.62)];
        let bounds = BoundingBox::around(&points, 100.0);

        assert!(bounds.wraps);
        assert!(bounds.east < bounds.west);
        assert!(bounds.contains(Point::new(179.9, 37.0)));
        assert!(bounds.contains(Point::new(-179.9, 37.0)));
        assert!(bounds.contains(Point::new(150.0, 36.0)));
        // The excluded middle band: Europe is nowhere near this corridor
        assert!(!bounds.contains(Point::new(0.0, 37.0)));
    }

    #[test]
    fn test_buffer_pushes_box_across_antimeridian() {
        // Near the date line but not across it; a generous buffer wraps it
        let points = [Point::new(175.0, 0.0), Point::new(179.0, 0.0)];
        let bounds = BoundingBox::around(&points, 333.0);

        assert!(bounds.wraps);
        assert!(bounds.contains(Point::new(-179.0, 0.0)));
        assert!(bounds.contains(Point::new(175.0, 0.0)));
        assert!(!bounds.contains(Point::new(0.0, 0.0)));
    }

    #[test]
    fn test_huge_buffer_covers_all_longitudes() {
        let points = [Point::new(0.0, 0.0), Point::new(10.0, 0.0)];
        let bounds = BoundingBox::around(&points, 30_000.0);

        assert!(!bounds.wraps);
        assert_eq!(bounds.west, -180.0);
        assert_eq!(bounds.east, 180.0);
        assert!(bounds.contains(Point::new(179.0, 0.0)));
    }

    #[test]
    fn test_viewport_constructor_flags_wrap() {
        let plain = BoundingBox::new(50.0, 30.0, 20.0, -20.0);
        assert!(!plain.wraps);

        let wrapped = BoundingBox::new(50.0, 30.0, -170.0, 170.0);
        assert!(wrapped.wraps);
        assert!(wrapped.contains(Point::new(175.0, 40.0)));
        assert!(!wrapped.contains(Point::new(0.0, 40.0)));
    }
}
