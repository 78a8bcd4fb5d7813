//! Spherical-geometry primitives.
//!
//! Everything here is a pure function over `geo::Point` coordinates
//! (x = longitude, y = latitude, degrees) on a fixed-radius sphere.

pub mod bounds;
pub mod queries;

pub use bounds::BoundingBox;
pub use queries::{distance_to_path, haversine_distance, initial_bearing, EARTH_RADIUS_M};
