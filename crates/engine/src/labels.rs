//! Waypoint label placement.
//!
//! Deterministic heuristic for pushing labels away from crowded neighbors:
//! an isolated waypoint labels below itself; otherwise the vector from the
//! neighbor centroid to the waypoint picks the dominant axis, and the label
//! goes on the far side. Exact axis ties fall back to below.

use crate::models::Waypoint;

/// Lat/lon delta under which two waypoints count as neighbors, degrees.
pub const NEIGHBOR_THRESHOLD_DEG: f64 = 0.8;

/// Which side of the waypoint the label (and its pointer notch) sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LabelSide {
    Bottom,
    Top,
    Left,
    Right,
}

/// A label side plus the pixel offset the presentation layer applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LabelPlacement {
    pub offset_x: i32,
    pub offset_y: i32,
    pub side: LabelSide,
}

impl LabelPlacement {
    fn on(side: LabelSide) -> Self {
        let (offset_x, offset_y) = match side {
            LabelSide::Bottom => (0, -5),
            LabelSide::Top => (0, 60),
            LabelSide::Left => (65, 27),
            LabelSide::Right => (-65, 27),
        };
        Self {
            offset_x,
            offset_y,
            side,
        }
    }
}

/// One placement per waypoint, in input order.
pub fn label_placements(waypoints: &[Waypoint]) -> Vec<LabelPlacement> {
    waypoints
        .iter()
        .enumerate()
        .map(|(i, waypoint)| place(waypoint, i, waypoints))
        .collect()
}

fn place(waypoint: &Waypoint, index: usize, all: &[Waypoint]) -> LabelPlacement {
    let neighbors: Vec<&Waypoint> = all
        .iter()
        .enumerate()
        .filter(|(j, other)| {
            *j != index
                && (waypoint.lat() - other.lat()).abs() < NEIGHBOR_THRESHOLD_DEG
                && (waypoint.lon() - other.lon()).abs() < NEIGHBOR_THRESHOLD_DEG
        })
        .map(|(_, other)| other)
        .collect();

    if neighbors.is_empty() {
        return LabelPlacement::on(LabelSide::Bottom);
    }

    let avg_lat = neighbors.iter().map(|n| n.lat()).sum::<f64>() / neighbors.len() as f64;
    let avg_lon = neighbors.iter().map(|n| n.lon()).sum::<f64>() / neighbors.len() as f64;

    // Vector from the neighbor centroid to this waypoint
    let d_lat = waypoint.lat() - avg_lat;
    let d_lon = waypoint.lon() - avg_lon;

    if d_lat.abs() > d_lon.abs() {
        if d_lat > 0.0 {
            LabelPlacement::on(LabelSide::Bottom)
        } else {
            LabelPlacement::on(LabelSide::Top)
        }
    } else if d_lon.abs() > d_lat.abs() {
        if d_lon > 0.0 {
            LabelPlacement::on(LabelSide::Left)
        } else {
            LabelPlacement::on(LabelSide::Right)
        }
    } else {
        LabelPlacement::on(LabelSide::Bottom)
    }
}
