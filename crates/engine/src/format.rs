//! Display formatting for distances and durations.

/// A distance rendered in the three unit systems the UI offers.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceText {
    pub metric: String,
    pub imperial: String,
    pub nautical: String,
}

const METERS_PER_MILE_INV: f64 = 0.000_621_371;
const FEET_PER_METER: f64 = 3.28084;
const METERS_PER_NM_INV: f64 = 0.000_539_957;

/// Format a distance in metric, imperial and nautical units.
///
/// Small distances use m/ft; larger ones km/miles/NM with precision that
/// shrinks as the magnitude grows.
pub fn format_distance(distance_meters: f64) -> DistanceText {
    let dist_km = distance_meters / 1000.0;
    let metric = if dist_km < 1.0 {
        format!("{} m", distance_meters.round() as i64)
    } else {
        format!("{} km", format_value(dist_km))
    };

    let dist_miles = distance_meters * METERS_PER_MILE_INV;
    let imperial = if dist_miles < 1.0 {
        format!("{} ft", (distance_meters * FEET_PER_METER).round() as i64)
    } else {
        format!("{} miles", format_value(dist_miles))
    };

    let dist_nm = distance_meters * METERS_PER_NM_INV;
    let nautical = format!("{} NM", format_value(dist_nm));

    DistanceText {
        metric,
        imperial,
        nautical,
    }
}

/// Zero-padded `"HH:MM"` from fractional hours.
pub fn format_duration(hours: f64) -> String {
    let total_minutes = (hours * 60.0).round() as i64;
    format!("{:02}:{:02}", total_minutes / 60, total_minutes % 60)
}

/// Magnitude-dependent precision: integers from 100 up, one decimal from 10,
/// two below that.
fn format_value(value: f64) -> String {
    if value >= 100.0 {
        format!("{}", value.round() as i64)
    } else if value >= 10.0 {
        format!("{:.1}", value)
    } else {
        format!("{:.2}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_distance_small() {
        let text = format_distance(850.0);
        assert_eq!(text.metric, "850 m");
        assert_eq!(text.imperial, "2789 ft");
        assert_eq!(text.nautical, "0.46 NM");
    }

    #[test]
    fn test_format_distance_medium() {
        let text = format_distance(42_000.0);
        assert_eq!(text.metric, "42.0 km");
        assert_eq!(text.imperial, "26.1 miles");
        assert_eq!(text.nautical, "22.7 NM");
    }

    #[test]
    fn test_format_distance_long_haul() {
        let text = format_distance(5_540_510.0);
        assert_eq!(text.metric, "5541 km");
        assert_eq!(text.imperial, "3443 miles");
        assert_eq!(text.nautical, "2992 NM");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0.0), "00:00");
        assert_eq!(format_duration(9.138), "09:08");
        assert_eq!(format_duration(26.5), "26:30");
        // Rounding carries into the hour instead of printing :60
        assert_eq!(format_duration(1.9999), "02:00");
    }
}
