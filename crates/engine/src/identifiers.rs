//! Identifiers for waypoints and landmarks.
//!
//! Both are thin `Arc<str>` newtypes, cheap to clone and to use as map
//! keys. Waypoint ids are opaque caller-supplied codes; landmark ids are
//! derived from the underlying record so recomputation is idempotent.

use std::fmt;
use std::sync::Arc;

/// Waypoint identifier, typically an airport code ("LHR", "JFK").
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct WaypointIdentifier(Arc<str>);

impl WaypointIdentifier {
    pub fn new(s: impl AsRef<str>) -> Self {
        Self(s.as_ref().into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Stable landmark identifier.
///
/// Derived from the record's coordinates and name, never assigned, so the
/// same record always carries the same id across route changes and
/// recomputations.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LandmarkIdentifier(Arc<str>);

impl LandmarkIdentifier {
    pub fn new(s: impl AsRef<str>) -> Self {
        Self(s.as_ref().into())
    }

    /// Derive the id for a landmark record.
    pub fn derive(lat: f64, lon: f64, name: &str) -> Self {
        Self::new(format!("{lat}_{lon}_{name}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

macro_rules! impl_identifier_conversions {
    ($name:ident) => {
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self::new(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::new(s)
            }
        }

        // Arc<str> has no serde impls without serde's "rc" feature, so
        // round-trip through the string form instead
        #[cfg(feature = "serde")]
        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(
                &self,
                serializer: S,
            ) -> std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(
                deserializer: D,
            ) -> std::result::Result<Self, D::Error> {
                <String as serde::Deserialize>::deserialize(deserializer).map(Self::new)
            }
        }
    };
}

impl_identifier_conversions!(WaypointIdentifier);
impl_identifier_conversions!(LandmarkIdentifier);
