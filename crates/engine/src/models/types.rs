//! Core data types and enums for the route engine.

use std::sync::Arc;

use geo::Point;

use crate::identifiers::*;

// ============================================================================
// Enums
// ============================================================================

/// Landmark significance class. Controls visual priority and the corridor
/// inclusion radius.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Tier {
    GlobalIcon = 1,
    NationalLandmark = 2,
    LocalInterest = 3,
}

impl Tier {
    pub fn from_index(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::GlobalIcon),
            2 => Some(Self::NationalLandmark),
            3 => Some(Self::LocalInterest),
            _ => None,
        }
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    /// Display label for legends and popups.
    pub fn label(self) -> &'static str {
        match self {
            Self::GlobalIcon => "Global Icon",
            Self::NationalLandmark => "National Landmark",
            Self::LocalInterest => "Local Interest",
        }
    }
}

impl TryFrom<u8> for Tier {
    type Error = EngineError;

    fn try_from(value: u8) -> Result<Self> {
        Self::from_index(value).ok_or(EngineError::InvalidTier(value))
    }
}

/// Compact set of enabled tiers, toggled by the legend controls.
///
/// The default enables tiers 1 and 2 and leaves tier 3 off.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TierSet {
    flags: u8,
}

impl TierSet {
    pub fn empty() -> Self {
        Self { flags: 0 }
    }

    pub fn all() -> Self {
        Self::empty()
            .with(Tier::GlobalIcon)
            .with(Tier::NationalLandmark)
            .with(Tier::LocalInterest)
    }

    pub fn with(mut self, tier: Tier) -> Self {
        self.set(tier, true);
        self
    }

    pub fn set(&mut self, tier: Tier, enabled: bool) {
        if enabled {
            self.flags |= 1 << tier.index();
        } else {
            self.flags &= !(1 << tier.index());
        }
    }

    pub fn contains(&self, tier: Tier) -> bool {
        (self.flags & (1 << tier.index())) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.flags == 0
    }
}

impl Default for TierSet {
    fn default() -> Self {
        Self::empty().with(Tier::GlobalIcon).with(Tier::NationalLandmark)
    }
}

// ============================================================================
// Data Structures
// ============================================================================

/// A stop on the route: a coordinate plus an opaque identifier (airport code).
#[derive(Clone, Debug)]
pub struct Waypoint {
    pub id: WaypointIdentifier,
    pub location: Point,
}

impl Waypoint {
    pub fn new(id: impl Into<WaypointIdentifier>, lat: f64, lon: f64) -> Self {
        Self {
            id: id.into(),
            location: Point::new(lon, lat),
        }
    }

    pub fn lat(&self) -> f64 {
        self.location.y()
    }

    pub fn lon(&self) -> f64 {
        self.location.x()
    }
}

/// A point of interest near a route.
///
/// The id is derived from lat/lon/name, so recomputing a landmark from the
/// same underlying record always yields the same id.
#[derive(Clone, Debug)]
pub struct Landmark {
    pub id: LandmarkIdentifier,
    pub name: Arc<str>,
    pub location: Point,
    pub tier: Tier,

    // Display metadata, opaque to the engine
    pub description: Option<Arc<str>>,
    pub wiki_url: Option<Arc<str>>,
}

impl Landmark {
    pub fn new(name: impl AsRef<str>, lat: f64, lon: f64, tier: Tier) -> Self {
        let name: Arc<str> = name.as_ref().into();
        let id = LandmarkIdentifier::derive(lat, lon, &name);
        Self {
            id,
            name,
            location: Point::new(lon, lat),
            tier,
            description: None,
            wiki_url: None,
        }
    }

    pub fn with_description(mut self, description: impl AsRef<str>) -> Self {
        self.description = Some(description.as_ref().into());
        self
    }

    pub fn with_wiki_url(mut self, url: impl AsRef<str>) -> Self {
        self.wiki_url = Some(url.as_ref().into());
        self
    }

    pub fn lat(&self) -> f64 {
        self.location.y()
    }

    pub fn lon(&self) -> f64 {
        self.location.x()
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("route needs at least 2 waypoints, got {0}")]
    RouteTooShort(usize),

    #[error("consecutive duplicate waypoint at position {0}: {1}")]
    DuplicateWaypoint(usize, WaypointIdentifier),

    #[error("invalid landmark tier: {0}")]
    InvalidTier(u8),
}

pub type Result<T> = std::result::Result<T, EngineError>;
