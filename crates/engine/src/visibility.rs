//! Viewport visibility diffing.
//!
//! Keeps the rendered marker set minimal as the viewport and tier filters
//! change. The engine owns only the `id -> entry` map; the caller owns the
//! actual markers and applies each delta before the next update. Calls must
//! be serialized by a single logical writer.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::corridor::CandidateSet;
use crate::geodesy::BoundingBox;
use crate::identifiers::LandmarkIdentifier;
use crate::models::{Landmark, TierSet};

/// Minimal change set between two visibility states.
///
/// `to_add` preserves candidate-set order so marker creation is
/// deterministic.
#[derive(Clone, Debug, Default)]
pub struct VisibilityDelta {
    pub to_add: Vec<Arc<Landmark>>,
    pub to_remove: Vec<LandmarkIdentifier>,
}

impl VisibilityDelta {
    pub fn is_empty(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }
}

/// The set of landmarks currently rendered, always a subset of the last
/// candidate set passed to [`update`](VisibilitySet::update).
#[derive(Debug, Default)]
pub struct VisibilitySet {
    active: HashMap<LandmarkIdentifier, Arc<Landmark>>,
}

impl VisibilitySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn is_active(&self, id: &LandmarkIdentifier) -> bool {
        self.active.contains_key(id)
    }

    /// Recompute the desired visible set and diff it against the active one.
    ///
    /// Desired membership: candidate, tier enabled, inside the viewport. A
    /// `None` viewport (transiently unavailable during layout changes)
    /// renders nothing. After this returns, the active set equals the
    /// desired set exactly; a second call with unchanged inputs yields an
    /// empty delta.
    pub fn update(
        &mut self,
        candidates: &CandidateSet,
        viewport: Option<&BoundingBox>,
        tiers: TierSet,
    ) -> VisibilityDelta {
        let mut desired: HashMap<LandmarkIdentifier, Arc<Landmark>> =
            HashMap::with_capacity(self.active.len());
        let mut to_add = Vec::new();

        if let Some(bounds) = viewport {
            for landmark in candidates.iter() {
                if !tiers.contains(landmark.tier) || !bounds.contains(landmark.location) {
                    continue;
                }
                let first_seen = desired
                    .insert(landmark.id.clone(), landmark.clone())
                    .is_none();
                if first_seen && !self.active.contains_key(&landmark.id) {
                    to_add.push(landmark.clone());
                }
            }
        }

        let to_remove: Vec<LandmarkIdentifier> = self
            .active
            .keys()
            .filter(|id| !desired.contains_key(id))
            .cloned()
            .collect();

        self.active = desired;

        debug!(
            added = to_add.len(),
            removed = to_remove.len(),
            active = self.active.len(),
            "visibility update"
        );

        VisibilityDelta { to_add, to_remove }
    }

    /// Drop every active entry, e.g. when the route is cleared. Returns the
    /// ids the caller must destroy.
    pub fn clear(&mut self) -> Vec<LandmarkIdentifier> {
        self.active.drain().map(|(id, _)| id).collect()
    }
}
