use serde::{Deserialize, Serialize};

use crate::backend::LoadOutcome;
use crate::core::{ElementId, GeometryCache};

/// Lifecycle of a tracked element.
///
/// `Destroyed` has no variant: destroyed elements are dropped from the engine
/// and their ids resolve to nothing afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ElementState {
    /// Created by the binding layer, no source yet.
    #[default]
    Unbound,
    /// Source set; waiting in the pending set for a sweep to find it visible.
    Pending,
    /// Fetch dispatched; waiting for the backend to report its outcome.
    Loading,
    Resolved(LoadOutcome),
}

/// Per-element state owned by the engine on behalf of the binding layer.
#[derive(Debug)]
pub(super) struct TrackedElement<T> {
    pub(super) id: ElementId,
    pub(super) target: T,
    pub(super) source: Option<String>,
    pub(super) cache: GeometryCache,
    pub(super) state: ElementState,
    /// Bumped on every rebind so results of older fetches are discarded.
    pub(super) generation: u64,
}

impl<T> TrackedElement<T> {
    pub(super) fn new(id: ElementId, target: T) -> Self {
        Self {
            id,
            target,
            source: None,
            cache: GeometryCache::default(),
            state: ElementState::Unbound,
            generation: 0,
        }
    }

    /// Whether a new source replaces state left by an earlier one.
    pub(super) fn is_rebind(&self) -> bool {
        self.state != ElementState::Unbound
    }
}
