use indexmap::{IndexMap, IndexSet};

use crate::backend::Backend;
use crate::core::{ElementId, ViewportSnapshot};

use super::{
    ElementState, EngineStats, LazyLoadConfig, LoadCallbacks,
    scheduler_runtime::SchedulerRuntime, tracked_element::TrackedElement,
};

/// Visibility-scheduling facade consumed by binding layers.
///
/// `LazyLoadEngine` owns the tracked elements, the ordered pending set, the
/// listener lifecycle and the throttled sweep. One instance serves one
/// application context; every element created through it shares its config.
pub struct LazyLoadEngine<B: Backend> {
    pub(super) backend: B,
    pub(super) config: LazyLoadConfig,
    pub(super) callbacks: LoadCallbacks,
    pub(super) elements: IndexMap<ElementId, TrackedElement<B::Element>>,
    pub(super) pending: IndexSet<ElementId>,
    pub(super) next_element_id: u64,
    pub(super) viewport: ViewportSnapshot,
    pub(super) runtime: SchedulerRuntime,
    pub(super) stats: EngineStats,
}

impl<B: Backend> LazyLoadEngine<B> {
    #[must_use]
    pub fn config(&self) -> &LazyLoadConfig {
        &self.config
    }

    /// Whether the engine is in its listening phase (startup grace included).
    #[must_use]
    pub fn is_listening(&self) -> bool {
        self.runtime.listening
    }

    /// Whether host listeners are currently attached.
    #[must_use]
    pub fn listeners_attached(&self) -> bool {
        !self.runtime.attached.is_empty()
    }

    /// Pending element ids in registration order.
    #[must_use]
    pub fn pending_ids(&self) -> Vec<ElementId> {
        self.pending.iter().copied().collect()
    }

    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_pending(&self, id: ElementId) -> bool {
        self.pending.contains(&id)
    }

    /// State of a live element; `None` once destroyed.
    #[must_use]
    pub fn element_state(&self, id: ElementId) -> Option<ElementState> {
        self.elements.get(&id).map(|element| element.state)
    }

    #[must_use]
    pub fn element_source(&self, id: ElementId) -> Option<&str> {
        self.elements
            .get(&id)
            .and_then(|element| element.source.as_deref())
    }

    #[must_use]
    pub fn element_target(&self, id: ElementId) -> Option<&B::Element> {
        self.elements.get(&id).map(|element| &element.target)
    }

    #[must_use]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Last viewport snapshot used by a sweep or geometry refresh.
    #[must_use]
    pub fn viewport_snapshot(&self) -> ViewportSnapshot {
        self.viewport
    }

    #[must_use]
    pub fn stats(&self) -> EngineStats {
        self.stats
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    #[must_use]
    pub fn into_backend(self) -> B {
        self.backend
    }
}
