use tracing::{debug, trace};

use crate::backend::{AssetPresentation, Backend};
use crate::core::{ElementId, Timestamp};

use super::{ElementState, LazyLoadEngine, tracked_element::TrackedElement};

impl<B: Backend> LazyLoadEngine<B> {
    /// Starts tracking `target` and returns its identity.
    ///
    /// The element stays unbound (and out of the pending set) until a source
    /// is set.
    pub fn create_element(&mut self, target: B::Element) -> ElementId {
        let id = ElementId::from_raw(self.next_element_id);
        self.next_element_id += 1;
        self.elements.insert(id, TrackedElement::new(id, target));
        trace!(%id, "tracked element created");
        id
    }

    /// Binds `source` to an element and queues it for visibility checks.
    ///
    /// Setting a source on an element that already went through a load cycle
    /// is a rebind: cached geometry, markers and any rendered asset are cleared
    /// first, and an in-flight fetch for the previous source is disowned.
    ///
    /// Returns `false` (and does nothing) for an empty source or an id that
    /// no longer exists.
    pub fn set_source(&mut self, id: ElementId, source: &str, now: Timestamp) -> bool {
        if source.is_empty() {
            trace!(%id, "ignoring empty source");
            return false;
        }
        let Some(element) = self.elements.get_mut(&id) else {
            trace!(%id, "set_source on destroyed element ignored");
            return false;
        };

        if element.is_rebind() {
            debug!(%id, previous_state = ?element.state, "rebinding element source");
            element.cache.clear();
            element.generation += 1;
            if let Some(class) = self.config.success_class.as_deref() {
                self.backend.remove_marker(&element.target, class);
            }
            if let Some(class) = self.config.error_class.as_deref() {
                self.backend.remove_marker(&element.target, class);
            }
            self.backend
                .apply_asset(&element.target, AssetPresentation::Cleared);
        }

        element.source = Some(source.to_owned());
        element.state = ElementState::Pending;
        self.register(id, now);
        true
    }

    /// Stops tracking an element. Idempotent; returns `true` only on the call
    /// that actually removed it.
    ///
    /// A fetch already dispatched for the element is not cancelled, its result
    /// is discarded when it arrives.
    pub fn destroy(&mut self, id: ElementId) -> bool {
        let Some(mut element) = self.elements.shift_remove(&id) else {
            trace!(%id, "destroy on unknown element ignored");
            return false;
        };
        element.cache.clear();

        let was_pending = self.pending.shift_remove(&id);
        trace!(%id, was_pending, state = ?element.state, "tracked element destroyed");

        if self.runtime.listening && self.pending.is_empty() {
            self.stop();
        }
        true
    }

    /// Adds an element to the pending set and makes sure a sweep will see it.
    pub(super) fn register(&mut self, id: ElementId, now: Timestamp) {
        let inserted = self.pending.insert(id);
        trace!(%id, inserted, pending = self.pending.len(), "element registered");

        if !self.runtime.listening {
            self.start(now);
        } else {
            self.schedule_kick(now);
        }
    }
}
