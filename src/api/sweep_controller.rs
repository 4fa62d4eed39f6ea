use tracing::{debug, trace};

use crate::backend::{Backend, LoadRequest, LoadTicket};
use crate::core::{ElementId, is_in_load_zone};

use super::{ElementState, LazyLoadEngine, tracked_element::TrackedElement};

impl<B: Backend> LazyLoadEngine<B> {
    /// Runs one sweep immediately, bypassing the throttle.
    ///
    /// Returns the number of elements promoted to loading. Does nothing while
    /// the engine is idle.
    pub fn sweep_now(&mut self) -> usize {
        if !self.runtime.listening {
            return 0;
        }
        self.sweep()
    }

    /// Evaluates every pending element in registration order and dispatches
    /// loads for the ones inside the load zone.
    pub(super) fn sweep(&mut self) -> usize {
        self.viewport = self.capture_viewport();
        self.stats.sweeps += 1;

        let viewport = self.viewport;
        let offset = self.config.offset;
        let mut dispatched = 0;
        let mut index = 0;

        while let Some(&id) = self.pending.get_index(index) {
            let Some(element) = self.elements.get_mut(&id) else {
                // Entry outlived its element; drop it without advancing.
                self.pending.shift_remove_index(index);
                continue;
            };

            let TrackedElement { cache, target, .. } = element;
            let backend = &self.backend;
            let mut measured = false;
            let visible = is_in_load_zone(cache, offset, viewport, || {
                measured = true;
                backend.bounding_rect(target)
            });

            self.stats.evaluations += 1;
            if measured {
                self.stats.rect_reads += 1;
            } else {
                self.stats.rect_cache_hits += 1;
            }

            if !visible {
                index += 1;
                continue;
            }

            // The next element shifts into `index`, so it is not advanced.
            self.pending.shift_remove_index(index);
            self.dispatch_load(id);
            dispatched += 1;
        }

        trace!(
            dispatched,
            remaining = self.pending.len(),
            scroll_x = viewport.scroll_x,
            scroll_y = viewport.scroll_y,
            "sweep finished"
        );

        if self.runtime.listening && self.pending.is_empty() {
            self.stop();
        }
        dispatched
    }

    fn dispatch_load(&mut self, id: ElementId) {
        let Some(element) = self.elements.get_mut(&id) else {
            return;
        };
        let Some(url) = element.source.clone() else {
            return;
        };

        element.state = ElementState::Loading;
        if let Some(class) = self.config.error_class.as_deref() {
            self.backend.remove_marker(&element.target, class);
        }
        if let Some(class) = self.config.success_class.as_deref() {
            self.backend.remove_marker(&element.target, class);
        }

        let request = LoadRequest {
            ticket: LoadTicket {
                element: id,
                generation: element.generation,
            },
            url,
        };
        self.stats.loads_dispatched += 1;
        debug!(%id, url = %request.url, "dispatching asset fetch");
        self.backend.fetch(request);
    }
}
