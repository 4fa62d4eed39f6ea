use tracing::{debug, trace};

use crate::backend::{AssetPresentation, Backend, LoadOutcome, LoadTicket};

use super::{ElementState, LazyLoadEngine};

impl<B: Backend> LazyLoadEngine<B> {
    /// Reports the outcome of a fetch previously handed to [`Backend::fetch`].
    ///
    /// On success the asset is presented according to the node kind and the
    /// success marker applied; on error any rendered asset is cleared and the
    /// error marker applied. The matching user callback runs last.
    ///
    /// Results for destroyed elements, or for a source replaced by a rebind
    /// since dispatch, are ignored and `false` is returned.
    pub fn complete_load(&mut self, ticket: LoadTicket, outcome: LoadOutcome) -> bool {
        let id = ticket.element;
        let Some(element) = self.elements.get_mut(&id) else {
            self.stats.stale_resolutions += 1;
            trace!(%id, ?outcome, "load result for destroyed element ignored");
            return false;
        };
        if element.generation != ticket.generation || element.state != ElementState::Loading {
            self.stats.stale_resolutions += 1;
            trace!(
                %id,
                ?outcome,
                ticket_generation = ticket.generation,
                current_generation = element.generation,
                "stale load result ignored"
            );
            return false;
        }

        match outcome {
            LoadOutcome::Success => {
                let kind = self.backend.node_kind(&element.target);
                let url = element.source.as_deref().unwrap_or_default();
                self.backend
                    .apply_asset(&element.target, AssetPresentation::for_loaded(kind, url));
                if let Some(class) = self.config.success_class.as_deref() {
                    self.backend.add_marker(&element.target, class);
                }
                element.state = ElementState::Resolved(LoadOutcome::Success);
                self.stats.loads_succeeded += 1;
                debug!(%id, ?kind, "asset loaded");
                self.callbacks.notify_success(id);
            }
            LoadOutcome::Error => {
                self.backend
                    .apply_asset(&element.target, AssetPresentation::Cleared);
                if let Some(class) = self.config.error_class.as_deref() {
                    self.backend.add_marker(&element.target, class);
                }
                element.state = ElementState::Resolved(LoadOutcome::Error);
                self.stats.loads_failed += 1;
                debug!(%id, source = ?element.source, "asset failed to load");
                self.callbacks.notify_error(id);
            }
        }
        true
    }
}
