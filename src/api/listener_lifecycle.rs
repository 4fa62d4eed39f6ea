use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::backend::{Backend, ListenerHandler, ViewportEvent};
use crate::core::{Timestamp, ViewportSnapshot};

use super::{
    LazyLoadEngine,
    scheduler_runtime::{DEFERRED_TICK_MS, listener_bindings},
};

impl<B: Backend> LazyLoadEngine<B> {
    /// Routes a host event to the throttled handlers bound to it.
    ///
    /// Timers due at `now` fire first. Events arriving while no listener is
    /// attached, or from a target nothing is bound to, are ignored. When a
    /// resize drives both handlers the geometry refresh runs before the sweep.
    pub fn handle_event(&mut self, event: ViewportEvent, now: Timestamp) {
        self.advance(now);

        let handlers: SmallVec<[ListenerHandler; 2]> = self
            .runtime
            .attached
            .iter()
            .filter(|binding| binding.matches(event))
            .map(|binding| binding.handler)
            .collect();
        if handlers.is_empty() {
            trace!(?event, "event without bound listener ignored");
            return;
        }

        if handlers.contains(&ListenerHandler::GeometryRefresh)
            && self.runtime.geometry_throttle.call(now, ()).is_some()
        {
            self.refresh_geometry();
        }
        if handlers.contains(&ListenerHandler::Sweep)
            && self.runtime.sweep_throttle.call(now, ()).is_some()
        {
            self.sweep();
        }
    }

    /// Enters the listening phase.
    ///
    /// Listeners are not attached yet: a deferred tick first lets the caller
    /// finish its synchronous setup, runs one sweep, then attaches them.
    pub(super) fn start(&mut self, now: Timestamp) {
        self.runtime.listening = true;
        self.runtime.startup_due = Some(now.saturating_add_millis(DEFERRED_TICK_MS));
        debug!(
            pending = self.pending.len(),
            due = ?self.runtime.startup_due,
            "scheduler start requested"
        );
    }

    pub(super) fn finish_startup(&mut self) {
        self.runtime.startup_due = None;
        if !self.runtime.listening {
            return;
        }

        self.refresh_geometry();
        self.sweep();
        if self.runtime.listening {
            self.attach_listeners();
        }
    }

    /// Leaves the listening phase: timers are dropped and listeners detached.
    pub(super) fn stop(&mut self) {
        self.runtime.listening = false;
        self.runtime.clear_timers();
        self.detach_listeners();
        debug!("scheduler stopped");
    }

    /// Requests one near-immediate sweep for an element registered while listening.
    pub(super) fn schedule_kick(&mut self, now: Timestamp) {
        if self.runtime.startup_due.is_some() || self.runtime.kick_due.is_some() {
            return;
        }
        self.runtime.kick_due = Some(now.saturating_add_millis(DEFERRED_TICK_MS));
    }

    /// Re-reads viewport dimensions; scroll offsets are refreshed per sweep.
    pub(super) fn refresh_geometry(&mut self) {
        let size = self.backend.viewport_size();
        self.viewport = self.viewport.with_size(size);
        self.stats.geometry_refreshes += 1;
        trace!(width = size.width, height = size.height, "viewport geometry refreshed");
    }

    /// Current viewport snapshot with the live scroll offset of the scroll target.
    pub(super) fn capture_viewport(&self) -> ViewportSnapshot {
        let scroll = self.backend.scroll_offset(self.config.scroll_target());
        self.viewport.with_scroll(scroll)
    }

    fn attach_listeners(&mut self) {
        if !self.runtime.attached.is_empty() {
            return;
        }
        for binding in listener_bindings(self.config.scroll_target()) {
            self.backend.attach_listener(binding);
            self.runtime.attached.push(binding);
        }
        debug!(count = self.runtime.attached.len(), "listeners attached");
    }

    fn detach_listeners(&mut self) {
        if self.runtime.attached.is_empty() {
            return;
        }
        let count = self.runtime.attached.len();
        for binding in self.runtime.attached.drain(..) {
            self.backend.detach_listener(binding);
        }
        debug!(count, "listeners detached");
    }
}
