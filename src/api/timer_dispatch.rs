use tracing::trace;

use crate::backend::Backend;
use crate::core::Timestamp;

use super::{LazyLoadEngine, scheduler_runtime::TimerKind};

impl<B: Backend> LazyLoadEngine<B> {
    /// Earliest time at which [`LazyLoadEngine::advance`] has work to do.
    ///
    /// Hosts use it the way they would arm a timeout.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Timestamp> {
        self.runtime.next_timer().map(|(due, _)| due)
    }

    /// Fires every timer due at or before `now`, in deadline order.
    ///
    /// Returns the number of timers fired.
    pub fn advance(&mut self, now: Timestamp) -> usize {
        let mut fired = 0;
        while let Some((due, kind)) = self.runtime.next_timer() {
            if due > now {
                break;
            }
            fired += 1;
            trace!(?kind, due = due.as_millis(), "timer fired");
            match kind {
                TimerKind::Startup => self.finish_startup(),
                TimerKind::Kick => {
                    self.runtime.kick_due = None;
                    if self.runtime.listening {
                        self.sweep();
                    }
                }
                TimerKind::GeometryRefresh => {
                    if self.runtime.geometry_throttle.poll(due).is_some() {
                        self.refresh_geometry();
                    }
                }
                TimerKind::Sweep => {
                    if self.runtime.sweep_throttle.poll(due).is_some() {
                        self.sweep();
                    }
                }
            }
        }
        fired
    }
}
