use smallvec::SmallVec;

use crate::backend::{ListenerBinding, ListenerHandler, ScrollTarget, ViewportEventKind};
use crate::core::{Throttle, Timestamp};

/// Delay of the deferred startup tick and of the rebind kick.
pub(super) const DEFERRED_TICK_MS: u64 = 1;

/// Timers owned by the scheduler, in the order they fire when due together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(super) enum TimerKind {
    Startup,
    Kick,
    GeometryRefresh,
    Sweep,
}

/// Listener and timer state grouped apart from the element collections.
#[derive(Debug)]
pub(super) struct SchedulerRuntime {
    pub(super) listening: bool,
    pub(super) attached: SmallVec<[ListenerBinding; 4]>,
    pub(super) startup_due: Option<Timestamp>,
    pub(super) kick_due: Option<Timestamp>,
    pub(super) sweep_throttle: Throttle<()>,
    pub(super) geometry_throttle: Throttle<()>,
}

impl SchedulerRuntime {
    #[must_use]
    pub(super) fn new(sweep_window_ms: u64, geometry_window_ms: u64) -> Self {
        Self {
            listening: false,
            attached: SmallVec::new(),
            startup_due: None,
            kick_due: None,
            sweep_throttle: Throttle::new(sweep_window_ms),
            geometry_throttle: Throttle::new(geometry_window_ms),
        }
    }

    /// Earliest due timer; ties resolve in [`TimerKind`] order.
    #[must_use]
    pub(super) fn next_timer(&self) -> Option<(Timestamp, TimerKind)> {
        [
            (self.startup_due, TimerKind::Startup),
            (self.kick_due, TimerKind::Kick),
            (
                self.geometry_throttle.next_deadline(),
                TimerKind::GeometryRefresh,
            ),
            (self.sweep_throttle.next_deadline(), TimerKind::Sweep),
        ]
        .into_iter()
        .filter_map(|(due, kind)| due.map(|due| (due, kind)))
        .min()
    }

    pub(super) fn clear_timers(&mut self) {
        self.startup_due = None;
        self.kick_due = None;
        self.sweep_throttle.cancel();
        self.geometry_throttle.cancel();
    }
}

/// Listener set attached while the pending set is non-empty.
///
/// Scroll and touchmove of the scroll target drive sweeps; window resizes drive
/// both a sweep and a geometry refresh.
#[must_use]
pub(super) fn listener_bindings(scroll_target: ScrollTarget) -> [ListenerBinding; 4] {
    [
        ListenerBinding {
            target: scroll_target,
            event: ViewportEventKind::Scroll,
            handler: ListenerHandler::Sweep,
        },
        ListenerBinding {
            target: scroll_target,
            event: ViewportEventKind::TouchMove,
            handler: ListenerHandler::Sweep,
        },
        ListenerBinding {
            target: ScrollTarget::Window,
            event: ViewportEventKind::Resize,
            handler: ListenerHandler::Sweep,
        },
        ListenerBinding {
            target: ScrollTarget::Window,
            event: ViewportEventKind::Resize,
            handler: ListenerHandler::GeometryRefresh,
        },
    ]
}
