use super::types::Timestamp;

#[derive(Debug, Clone, PartialEq)]
struct TrailingCall<A> {
    due: Timestamp,
    args: A,
}

/// Trailing-edge rate limiter driven by host-supplied timestamps.
///
/// The first call after an idle period runs immediately. Calls landing within
/// `window_ms` of the last run are deferred: the first of them schedules a
/// single trailing call `window_ms` later and every following call only
/// replaces the arguments it will run with. The latest arguments of a burst
/// are therefore always delivered, and runs are never closer than the window.
#[derive(Debug, Clone, PartialEq)]
pub struct Throttle<A> {
    window_ms: u64,
    last_run: Option<Timestamp>,
    trailing: Option<TrailingCall<A>>,
}

impl<A> Throttle<A> {
    #[must_use]
    pub fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            last_run: None,
            trailing: None,
        }
    }

    #[must_use]
    pub fn window_ms(&self) -> u64 {
        self.window_ms
    }

    #[must_use]
    pub fn last_run(&self) -> Option<Timestamp> {
        self.last_run
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.trailing.is_some()
    }

    /// Deadline of the scheduled trailing call, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Timestamp> {
        self.trailing.as_ref().map(|call| call.due)
    }

    /// Registers an invocation at `now`.
    ///
    /// Returns `Some(args)` when the action must run right away. Returns `None`
    /// when the invocation was folded into the trailing call; an overdue
    /// trailing call is not flushed here, use [`Throttle::poll`] first.
    pub fn call(&mut self, now: Timestamp, args: A) -> Option<A> {
        if let Some(trailing) = self.trailing.as_mut() {
            trailing.args = args;
            return None;
        }

        let within_window = self
            .last_run
            .is_some_and(|last| now.saturating_millis_since(last) < self.window_ms && now >= last);
        if within_window {
            self.trailing = Some(TrailingCall {
                due: now.saturating_add_millis(self.window_ms),
                args,
            });
            return None;
        }

        self.last_run = Some(now);
        Some(args)
    }

    /// Fires the trailing call when its deadline is `<= now`.
    pub fn poll(&mut self, now: Timestamp) -> Option<A> {
        let due = self.trailing.as_ref()?.due;
        if due > now {
            return None;
        }
        let call = self.trailing.take()?;
        self.last_run = Some(now);
        Some(call.args)
    }

    /// Drops any scheduled trailing call and forgets the last run.
    pub fn cancel(&mut self) {
        self.trailing = None;
        self.last_run = None;
    }
}
