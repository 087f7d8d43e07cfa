//! Trailing-edge debounce on top of the scheduler's timers

use crate::{Scheduler, TimerHandle, Wakeable, Wakeup};
use std::time::Duration;

/// Reports the latest pushed value once pushes stop for `delay`
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<TimerHandle>,
    value: Option<T>,
}

impl<T> Debouncer<T> {
    /// Create an idle debouncer
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            value: None,
        }
    }

    /// Quiet period required before the value settles
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Whether a value is waiting to settle
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Replace the pending value and restart the quiet period
    pub fn push(&mut self, scheduler: &mut dyn Scheduler, value: T) {
        self.cancel(scheduler);
        self.value = Some(value);
        self.pending = Some(scheduler.set_timer(self.delay));
    }

    /// Drop the pending value
    pub fn cancel(&mut self, scheduler: &mut dyn Scheduler) {
        if let Some(handle) = self.pending.take() {
            scheduler.cancel_timer(handle);
        }
        self.value = None;
    }
}

impl<T> Wakeable for Debouncer<T> {
    type Output = T;

    fn on_wakeup(&mut self, _scheduler: &mut dyn Scheduler, wakeup: Wakeup) -> Option<T> {
        let Wakeup::Timer(handle) = wakeup else {
            return None;
        };
        if self.pending != Some(handle) {
            return None;
        }
        self.pending = None;
        self.value.take()
    }
}
