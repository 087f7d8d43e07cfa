//! Timer-driven show/hide state machines for flyout panels
//!
//! - [`DelayedDisclosure`]: opens after the pointer has rested on the trigger
//!   for a delay, closes immediately on leave or selection. Used by menus,
//!   dropdowns, selects and tooltips. Nested levels each own one.
//! - [`CloseGrace`]: keeps a panel visible for a short grace period after the
//!   pointer leaves, so it can travel from trigger to panel. Used by popovers.

use crate::{Scheduler, TimerHandle, Wakeable, Wakeup};
use std::time::Duration;

/// Visibility state of a flyout panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisclosureState {
    /// Panel hidden
    #[default]
    Closed,
    /// Pointer is on the trigger; the open timer is running
    PendingOpen,
    /// Panel visible
    Open,
}

/// Visibility change reported by a disclosure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisclosureEvent {
    /// The panel became visible
    Opened,
    /// The panel was hidden
    Closed,
}

/// Delayed-open, immediate-close disclosure for one flyout level
///
/// The panel only reaches [`DisclosureState::Open`] through
/// [`DisclosureState::PendingOpen`], so the open delay is always honored.
#[derive(Debug)]
pub struct DelayedDisclosure {
    open_delay: Duration,
    state: DisclosureState,
    pending: Option<TimerHandle>,
}

impl DelayedDisclosure {
    /// Create a closed disclosure with the given open delay
    pub fn new(open_delay: Duration) -> Self {
        Self {
            open_delay,
            state: DisclosureState::Closed,
            pending: None,
        }
    }

    /// Delay between pointer enter and the panel opening
    pub fn open_delay(&self) -> Duration {
        self.open_delay
    }

    /// Current state
    pub fn state(&self) -> DisclosureState {
        self.state
    }

    /// Whether the panel is visible
    pub fn is_open(&self) -> bool {
        self.state == DisclosureState::Open
    }

    /// Pointer entered the trigger: start (or restart) the open timer
    ///
    /// Has no effect while the panel is already open.
    pub fn schedule_open(&mut self, scheduler: &mut dyn Scheduler) {
        if self.state == DisclosureState::Open {
            return;
        }
        self.cancel_pending(scheduler);
        self.pending = Some(scheduler.set_timer(self.open_delay));
        self.state = DisclosureState::PendingOpen;
    }

    /// Pointer left (or the panel is forcibly dismissed): cancel and close
    ///
    /// Returns [`DisclosureEvent::Closed`] if the panel was visible.
    pub fn cancel_and_close(&mut self, scheduler: &mut dyn Scheduler) -> Option<DisclosureEvent> {
        self.cancel_pending(scheduler);
        let was_open = self.state == DisclosureState::Open;
        self.state = DisclosureState::Closed;
        if was_open {
            log::debug!("disclosure closed");
            Some(DisclosureEvent::Closed)
        } else {
            None
        }
    }

    /// An item inside the panel was chosen: close and hand the item back
    pub fn select<T>(&mut self, scheduler: &mut dyn Scheduler, item: T) -> T {
        self.cancel_and_close(scheduler);
        item
    }

    fn cancel_pending(&mut self, scheduler: &mut dyn Scheduler) {
        if let Some(handle) = self.pending.take() {
            scheduler.cancel_timer(handle);
        }
    }
}

impl Wakeable for DelayedDisclosure {
    type Output = DisclosureEvent;

    fn on_wakeup(
        &mut self,
        _scheduler: &mut dyn Scheduler,
        wakeup: Wakeup,
    ) -> Option<DisclosureEvent> {
        let Wakeup::Timer(handle) = wakeup else {
            return None;
        };
        if self.pending != Some(handle) {
            return None;
        }

        self.pending = None;
        self.state = DisclosureState::Open;
        log::debug!("disclosure opened after {:?}", self.open_delay);
        Some(DisclosureEvent::Opened)
    }
}

/// Panel visibility with a grace period before closing
#[derive(Debug)]
pub struct CloseGrace {
    delay: Duration,
    visible: bool,
    pending: Option<TimerHandle>,
}

impl CloseGrace {
    /// Create a hidden panel with the given grace period
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            visible: false,
            pending: None,
        }
    }

    /// Whether the panel is visible
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether a close is pending
    pub fn is_closing(&self) -> bool {
        self.pending.is_some()
    }

    /// Show the panel immediately, dropping any pending close
    pub fn show(&mut self, scheduler: &mut dyn Scheduler) -> Option<DisclosureEvent> {
        self.cancel_hide(scheduler);
        if self.visible {
            return None;
        }
        self.visible = true;
        Some(DisclosureEvent::Opened)
    }

    /// Start the grace period; the panel hides when it runs out
    pub fn schedule_hide(&mut self, scheduler: &mut dyn Scheduler) {
        if !self.visible {
            return;
        }
        self.cancel_hide(scheduler);
        self.pending = Some(scheduler.set_timer(self.delay));
    }

    /// Pointer came back before the grace period ran out
    pub fn cancel_hide(&mut self, scheduler: &mut dyn Scheduler) {
        if let Some(handle) = self.pending.take() {
            scheduler.cancel_timer(handle);
        }
    }

    /// Hide immediately
    pub fn hide(&mut self, scheduler: &mut dyn Scheduler) -> Option<DisclosureEvent> {
        self.cancel_hide(scheduler);
        if !self.visible {
            return None;
        }
        self.visible = false;
        Some(DisclosureEvent::Closed)
    }
}

impl Wakeable for CloseGrace {
    type Output = DisclosureEvent;

    fn on_wakeup(
        &mut self,
        _scheduler: &mut dyn Scheduler,
        wakeup: Wakeup,
    ) -> Option<DisclosureEvent> {
        let Wakeup::Timer(handle) = wakeup else {
            return None;
        };
        if self.pending != Some(handle) {
            return None;
        }

        self.pending = None;
        self.visible = false;
        log::debug!("panel hidden after {:?} grace", self.delay);
        Some(DisclosureEvent::Closed)
    }
}
