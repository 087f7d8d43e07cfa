//! Widget trait shared by every Do Not Click controller
//!
//! A widget is made of several pointer targets ("parts": a trigger, a panel,
//! an arrow zone, ...). The host hit-tests its own layout, then forwards each
//! pointer event together with the part it landed on. Fired frames and
//! timers are routed back through [`Wakeable::on_wakeup`].
//!
//! # Example
//!
//! ```
//! use dnc::{DncConfig, FrameScheduler, PointerEvent};
//! use dnc_interactive::{Button, ButtonOptions, ButtonPart, Widget};
//! use std::time::Duration;
//!
//! let config = DncConfig::default();
//! let mut scheduler = FrameScheduler::new();
//! let mut button = Button::new(
//!     &config,
//!     ButtonOptions::new("Save").with_duration(Duration::from_millis(400)),
//! );
//!
//! button
//!     .handle_pointer(&mut scheduler, ButtonPart::Body, PointerEvent::Enter)
//!     .unwrap();
//! scheduler.drive(Duration::from_millis(400), &mut button);
//!
//! let err = button
//!     .handle_pointer(&mut scheduler, ButtonPart::Body, PointerEvent::Click)
//!     .unwrap_err();
//! assert_eq!(err.to_string(), "click detected on button");
//! ```

use dnc::{ElementType, InteractionRejected, PointerEvent, Scheduler, Wakeable};

/// A hover-activated widget controller
pub trait Widget: Wakeable {
    /// Identifies which pointer target of the widget an event landed on
    type Part;

    /// What a pointer event may report synchronously
    type Response;

    /// Diagnostic tag carried by rejections from this widget
    fn element_type(&self) -> ElementType;

    /// Route a pointer event that landed on `part`
    ///
    /// Clicks on any part are rejected with this widget's element type.
    fn handle_pointer(
        &mut self,
        scheduler: &mut dyn Scheduler,
        part: Self::Part,
        event: PointerEvent,
    ) -> Result<Self::Response, InteractionRejected>;

    /// Rejection for a click anywhere on this widget
    fn reject(&self) -> InteractionRejected {
        InteractionRejected::new(self.element_type())
    }
}

/// Enter `part` and keep the pointer there for `dwell`
///
/// Returns everything the widget reported while the pointer rested.
#[cfg(test)]
pub(crate) fn dwell<W: Widget>(
    scheduler: &mut dnc::FrameScheduler,
    widget: &mut W,
    part: W::Part,
    dwell: std::time::Duration,
) -> Vec<W::Output> {
    let entered = widget.handle_pointer(scheduler, part, PointerEvent::Enter);
    assert!(entered.is_ok(), "hovering must never be rejected");
    scheduler.drive(dwell, widget)
}
