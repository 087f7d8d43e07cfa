//! Tooltip component
//!
//! Shows a short text after the pointer rests on the target; hides as soon
//! as it leaves.

use crate::Widget;
use dnc::{
    DelayedDisclosure, DisclosureEvent, DncConfig, ElementType, InteractionRejected, PointerEvent,
    Scheduler, Wakeable, Wakeup,
};
use std::time::Duration;

/// Side of the target a tooltip or popover appears on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Side {
    /// Above the target
    #[default]
    Top,
    /// Below the target
    Bottom,
    /// Left of the target
    Left,
    /// Right of the target
    Right,
}

/// Pointer targets of a [`Tooltip`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TooltipPart {
    /// The element the tooltip describes
    Target,
}

/// A delayed hover tooltip
#[derive(Debug)]
pub struct Tooltip {
    content: String,
    position: Side,
    disclosure: DelayedDisclosure,
}

impl Tooltip {
    /// Create a tooltip using the config's tooltip delay
    pub fn new(config: &DncConfig, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            position: Side::Top,
            disclosure: DelayedDisclosure::new(config.tooltip_delay),
        }
    }

    /// Set the side the tooltip appears on
    pub fn with_position(mut self, position: Side) -> Self {
        self.position = position;
        self
    }

    /// Override the show delay
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.disclosure = DelayedDisclosure::new(delay);
        self
    }

    /// Tooltip text
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Side the tooltip appears on
    pub fn position(&self) -> Side {
        self.position
    }

    /// Whether the tooltip is shown
    pub fn is_visible(&self) -> bool {
        self.disclosure.is_open()
    }
}

impl Widget for Tooltip {
    type Part = TooltipPart;
    type Response = ();

    fn element_type(&self) -> ElementType {
        "tooltip".into()
    }

    fn handle_pointer(
        &mut self,
        scheduler: &mut dyn Scheduler,
        _part: TooltipPart,
        event: PointerEvent,
    ) -> Result<(), InteractionRejected> {
        match event {
            PointerEvent::Enter => self.disclosure.schedule_open(scheduler),
            PointerEvent::Leave => {
                self.disclosure.cancel_and_close(scheduler);
            }
            PointerEvent::Move { .. } => {}
            PointerEvent::Click => return Err(self.reject()),
        }
        Ok(())
    }
}

impl Wakeable for Tooltip {
    type Output = DisclosureEvent;

    fn on_wakeup(
        &mut self,
        scheduler: &mut dyn Scheduler,
        wakeup: Wakeup,
    ) -> Option<DisclosureEvent> {
        self.disclosure.on_wakeup(scheduler, wakeup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::dwell;
    use dnc::FrameScheduler;

    #[test]
    fn test_shows_after_tooltip_delay() {
        let mut scheduler = FrameScheduler::new();
        let mut tooltip = Tooltip::new(&DncConfig::default(), "Hover, don't click");

        let delay = Duration::from_millis(199);
        dwell(&mut scheduler, &mut tooltip, TooltipPart::Target, delay);
        assert!(!tooltip.is_visible());
        scheduler.drive(Duration::from_millis(1), &mut tooltip);
        assert!(tooltip.is_visible());

        tooltip
            .handle_pointer(&mut scheduler, TooltipPart::Target, PointerEvent::Leave)
            .unwrap();
        assert!(!tooltip.is_visible());
    }

    #[test]
    fn test_click_on_target_is_rejected() {
        let mut scheduler = FrameScheduler::new();
        let mut tooltip = Tooltip::new(&DncConfig::default(), "tip").with_position(Side::Left);

        let err = tooltip
            .handle_pointer(&mut scheduler, TooltipPart::Target, PointerEvent::Click)
            .unwrap_err();
        assert_eq!(err.element_type.as_str(), "tooltip");
        assert_eq!(tooltip.position(), Side::Left);
    }
}
