//! Popover component
//!
//! Resting on the trigger opens a panel. Leaving either the trigger or the
//! panel starts a short grace period, so the pointer can travel between the
//! two without the panel closing under it.

use crate::{Side, Widget};
use dnc::{
    CloseGrace, DisclosureEvent, DncConfig, ElementType, HoverActivation, HoverOptions,
    HoverOutcome, InteractionRejected, PointerEvent, Scheduler, Wakeable, Wakeup,
};
use dnc_macros::WithBuilders;
use std::time::Duration;

/// Options for a [`Popover`]
#[derive(Debug, Clone, PartialEq, WithBuilders)]
pub struct PopoverOptions {
    /// Panel text
    #[with_builders(into)]
    pub content: String,
    /// Side of the trigger the panel appears on
    pub position: Side,
    /// Hover duration override for the trigger
    #[with_builders(some)]
    pub duration: Option<Duration>,
}

impl PopoverOptions {
    /// Options for a popover showing `content` below its trigger
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            position: Side::Bottom,
            duration: None,
        }
    }
}

/// Pointer targets of a [`Popover`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopoverPart {
    /// The element that opens the panel
    Trigger,
    /// The floating panel
    Panel,
}

/// A hover-opened panel with a grace-period close
#[derive(Debug)]
pub struct Popover {
    content: String,
    position: Side,
    trigger: HoverActivation,
    panel: CloseGrace,
}

impl Popover {
    /// Create a popover bound to `config`
    pub fn new(config: &DncConfig, options: PopoverOptions) -> Self {
        let mut trigger = HoverOptions::new("popover");
        trigger.duration = options.duration;
        Self {
            content: options.content,
            position: options.position,
            trigger: HoverActivation::attach(config, trigger),
            panel: CloseGrace::new(config.close_grace),
        }
    }

    /// Panel text
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Side of the trigger the panel appears on
    pub fn position(&self) -> Side {
        self.position
    }

    /// Whether the panel is shown
    pub fn is_visible(&self) -> bool {
        self.panel.is_visible()
    }

    /// Whether the panel is about to close
    pub fn is_closing(&self) -> bool {
        self.panel.is_closing()
    }

    /// Fill progress of the trigger
    pub fn progress(&self) -> f32 {
        self.trigger.progress()
    }
}

impl Widget for Popover {
    type Part = PopoverPart;
    type Response = ();

    fn element_type(&self) -> ElementType {
        self.trigger.binding().element_type().clone()
    }

    fn handle_pointer(
        &mut self,
        scheduler: &mut dyn Scheduler,
        part: PopoverPart,
        event: PointerEvent,
    ) -> Result<(), InteractionRejected> {
        match (part, event) {
            (_, PointerEvent::Click) => return Err(self.reject()),
            (PopoverPart::Trigger, PointerEvent::Enter) => {
                self.panel.cancel_hide(scheduler);
                self.trigger.pointer_enter(scheduler);
            }
            (PopoverPart::Trigger, PointerEvent::Leave) => {
                self.trigger.pointer_leave(scheduler);
                self.panel.schedule_hide(scheduler);
            }
            (PopoverPart::Panel, PointerEvent::Enter) => self.panel.cancel_hide(scheduler),
            (PopoverPart::Panel, PointerEvent::Leave) => self.panel.schedule_hide(scheduler),
            (_, PointerEvent::Enter | PointerEvent::Leave | PointerEvent::Move { .. }) => {}
        }
        Ok(())
    }
}

impl Wakeable for Popover {
    type Output = DisclosureEvent;

    fn on_wakeup(
        &mut self,
        scheduler: &mut dyn Scheduler,
        wakeup: Wakeup,
    ) -> Option<DisclosureEvent> {
        if let Some(outcome) = self.trigger.on_wakeup(scheduler, wakeup) {
            return match outcome {
                HoverOutcome::Interacted => self.panel.show(scheduler),
                HoverOutcome::Progress(_) => None,
            };
        }
        self.panel.on_wakeup(scheduler, wakeup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::dwell;
    use dnc::FrameScheduler;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn opened(scheduler: &mut FrameScheduler) -> Popover {
        let mut popover = Popover::new(
            &DncConfig::default(),
            PopoverOptions::new("Details").with_duration(ms(200)),
        );
        let events = dwell(scheduler, &mut popover, PopoverPart::Trigger, ms(200));
        assert_eq!(events, vec![DisclosureEvent::Opened]);
        popover
    }

    #[test]
    fn test_travel_from_trigger_to_panel_keeps_it_open() {
        let mut scheduler = FrameScheduler::new();
        let mut popover = opened(&mut scheduler);

        popover
            .handle_pointer(&mut scheduler, PopoverPart::Trigger, PointerEvent::Leave)
            .unwrap();
        scheduler.drive(ms(40), &mut popover);
        popover
            .handle_pointer(&mut scheduler, PopoverPart::Panel, PointerEvent::Enter)
            .unwrap();

        assert!(scheduler.drive(ms(500), &mut popover).is_empty());
        assert!(popover.is_visible());
    }

    #[test]
    fn test_leaving_panel_closes_after_grace() {
        let mut scheduler = FrameScheduler::new();
        let mut popover = opened(&mut scheduler);

        popover
            .handle_pointer(&mut scheduler, PopoverPart::Panel, PointerEvent::Enter)
            .unwrap();
        popover
            .handle_pointer(&mut scheduler, PopoverPart::Panel, PointerEvent::Leave)
            .unwrap();
        assert!(popover.is_closing());

        assert!(scheduler.drive(ms(99), &mut popover).is_empty());
        assert_eq!(
            scheduler.drive(ms(1), &mut popover),
            vec![DisclosureEvent::Closed]
        );
        assert!(!popover.is_visible());
    }

    #[test]
    fn test_click_on_panel_is_rejected() {
        let mut scheduler = FrameScheduler::new();
        let mut popover = opened(&mut scheduler);

        let err = popover
            .handle_pointer(&mut scheduler, PopoverPart::Panel, PointerEvent::Click)
            .unwrap_err();
        assert_eq!(err.element_type.as_str(), "popover");
        assert!(popover.is_visible());
    }
}
