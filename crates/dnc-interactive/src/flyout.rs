//! Shared trigger + panel behavior for dropdown menus and selects
//!
//! Hovering the trigger opens the panel after the open delay. Leaving the
//! whole container closes it at once. Each entry of the panel is a hover
//! activation; completing one closes the panel and reports the entry's index.

use dnc::{
    DelayedDisclosure, DisclosureEvent, DisclosureState, DncConfig, ElementType, HoverActivation,
    HoverOptions, HoverOutcome, InteractionRejected, PointerEvent, Scheduler, Wakeable, Wakeup,
};
use std::time::Duration;

/// Pointer targets of a flyout widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlyoutPart {
    /// The element that opens the panel
    Trigger,
    /// The panel background (between entries)
    Panel,
    /// The entry at this index; dividers count as entries
    Entry(usize),
    /// The outer container holding trigger and panel
    Container,
}

/// What a flyout reports on a wakeup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlyoutEvent {
    /// The panel opened
    Opened,
    /// The entry at this index was chosen and the panel closed
    Chosen(usize),
}

/// Trigger, delayed panel and hover-activated entries
#[derive(Debug)]
pub struct Flyout {
    element_type: ElementType,
    disclosure: DelayedDisclosure,
    // `None` marks an inert divider
    entries: Vec<Option<HoverActivation>>,
}

impl Flyout {
    /// Build a flyout whose entries are selectable where `selectable` is true
    pub fn new(
        config: &DncConfig,
        element_type: impl Into<ElementType>,
        duration: Option<Duration>,
        selectable: impl IntoIterator<Item = bool>,
    ) -> Self {
        let element_type = element_type.into();
        let entries = selectable
            .into_iter()
            .map(|selectable| {
                selectable.then(|| {
                    let options = HoverOptions {
                        duration,
                        element_type: element_type.clone(),
                        repeat: false,
                    };
                    HoverActivation::attach(config, options)
                })
            })
            .collect();

        Self {
            element_type,
            disclosure: DelayedDisclosure::new(config.open_delay),
            entries,
        }
    }

    /// Diagnostic tag of the owning widget
    pub fn element_type(&self) -> &ElementType {
        &self.element_type
    }

    /// Panel state
    pub fn state(&self) -> DisclosureState {
        self.disclosure.state()
    }

    /// Whether the panel is visible
    pub fn is_open(&self) -> bool {
        self.disclosure.is_open()
    }

    /// Fill progress of an entry (0 for dividers and unknown indices)
    pub fn progress(&self, index: usize) -> f32 {
        match self.entries.get(index) {
            Some(Some(activation)) => activation.progress(),
            _ => 0.0,
        }
    }

    /// Close the panel and reset every entry
    pub fn close(&mut self, scheduler: &mut dyn Scheduler) -> Option<DisclosureEvent> {
        for activation in self.entries.iter_mut().flatten() {
            activation.pointer_leave(scheduler);
        }
        self.disclosure.cancel_and_close(scheduler)
    }

    /// Route a pointer event
    pub fn handle_pointer(
        &mut self,
        scheduler: &mut dyn Scheduler,
        part: FlyoutPart,
        event: PointerEvent,
    ) -> Result<(), InteractionRejected> {
        if event == PointerEvent::Click {
            return Err(InteractionRejected::new(self.element_type.clone()));
        }
        match (part, event) {
            (FlyoutPart::Trigger, PointerEvent::Enter) => self.disclosure.schedule_open(scheduler),
            (FlyoutPart::Container, PointerEvent::Leave) => {
                self.close(scheduler);
            }
            (FlyoutPart::Entry(index), PointerEvent::Enter) => {
                if self.disclosure.is_open() {
                    if let Some(Some(activation)) = self.entries.get_mut(index) {
                        activation.pointer_enter(scheduler);
                    }
                }
            }
            (FlyoutPart::Entry(index), PointerEvent::Leave) => {
                if let Some(Some(activation)) = self.entries.get_mut(index) {
                    activation.pointer_leave(scheduler);
                }
            }
            _ => {}
        }
        Ok(())
    }
}

impl Wakeable for Flyout {
    type Output = FlyoutEvent;

    fn on_wakeup(&mut self, scheduler: &mut dyn Scheduler, wakeup: Wakeup) -> Option<FlyoutEvent> {
        if let Some(event) = self.disclosure.on_wakeup(scheduler, wakeup) {
            return (event == DisclosureEvent::Opened).then_some(FlyoutEvent::Opened);
        }

        let chosen = self
            .entries
            .iter_mut()
            .enumerate()
            .find_map(|(index, entry)| {
                let outcome = entry.as_mut()?.on_wakeup(scheduler, wakeup)?;
                Some((index, outcome))
            });

        match chosen? {
            (index, HoverOutcome::Interacted) => {
                self.close(scheduler);
                log::debug!("{} entry {} chosen", self.element_type, index);
                Some(FlyoutEvent::Chosen(index))
            }
            (_, HoverOutcome::Progress(_)) => None,
        }
    }
}
