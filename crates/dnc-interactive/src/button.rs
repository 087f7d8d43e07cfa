//! Button component
//!
//! A labeled button that fires after the pointer rests on it.

use crate::Widget;
use dnc::{
    DncConfig, ElementType, HoverActivation, HoverOptions, HoverOutcome, InteractionRejected,
    PointerEvent, Scheduler, Wakeable, Wakeup,
};
use dnc_macros::WithBuilders;
use std::fmt;
use std::time::Duration;

/// Options for a [`Button`]
#[derive(Debug, Clone, Default, PartialEq, WithBuilders)]
pub struct ButtonOptions {
    /// Visible label
    #[with_builders(into)]
    pub label: String,
    /// Hover duration override
    #[with_builders(some)]
    pub duration: Option<Duration>,
}

impl ButtonOptions {
    /// Options for a button with the given label
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            duration: None,
        }
    }
}

/// Pointer targets of a [`Button`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonPart {
    /// The whole button surface
    Body,
}

/// A hover-activated button
///
/// # Example
///
/// ```ignore
/// Button::new(&config, ButtonOptions::new("Delete"))
///     .on_interact(|| println!("Deleted!"))
/// ```
pub struct Button {
    label: String,
    activation: HoverActivation,
    on_interact: Option<Box<dyn FnMut()>>,
}

impl Button {
    /// Create a button bound to `config`
    pub fn new(config: &DncConfig, options: ButtonOptions) -> Self {
        let mut hover = HoverOptions::new("button");
        hover.duration = options.duration;
        Self {
            label: options.label,
            activation: HoverActivation::attach(config, hover),
            on_interact: None,
        }
    }

    /// Set a callback to be called when the hover completes
    pub fn on_interact(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_interact = Some(Box::new(f));
        self
    }

    /// The button label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Fill progress in `[0, 1]`
    pub fn progress(&self) -> f32 {
        self.activation.progress()
    }
}

impl Widget for Button {
    type Part = ButtonPart;
    type Response = ();

    fn element_type(&self) -> ElementType {
        self.activation.binding().element_type().clone()
    }

    fn handle_pointer(
        &mut self,
        scheduler: &mut dyn Scheduler,
        _part: ButtonPart,
        event: PointerEvent,
    ) -> Result<(), InteractionRejected> {
        self.activation.handle_pointer(scheduler, event)
    }
}

impl Wakeable for Button {
    type Output = HoverOutcome;

    fn on_wakeup(&mut self, scheduler: &mut dyn Scheduler, wakeup: Wakeup) -> Option<HoverOutcome> {
        let outcome = self.activation.on_wakeup(scheduler, wakeup)?;
        if outcome == HoverOutcome::Interacted {
            log::debug!("button {:?} activated", self.label);
            if let Some(ref mut on_interact) = self.on_interact {
                on_interact();
            }
        }
        Some(outcome)
    }
}

impl fmt::Debug for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button")
            .field("label", &self.label)
            .field("activation", &self.activation)
            .field("on_interact", &self.on_interact.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::dwell;
    use dnc::FrameScheduler;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_button_uses_config_duration() {
        let config = DncConfig::default().with_duration(Duration::from_millis(300));
        let mut scheduler = FrameScheduler::new();
        let pressed = Rc::new(Cell::new(0));
        let counter = pressed.clone();
        let mut button = Button::new(&config, ButtonOptions::new("Go"))
            .on_interact(move || counter.set(counter.get() + 1));

        let almost = Duration::from_millis(299);
        dwell(&mut scheduler, &mut button, ButtonPart::Body, almost);
        assert_eq!(pressed.get(), 0);
        assert!(button.progress() > 0.9);

        scheduler.drive(Duration::from_millis(1), &mut button);
        assert_eq!(pressed.get(), 1);
    }

    #[test]
    fn test_click_rejected_as_button() {
        let mut scheduler = FrameScheduler::new();
        let mut button = Button::new(&DncConfig::default(), ButtonOptions::new("Go"));

        let err = button
            .handle_pointer(&mut scheduler, ButtonPart::Body, PointerEvent::Click)
            .unwrap_err();
        assert_eq!(err.element_type.as_str(), "button");
        assert_eq!(button.label(), "Go");
    }
}
