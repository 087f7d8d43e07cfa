//! Number input component
//!
//! Two repeating hover zones step the value down and up while the pointer
//! rests on them; the value field in between is a hover-to-edit text field.

use crate::Widget;
use dnc::{
    DncConfig, ElementType, FocusActivation, FocusMode, FocusOptions, FocusOutcome,
    HoverActivation, HoverOptions, HoverOutcome, InteractionRejected, PointerEvent, Scheduler,
    Wakeable, Wakeup,
};
use dnc_macros::WithBuilders;
use std::fmt;
use std::time::Duration;

const ELEMENT_TYPE: &str = "number-input";

/// Options for a [`NumberInput`]
#[derive(Debug, Clone, PartialEq, WithBuilders)]
pub struct NumberInputOptions {
    /// Initial value (clamped into range)
    pub value: f64,
    /// Lower bound
    pub min: f64,
    /// Upper bound
    pub max: f64,
    /// Amount added or removed per completed hover cycle
    pub step: f64,
    /// Hover duration override (one cycle of the step zones)
    #[with_builders(some)]
    pub duration: Option<Duration>,
}

impl Default for NumberInputOptions {
    fn default() -> Self {
        Self {
            value: 0.0,
            min: f64::NEG_INFINITY,
            max: f64::INFINITY,
            step: 1.0,
            duration: None,
        }
    }
}

impl NumberInputOptions {
    /// Options for an unbounded input starting at `value`
    pub fn new(value: f64) -> Self {
        Self {
            value,
            ..Default::default()
        }
    }
}

/// Pointer targets of a [`NumberInput`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberInputPart {
    /// The "-" zone
    Decrement,
    /// The editable value field
    Value,
    /// The "+" zone
    Increment,
}

/// What a [`NumberInput`] reports
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberInputEvent {
    /// The value changed (after clamping)
    Changed(f64),
    /// The value field became editable
    Activated,
}

/// A hover-stepped numeric input
pub struct NumberInput {
    value: f64,
    min: f64,
    max: f64,
    step: f64,
    decrement: HoverActivation,
    increment: HoverActivation,
    field: FocusActivation,
    on_interact: Option<Box<dyn FnMut(f64)>>,
}

impl NumberInput {
    /// Create a number input bound to `config`
    pub fn new(config: &DncConfig, options: NumberInputOptions) -> Self {
        let zone = HoverOptions {
            duration: options.duration,
            element_type: ELEMENT_TYPE.into(),
            repeat: true,
        };
        let mut field = FocusOptions::new(ELEMENT_TYPE);
        field.duration = options.duration;

        let mut input = Self {
            value: options.value,
            min: options.min,
            max: options.max,
            step: options.step,
            decrement: HoverActivation::attach(config, zone.clone()),
            increment: HoverActivation::attach(config, zone),
            field: FocusActivation::attach(config, field),
            on_interact: None,
        };
        input.value = input.clamp(options.value);
        input
    }

    /// Set a callback called with every new value
    pub fn on_interact(mut self, f: impl FnMut(f64) + 'static) -> Self {
        self.on_interact = Some(Box::new(f));
        self
    }

    /// Current value
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Editing state of the value field
    pub fn mode(&self) -> FocusMode {
        self.field.mode()
    }

    /// Fill progress of a part in `[0, 1]`
    pub fn progress(&self, part: NumberInputPart) -> f32 {
        match part {
            NumberInputPart::Decrement => self.decrement.progress(),
            NumberInputPart::Value => self.field.progress(),
            NumberInputPart::Increment => self.increment.progress(),
        }
    }

    /// The host edited the value field's text
    ///
    /// Text that does not parse as a number is ignored, as is any input while
    /// the field is dormant. Returns the new value when it was accepted.
    pub fn input(&mut self, text: &str) -> Option<f64> {
        if !self.field.is_editable() {
            return None;
        }
        let parsed = text.trim().parse::<f64>().ok().filter(|v| !v.is_nan())?;
        Some(self.set_value(parsed))
    }

    /// The value field lost focus
    pub fn blur(&mut self) {
        self.field.on_blur();
    }

    /// Set the value (clamped) and notify
    pub fn set_value(&mut self, value: f64) -> f64 {
        self.value = self.clamp(value);
        if let Some(ref mut on_interact) = self.on_interact {
            on_interact(self.value);
        }
        self.value
    }

    fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }
}

impl Widget for NumberInput {
    type Part = NumberInputPart;
    type Response = ();

    fn element_type(&self) -> ElementType {
        ELEMENT_TYPE.into()
    }

    fn handle_pointer(
        &mut self,
        scheduler: &mut dyn Scheduler,
        part: NumberInputPart,
        event: PointerEvent,
    ) -> Result<(), InteractionRejected> {
        match part {
            NumberInputPart::Decrement => self.decrement.handle_pointer(scheduler, event),
            NumberInputPart::Value => self.field.handle_pointer(scheduler, event),
            NumberInputPart::Increment => self.increment.handle_pointer(scheduler, event),
        }
    }
}

impl Wakeable for NumberInput {
    type Output = NumberInputEvent;

    fn on_wakeup(
        &mut self,
        scheduler: &mut dyn Scheduler,
        wakeup: Wakeup,
    ) -> Option<NumberInputEvent> {
        if let Some(outcome) = self.field.on_wakeup(scheduler, wakeup) {
            return (outcome == FocusOutcome::Activated).then_some(NumberInputEvent::Activated);
        }

        let delta = if let Some(outcome) = self.decrement.on_wakeup(scheduler, wakeup) {
            (outcome == HoverOutcome::Interacted).then_some(-self.step)?
        } else {
            let outcome = self.increment.on_wakeup(scheduler, wakeup)?;
            (outcome == HoverOutcome::Interacted).then_some(self.step)?
        };

        let value = self.set_value(self.value + delta);
        log::trace!("number input stepped to {}", value);
        Some(NumberInputEvent::Changed(value))
    }
}

impl fmt::Debug for NumberInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumberInput")
            .field("value", &self.value)
            .field("min", &self.min)
            .field("max", &self.max)
            .field("step", &self.step)
            .field("decrement", &self.decrement)
            .field("increment", &self.increment)
            .field("field", &self.field)
            .finish_non_exhaustive()
    }
}
