//! Text input component
//!
//! The field stays read-only until the pointer has rested on it, then it
//! becomes editable and takes focus. Blurring it puts it back to sleep.

use crate::Widget;
use dnc::{
    DncConfig, ElementType, FocusActivation, FocusMode, FocusOptions, FocusOutcome,
    InteractionRejected, PointerEvent, Scheduler, Wakeable, Wakeup,
};
use dnc_macros::WithBuilders;
use std::fmt;
use std::time::Duration;

/// Options for a [`TextInput`]
#[derive(Debug, Clone, Default, PartialEq, WithBuilders)]
pub struct TextInputOptions {
    /// Initial text
    #[with_builders(into)]
    pub value: String,
    /// Placeholder shown while the field is empty
    #[with_builders(into)]
    pub placeholder: String,
    /// Hover duration override
    #[with_builders(some)]
    pub duration: Option<Duration>,
}

impl TextInputOptions {
    /// Options for a field holding `value`
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Default::default()
        }
    }
}

/// Pointer targets of a [`TextInput`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextInputPart {
    /// The wrapper around the editable field
    Field,
}

/// A hover-to-edit text field
pub struct TextInput {
    value: String,
    placeholder: String,
    focus: FocusActivation,
    on_input: Option<Box<dyn FnMut(&str)>>,
    on_activate: Option<Box<dyn FnMut()>>,
}

impl TextInput {
    /// Create a text input bound to `config`
    pub fn new(config: &DncConfig, options: TextInputOptions) -> Self {
        let mut focus = FocusOptions::new("input");
        focus.duration = options.duration;
        Self {
            value: options.value,
            placeholder: options.placeholder,
            focus: FocusActivation::attach(config, focus),
            on_input: None,
            on_activate: None,
        }
    }

    /// Set a callback called with the text after every edit
    pub fn on_input(mut self, f: impl FnMut(&str) + 'static) -> Self {
        self.on_input = Some(Box::new(f));
        self
    }

    /// Set a callback called when the field becomes editable
    pub fn on_activate(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_activate = Some(Box::new(f));
        self
    }

    /// Current text
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Placeholder text
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Editing state of the field
    pub fn mode(&self) -> FocusMode {
        self.focus.mode()
    }

    /// Fill progress in `[0, 1]`
    pub fn progress(&self) -> f32 {
        self.focus.progress()
    }

    /// The host edited the field's text
    ///
    /// Ignored (returns `false`) while the field is dormant.
    pub fn input(&mut self, text: impl Into<String>) -> bool {
        if !self.focus.is_editable() {
            return false;
        }
        self.value = text.into();
        if let Some(ref mut on_input) = self.on_input {
            on_input(&self.value);
        }
        true
    }

    /// The field lost focus
    pub fn blur(&mut self) {
        self.focus.on_blur();
    }
}

impl Widget for TextInput {
    type Part = TextInputPart;
    type Response = ();

    fn element_type(&self) -> ElementType {
        self.focus.hover().binding().element_type().clone()
    }

    fn handle_pointer(
        &mut self,
        scheduler: &mut dyn Scheduler,
        _part: TextInputPart,
        event: PointerEvent,
    ) -> Result<(), InteractionRejected> {
        self.focus.handle_pointer(scheduler, event)
    }
}

impl Wakeable for TextInput {
    type Output = FocusOutcome;

    fn on_wakeup(&mut self, scheduler: &mut dyn Scheduler, wakeup: Wakeup) -> Option<FocusOutcome> {
        let outcome = self.focus.on_wakeup(scheduler, wakeup)?;
        if outcome == FocusOutcome::Activated {
            if let Some(ref mut on_activate) = self.on_activate {
                on_activate();
            }
        }
        Some(outcome)
    }
}

impl fmt::Debug for TextInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextInput")
            .field("value", &self.value)
            .field("placeholder", &self.placeholder)
            .field("focus", &self.focus)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::dwell;
    use dnc::FrameScheduler;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_dormant_field_ignores_input() {
        let mut field = TextInput::new(&DncConfig::default(), TextInputOptions::new("hello"));
        assert!(!field.input("changed"));
        assert_eq!(field.value(), "hello");
    }

    #[test]
    fn test_activated_field_forwards_edits_until_blur() {
        let mut scheduler = FrameScheduler::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let mut field = TextInput::new(
            &DncConfig::default(),
            TextInputOptions::new("")
                .with_placeholder("Name")
                .with_duration(ms(200)),
        )
        .on_input(move |text| sink.borrow_mut().push(text.to_string()));

        let outcomes = dwell(&mut scheduler, &mut field, TextInputPart::Field, ms(200));
        assert_eq!(outcomes.last(), Some(&FocusOutcome::Activated));
        assert_eq!(field.mode(), FocusMode::Focused);

        assert!(field.input("Ada"));
        field.blur();
        assert!(!field.input("Grace"));

        assert_eq!(*seen.borrow(), vec!["Ada".to_string()]);
        assert_eq!(field.placeholder(), "Name");
    }
}
