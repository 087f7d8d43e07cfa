//! Select component
//!
//! Like a dropdown menu, but the trigger shows the label of the last chosen
//! option.

use crate::{Flyout, FlyoutEvent, FlyoutPart, Widget};
use dnc::{
    DisclosureState, DncConfig, ElementType, InteractionRejected, PointerEvent, Scheduler,
    Wakeable, Wakeup,
};
use dnc_macros::WithBuilders;
use std::fmt;
use std::time::Duration;

/// One choice of a [`Select`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// Value reported when chosen
    pub value: String,
    /// Visible label
    pub label: String,
}

impl SelectOption {
    /// A choice with the given value and label
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Options for a [`Select`]
#[derive(Debug, Clone, PartialEq, WithBuilders)]
pub struct SelectOptions {
    /// The choices, in display order
    pub options: Vec<SelectOption>,
    /// Trigger text before anything is chosen
    #[with_builders(into)]
    pub placeholder: String,
    /// Hover duration override for the choices
    #[with_builders(some)]
    pub duration: Option<Duration>,
}

impl Default for SelectOptions {
    fn default() -> Self {
        Self {
            options: Vec::new(),
            placeholder: "Select...".to_string(),
            duration: None,
        }
    }
}

impl SelectOptions {
    /// Options for the given choices
    pub fn new(options: impl IntoIterator<Item = SelectOption>) -> Self {
        Self {
            options: options.into_iter().collect(),
            ..Default::default()
        }
    }
}

/// What a [`Select`] reports
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectEvent {
    /// The list opened
    Opened,
    /// The option with this value was chosen
    Selected(String),
}

/// A hover-opened single choice list
pub struct Select {
    options: Vec<SelectOption>,
    placeholder: String,
    selected: Option<usize>,
    flyout: Flyout,
    on_interact: Option<Box<dyn FnMut(&str)>>,
}

impl Select {
    /// Create a select bound to `config`
    pub fn new(config: &DncConfig, options: SelectOptions) -> Self {
        let flyout = Flyout::new(
            config,
            "select",
            options.duration,
            options.options.iter().map(|_| true),
        );
        Self {
            options: options.options,
            placeholder: options.placeholder,
            selected: None,
            flyout,
            on_interact: None,
        }
    }

    /// Set a callback called with the value of the chosen option
    pub fn on_interact(mut self, f: impl FnMut(&str) + 'static) -> Self {
        self.on_interact = Some(Box::new(f));
        self
    }

    /// Text shown on the trigger
    pub fn label(&self) -> &str {
        self.selected_option()
            .map_or(self.placeholder.as_str(), |option| option.label.as_str())
    }

    /// The chosen option, if any
    pub fn selected_option(&self) -> Option<&SelectOption> {
        self.options.get(self.selected?)
    }

    /// The choices
    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    /// List state
    pub fn state(&self) -> DisclosureState {
        self.flyout.state()
    }

    /// Whether the list is expanded
    pub fn is_expanded(&self) -> bool {
        self.flyout.is_open()
    }

    /// Fill progress of the option at `index`
    pub fn progress(&self, index: usize) -> f32 {
        self.flyout.progress(index)
    }
}

impl Widget for Select {
    type Part = FlyoutPart;
    type Response = ();

    fn element_type(&self) -> ElementType {
        self.flyout.element_type().clone()
    }

    fn handle_pointer(
        &mut self,
        scheduler: &mut dyn Scheduler,
        part: FlyoutPart,
        event: PointerEvent,
    ) -> Result<(), InteractionRejected> {
        self.flyout.handle_pointer(scheduler, part, event)
    }
}

impl Wakeable for Select {
    type Output = SelectEvent;

    fn on_wakeup(&mut self, scheduler: &mut dyn Scheduler, wakeup: Wakeup) -> Option<SelectEvent> {
        match self.flyout.on_wakeup(scheduler, wakeup)? {
            FlyoutEvent::Opened => Some(SelectEvent::Opened),
            FlyoutEvent::Chosen(index) => {
                let value = self.options.get(index)?.value.clone();
                self.selected = Some(index);
                if let Some(ref mut on_interact) = self.on_interact {
                    on_interact(&value);
                }
                Some(SelectEvent::Selected(value))
            }
        }
    }
}

impl fmt::Debug for Select {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Select")
            .field("options", &self.options)
            .field("placeholder", &self.placeholder)
            .field("selected", &self.selected)
            .field("flyout", &self.flyout)
            .finish_non_exhaustive()
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

    fn fruit() -> Select {
        Select::new(
            &DncConfig::default(),
            SelectOptions::new([
                SelectOption::new("apple", "Apple"),
                SelectOption::new("pear", "Pear"),
            ])
            .with_duration(ms(150)),
        )
    }

    #[test]
    fn test_trigger_shows_placeholder_then_choice() {
        let mut scheduler = FrameScheduler::new();
        let mut select = fruit();
        assert_eq!(select.label(), "Select...");

        dwell(&mut scheduler, &mut select, FlyoutPart::Trigger, ms(300));
        assert!(select.is_expanded());

        let events = dwell(&mut scheduler, &mut select, FlyoutPart::Entry(1), ms(150));
        assert_eq!(events, vec![SelectEvent::Selected("pear".to_string())]);
        assert_eq!(select.label(), "Pear");
        assert!(!select.is_expanded());
    }

    #[test]
    fn test_leaving_while_open_collapses_without_choice() {
        let mut scheduler = FrameScheduler::new();
        let mut select = fruit();

        dwell(&mut scheduler, &mut select, FlyoutPart::Trigger, ms(300));
        dwell(&mut scheduler, &mut select, FlyoutPart::Entry(0), ms(100));
        select
            .handle_pointer(&mut scheduler, FlyoutPart::Container, PointerEvent::Leave)
            .unwrap();

        assert!(scheduler.drive(ms(500), &mut select).is_empty());
        assert_eq!(select.state(), DisclosureState::Closed);
        assert_eq!(select.progress(0), 0.0);
        assert!(select.selected_option().is_none());
    }
}
