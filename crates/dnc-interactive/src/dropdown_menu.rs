//! Dropdown menu component
//!
//! A trigger that opens a panel of actions. Actions fire by hovering;
//! dividers only separate groups.

use crate::{Flyout, FlyoutEvent, FlyoutPart, Widget};
use dnc::{
    DisclosureState, DncConfig, ElementType, InteractionRejected, PointerEvent, Scheduler,
    Wakeable, Wakeup,
};
use dnc_macros::WithBuilders;
use std::fmt;
use std::time::Duration;

/// One row of a dropdown panel
#[derive(Debug, Clone, PartialEq)]
pub enum DropdownEntry {
    /// A selectable action
    Item(DropdownItem),
    /// A separator line
    Divider,
}

/// A selectable dropdown action
#[derive(Debug, Clone, PartialEq, WithBuilders)]
pub struct DropdownItem {
    /// Identifier reported when chosen
    #[with_builders(into)]
    pub id: String,
    /// Visible label
    #[with_builders(into)]
    pub label: String,
    /// Optional leading icon
    #[with_builders(some)]
    pub icon: Option<String>,
    /// Rendered as a destructive action
    pub danger: bool,
}

impl DropdownItem {
    /// An action with the given id and label
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: None,
            danger: false,
        }
    }
}

impl From<DropdownItem> for DropdownEntry {
    fn from(item: DropdownItem) -> Self {
        DropdownEntry::Item(item)
    }
}

/// Where the panel opens relative to the trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropdownPosition {
    /// Below the trigger, left-aligned
    #[default]
    BottomStart,
    /// Below the trigger, right-aligned
    BottomEnd,
    /// Above the trigger, left-aligned
    TopStart,
    /// Above the trigger, right-aligned
    TopEnd,
}

/// Options for a [`DropdownMenu`]
#[derive(Debug, Clone, Default, PartialEq, WithBuilders)]
pub struct DropdownMenuOptions {
    /// Trigger label
    #[with_builders(into)]
    pub trigger: String,
    /// Panel rows
    pub entries: Vec<DropdownEntry>,
    /// Panel placement
    pub position: DropdownPosition,
    /// Hover duration override for the actions
    #[with_builders(some)]
    pub duration: Option<Duration>,
}

impl DropdownMenuOptions {
    /// Options for a dropdown with the given trigger label
    pub fn new(trigger: impl Into<String>) -> Self {
        Self {
            trigger: trigger.into(),
            ..Default::default()
        }
    }

    /// Append an action
    pub fn item(mut self, item: DropdownItem) -> Self {
        self.entries.push(item.into());
        self
    }

    /// Append a divider
    pub fn divider(mut self) -> Self {
        self.entries.push(DropdownEntry::Divider);
        self
    }
}

/// A hover-opened dropdown of actions
pub struct DropdownMenu {
    trigger: String,
    entries: Vec<DropdownEntry>,
    position: DropdownPosition,
    flyout: Flyout,
    on_interact: Option<Box<dyn FnMut(&str)>>,
}

impl DropdownMenu {
    /// Create a dropdown bound to `config`
    pub fn new(config: &DncConfig, options: DropdownMenuOptions) -> Self {
        let selectable = options
            .entries
            .iter()
            .map(|entry| matches!(entry, DropdownEntry::Item(_)));
        let flyout = Flyout::new(config, "dropdown-menu", options.duration, selectable);

        Self {
            trigger: options.trigger,
            entries: options.entries,
            position: options.position,
            flyout,
            on_interact: None,
        }
    }

    /// Set a callback called with the id of the chosen action
    pub fn on_interact(mut self, f: impl FnMut(&str) + 'static) -> Self {
        self.on_interact = Some(Box::new(f));
        self
    }

    /// Trigger label
    pub fn trigger(&self) -> &str {
        &self.trigger
    }

    /// Panel rows
    pub fn entries(&self) -> &[DropdownEntry] {
        &self.entries
    }

    /// Panel placement
    pub fn position(&self) -> DropdownPosition {
        self.position
    }

    /// Panel state
    pub fn state(&self) -> DisclosureState {
        self.flyout.state()
    }

    /// Whether the panel is visible
    pub fn is_open(&self) -> bool {
        self.flyout.is_open()
    }

    /// Fill progress of the row at `index`
    pub fn progress(&self, index: usize) -> f32 {
        self.flyout.progress(index)
    }
}

/// What a [`DropdownMenu`] reports
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropdownEvent {
    /// The panel opened
    Opened,
    /// The action with this id was chosen
    Chosen(String),
}

impl Widget for DropdownMenu {
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

impl Wakeable for DropdownMenu {
    type Output = DropdownEvent;

    fn on_wakeup(
        &mut self,
        scheduler: &mut dyn Scheduler,
        wakeup: Wakeup,
    ) -> Option<DropdownEvent> {
        match self.flyout.on_wakeup(scheduler, wakeup)? {
            FlyoutEvent::Opened => Some(DropdownEvent::Opened),
            FlyoutEvent::Chosen(index) => {
                let DropdownEntry::Item(item) = self.entries.get(index)? else {
                    return None;
                };
                if let Some(ref mut on_interact) = self.on_interact {
                    on_interact(&item.id);
                }
                Some(DropdownEvent::Chosen(item.id.clone()))
            }
        }
    }
}

impl fmt::Debug for DropdownMenu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DropdownMenu")
            .field("trigger", &self.trigger)
            .field("entries", &self.entries)
            .field("position", &self.position)
            .field("flyout", &self.flyout)
            .finish_non_exhaustive()
    }
}
