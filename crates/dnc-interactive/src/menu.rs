//! Menu bar component with nested submenus
//!
//! Leaf items fire by hovering. Items with children open their submenu after
//! the open delay; every submenu owns its own timer, so leaving one submenu
//! closes only that branch. Leaving the whole bar closes everything.
//!
//! Parts are addressed by index path: `MenuPath::from([1, 0])` is the first
//! child of the second top-level item. A submenu panel lies inside its
//! parent item's bounds, so moving from an item into its submenu is not a
//! leave.

use crate::Widget;
use dnc::{
    DelayedDisclosure, DisclosureEvent, DncConfig, ElementType, HoverActivation, HoverOptions,
    HoverOutcome, InteractionRejected, PointerEvent, Scheduler, Wakeable, Wakeup,
};
use dnc_macros::WithBuilders;
use std::fmt;
use std::time::Duration;

const ELEMENT_TYPE: &str = "menu";

/// A menu entry, optionally holding a submenu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    /// Identifier reported when the item is chosen
    pub id: String,
    /// Visible label
    pub label: String,
    /// Submenu entries; empty for leaf items
    pub children: Vec<MenuItem>,
}

impl MenuItem {
    /// A leaf item
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            children: Vec::new(),
        }
    }

    /// Give this item a submenu
    pub fn with_children(mut self, children: impl IntoIterator<Item = MenuItem>) -> Self {
        self.children = children.into_iter().collect();
        self
    }

    /// Whether this item opens a submenu
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Location of an item inside the menu tree
///
/// The empty path is the menu bar itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MenuPath(Vec<usize>);

impl MenuPath {
    /// The menu bar
    pub fn bar() -> Self {
        Self(Vec::new())
    }

    /// A top-level item
    pub fn item(index: usize) -> Self {
        Self(vec![index])
    }

    /// A child of this item
    pub fn child(mut self, index: usize) -> Self {
        self.0.push(index);
        self
    }

    /// The indices from the top level down
    pub fn indices(&self) -> &[usize] {
        &self.0
    }
}

impl<const N: usize> From<[usize; N]> for MenuPath {
    fn from(indices: [usize; N]) -> Self {
        Self(indices.to_vec())
    }
}

/// What a [`Menu`] reports
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEvent {
    /// The submenu of the item with this id opened
    SubmenuOpened(String),
    /// The leaf item with this id was chosen
    Selected(String),
}

enum EntryKind {
    Leaf(HoverActivation),
    Parent {
        disclosure: DelayedDisclosure,
        children: Vec<MenuEntry>,
    },
}

struct MenuEntry {
    id: String,
    kind: EntryKind,
}

impl MenuEntry {
    fn build(config: &DncConfig, duration: Option<Duration>, item: &MenuItem) -> Self {
        let kind = if item.has_children() {
            EntryKind::Parent {
                disclosure: DelayedDisclosure::new(config.open_delay),
                children: item
                    .children
                    .iter()
                    .map(|child| MenuEntry::build(config, duration, child))
                    .collect(),
            }
        } else {
            let mut hover = HoverOptions::new(ELEMENT_TYPE);
            hover.duration = duration;
            EntryKind::Leaf(HoverActivation::attach(config, hover))
        };
        Self {
            id: item.id.clone(),
            kind,
        }
    }

    /// Stop this entry's timers and close its whole branch
    fn close(&mut self, scheduler: &mut dyn Scheduler) {
        match &mut self.kind {
            EntryKind::Leaf(activation) => activation.pointer_leave(scheduler),
            EntryKind::Parent {
                disclosure,
                children,
            } => {
                for child in children.iter_mut() {
                    child.close(scheduler);
                }
                if disclosure.cancel_and_close(scheduler) == Some(DisclosureEvent::Closed) {
                    log::debug!("submenu {:?} closed", self.id);
                }
            }
        }
    }

    fn handle_pointer(
        &mut self,
        scheduler: &mut dyn Scheduler,
        rest: &[usize],
        event: PointerEvent,
    ) {
        if rest.is_empty() && event == PointerEvent::Leave {
            self.close(scheduler);
            return;
        }
        match (&mut self.kind, rest.split_first()) {
            (EntryKind::Leaf(activation), None) => {
                if event == PointerEvent::Enter {
                    activation.pointer_enter(scheduler);
                }
            }
            (EntryKind::Parent { disclosure, .. }, None) => {
                if event == PointerEvent::Enter {
                    disclosure.schedule_open(scheduler);
                }
            }
            (
                EntryKind::Parent {
                    disclosure,
                    children,
                },
                Some((&index, rest)),
            ) => {
                // Hidden submenu entries cannot be hovered; leaves still apply.
                if !disclosure.is_open() && event == PointerEvent::Enter {
                    return;
                }
                if let Some(child) = children.get_mut(index) {
                    child.handle_pointer(scheduler, rest, event);
                }
            }
            (EntryKind::Leaf(_), Some(_)) => {}
        }
    }

    fn progress(&self, rest: &[usize]) -> f32 {
        match (&self.kind, rest.split_first()) {
            (EntryKind::Leaf(activation), None) => activation.progress(),
            (EntryKind::Parent { children, .. }, Some((&index, rest))) => {
                children.get(index).map_or(0.0, |c| c.progress(rest))
            }
            _ => 0.0,
        }
    }

    fn is_open(&self, rest: &[usize]) -> bool {
        let EntryKind::Parent {
            disclosure,
            children,
        } = &self.kind
        else {
            return false;
        };
        match rest.split_first() {
            None => disclosure.is_open(),
            Some((&index, rest)) => {
                disclosure.is_open() && children.get(index).is_some_and(|child| child.is_open(rest))
            }
        }
    }

    fn on_wakeup(&mut self, scheduler: &mut dyn Scheduler, wakeup: Wakeup) -> Option<Routed> {
        let routed = match &mut self.kind {
            EntryKind::Leaf(activation) => {
                return match activation.on_wakeup(scheduler, wakeup)? {
                    HoverOutcome::Interacted => Some(Routed::Leaf(self.id.clone())),
                    HoverOutcome::Progress(_) => Some(Routed::Consumed),
                };
            }
            EntryKind::Parent {
                disclosure,
                children,
            } => {
                if disclosure.on_wakeup(scheduler, wakeup).is_some() {
                    log::debug!("submenu {:?} opened", self.id);
                    return Some(Routed::Event(MenuEvent::SubmenuOpened(self.id.clone())));
                }
                children
                    .iter_mut()
                    .find_map(|child| child.on_wakeup(scheduler, wakeup))?
            }
        };

        match routed {
            // A chosen item closes the submenu it sits in, not its ancestors.
            Routed::Leaf(id) => {
                self.close(scheduler);
                Some(Routed::Event(MenuEvent::Selected(id)))
            }
            other => Some(other),
        }
    }
}

/// Result of routing a wakeup through the entry tree
enum Routed {
    /// Handled without anything to report
    Consumed,
    /// A leaf completed; its parent still has to close
    Leaf(String),
    /// Ready to report
    Event(MenuEvent),
}

/// Options for a [`Menu`]
#[derive(Debug, Clone, Default, PartialEq, WithBuilders)]
pub struct MenuOptions {
    /// Top-level items
    pub items: Vec<MenuItem>,
    /// Id of the current item
    #[with_builders(some)]
    pub active_id: Option<String>,
    /// Hover duration override for leaf items
    #[with_builders(some)]
    pub duration: Option<Duration>,
}

impl MenuOptions {
    /// Options for a menu bar with these items
    pub fn new(items: impl IntoIterator<Item = MenuItem>) -> Self {
        Self {
            items: items.into_iter().collect(),
            ..Default::default()
        }
    }
}

/// A hover-driven menu bar
pub struct Menu {
    items: Vec<MenuItem>,
    entries: Vec<MenuEntry>,
    active_id: Option<String>,
    on_interact: Option<Box<dyn FnMut(&str)>>,
}

impl Menu {
    /// Create a menu bar bound to `config`
    pub fn new(config: &DncConfig, options: MenuOptions) -> Self {
        let entries = options
            .items
            .iter()
            .map(|item| MenuEntry::build(config, options.duration, item))
            .collect();
        Self {
            items: options.items,
            entries,
            active_id: options.active_id,
            on_interact: None,
        }
    }

    /// Set a callback called with the id of every chosen item
    pub fn on_interact(mut self, f: impl FnMut(&str) + 'static) -> Self {
        self.on_interact = Some(Box::new(f));
        self
    }

    /// The item tree
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Whether `id` is the current item
    pub fn is_active(&self, id: &str) -> bool {
        self.active_id.as_deref() == Some(id)
    }

    /// Whether the submenu at `path` (and every submenu above it) is open
    pub fn is_open(&self, path: &MenuPath) -> bool {
        match path.indices().split_first() {
            Some((&index, rest)) => self.entries.get(index).is_some_and(|e| e.is_open(rest)),
            None => false,
        }
    }

    /// Fill progress of the leaf item at `path`
    pub fn progress(&self, path: &MenuPath) -> f32 {
        match path.indices().split_first() {
            Some((&index, rest)) => self.entries.get(index).map_or(0.0, |e| e.progress(rest)),
            None => 0.0,
        }
    }

    /// Close every submenu and stop every item
    pub fn close_all(&mut self, scheduler: &mut dyn Scheduler) {
        for entry in &mut self.entries {
            entry.close(scheduler);
        }
    }
}

impl Widget for Menu {
    type Part = MenuPath;
    type Response = ();

    fn element_type(&self) -> ElementType {
        ELEMENT_TYPE.into()
    }

    fn handle_pointer(
        &mut self,
        scheduler: &mut dyn Scheduler,
        part: MenuPath,
        event: PointerEvent,
    ) -> Result<(), InteractionRejected> {
        if event == PointerEvent::Click {
            return Err(self.reject());
        }
        match part.indices().split_first() {
            None => {
                if event == PointerEvent::Leave {
                    self.close_all(scheduler);
                }
            }
            Some((&index, rest)) => {
                if let Some(entry) = self.entries.get_mut(index) {
                    entry.handle_pointer(scheduler, rest, event);
                }
            }
        }
        Ok(())
    }
}

impl Wakeable for Menu {
    type Output = MenuEvent;

    fn on_wakeup(&mut self, scheduler: &mut dyn Scheduler, wakeup: Wakeup) -> Option<MenuEvent> {
        let routed = self
            .entries
            .iter_mut()
            .find_map(|entry| entry.on_wakeup(scheduler, wakeup))?;

        let event = match routed {
            Routed::Consumed => return None,
            Routed::Leaf(id) => MenuEvent::Selected(id),
            Routed::Event(event) => event,
        };
        if let MenuEvent::Selected(ref id) = event {
            if let Some(ref mut on_interact) = self.on_interact {
                on_interact(id);
            }
        }
        Some(event)
    }
}

impl fmt::Debug for Menu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Menu")
            .field("items", &self.items)
            .field("active_id", &self.active_id)
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

    fn items() -> Vec<MenuItem> {
        vec![
            MenuItem::new("home", "Home"),
            MenuItem::new("file", "File").with_children([
                MenuItem::new("new", "New"),
                MenuItem::new("export", "Export").with_children([
                    MenuItem::new("pdf", "PDF"),
                    MenuItem::new("png", "PNG"),
                ]),
            ]),
        ]
    }

    fn menu() -> (Menu, Rc<RefCell<Vec<String>>>) {
        let chosen = Rc::new(RefCell::new(Vec::new()));
        let sink = chosen.clone();
        let options = MenuOptions::new(items())
            .with_active_id("home".to_string())
            .with_duration(ms(100));
        let menu = Menu::new(&DncConfig::default(), options)
            .on_interact(move |id| sink.borrow_mut().push(id.to_string()));
        (menu, chosen)
    }

    #[test]
    fn test_top_level_leaf_fires() {
        let mut scheduler = FrameScheduler::new();
        let (mut menu, chosen) = menu();

        let events = dwell(&mut scheduler, &mut menu, MenuPath::item(0), ms(100));
        assert_eq!(events, vec![MenuEvent::Selected("home".to_string())]);
        assert_eq!(*chosen.borrow(), vec!["home".to_string()]);
        assert!(menu.is_active("home"));
    }

    #[test]
    fn test_submenu_opens_after_delay_and_child_selection_closes_it() {
        let mut scheduler = FrameScheduler::new();
        let (mut menu, chosen) = menu();

        let events = dwell(&mut scheduler, &mut menu, MenuPath::item(1), ms(300));
        assert_eq!(events, vec![MenuEvent::SubmenuOpened("file".to_string())]);
        assert!(menu.is_open(&MenuPath::item(1)));

        let events = dwell(&mut scheduler, &mut menu, MenuPath::from([1, 0]), ms(100));
        assert_eq!(events, vec![MenuEvent::Selected("new".to_string())]);
        assert!(!menu.is_open(&MenuPath::item(1)));
        assert_eq!(*chosen.borrow(), vec!["new".to_string()]);
    }

    #[test]
    fn test_hidden_children_cannot_be_hovered() {
        let mut scheduler = FrameScheduler::new();
        let (mut menu, chosen) = menu();

        let events = dwell(&mut scheduler, &mut menu, MenuPath::from([1, 0]), ms(500));
        assert!(events.is_empty());
        assert!(chosen.borrow().is_empty());
    }

    #[test]
    fn test_leaving_nested_submenu_keeps_parent_open() {
        let mut scheduler = FrameScheduler::new();
        let (mut menu, _) = menu();
        let export = MenuPath::item(1).child(1);

        dwell(&mut scheduler, &mut menu, MenuPath::item(1), ms(300));
        let events = dwell(&mut scheduler, &mut menu, export.clone(), ms(300));
        assert_eq!(events, vec![MenuEvent::SubmenuOpened("export".to_string())]);
        assert!(menu.is_open(&export));

        menu.handle_pointer(&mut scheduler, export.clone(), PointerEvent::Leave)
            .unwrap();
        assert!(!menu.is_open(&export));
        assert!(menu.is_open(&MenuPath::item(1)));

        menu.handle_pointer(&mut scheduler, MenuPath::bar(), PointerEvent::Leave)
            .unwrap();
        assert!(!menu.is_open(&MenuPath::item(1)));
    }

    #[test]
    fn test_deep_selection_closes_only_innermost_submenu() {
        let mut scheduler = FrameScheduler::new();
        let (mut menu, _) = menu();
        let export = MenuPath::item(1).child(1);

        dwell(&mut scheduler, &mut menu, MenuPath::item(1), ms(300));
        dwell(&mut scheduler, &mut menu, export.clone(), ms(300));
        let events = dwell(&mut scheduler, &mut menu, export.clone().child(1), ms(100));

        assert_eq!(events, vec![MenuEvent::Selected("png".to_string())]);
        assert!(!menu.is_open(&export));
        assert!(menu.is_open(&MenuPath::item(1)));
    }

    #[test]
    fn test_click_on_any_item_is_rejected() {
        let mut scheduler = FrameScheduler::new();
        let (mut menu, _) = menu();

        let err = menu
            .handle_pointer(&mut scheduler, MenuPath::item(1), PointerEvent::Click)
            .unwrap_err();
        assert_eq!(err.element_type.as_str(), "menu");
    }
}
