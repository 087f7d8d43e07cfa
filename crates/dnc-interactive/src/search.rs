//! Search field with a hover-to-clear button and debounced queries

use crate::Widget;
use dnc::{
    Debouncer, DncConfig, ElementType, FocusActivation, FocusMode, FocusOptions, FocusOutcome,
    HoverActivation, HoverOptions, HoverOutcome, InteractionRejected, PointerEvent, Scheduler,
    Wakeable, Wakeup,
};
use dnc_macros::WithBuilders;
use std::fmt;
use std::time::Duration;

/// Options for a [`Search`] field
#[derive(Debug, Clone, PartialEq, WithBuilders)]
pub struct SearchOptions {
    /// Initial query
    #[with_builders(into)]
    pub value: String,
    /// Placeholder shown while the field is empty
    #[with_builders(into)]
    pub placeholder: String,
    /// Quiet period before a query is reported; falls back to the config
    #[with_builders(some)]
    pub debounce: Option<Duration>,
    /// Hover duration override
    #[with_builders(some)]
    pub duration: Option<Duration>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            value: String::new(),
            placeholder: "Search...".to_string(),
            debounce: None,
            duration: None,
        }
    }
}

/// Pointer targets of a [`Search`] field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPart {
    /// The wrapper around the editable field
    Field,
    /// The clear button (only interactive while there is text)
    Clear,
}

/// What a [`Search`] field reports
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    /// The field became editable
    Activated,
    /// The clear button emptied the field
    Cleared,
    /// A query settled after the debounce period
    Query(String),
}

/// Search box built from a text field, a clear button and a debouncer
pub struct Search {
    value: String,
    placeholder: String,
    field: FocusActivation,
    clear: HoverActivation,
    debounce: Debouncer<String>,
    on_interact: Option<Box<dyn FnMut(&str)>>,
    on_search: Option<Box<dyn FnMut(&str)>>,
}

impl Search {
    /// Create a search field bound to `config`
    pub fn new(config: &DncConfig, options: SearchOptions) -> Self {
        let mut field = FocusOptions::new("search");
        field.duration = options.duration;
        let mut clear = HoverOptions::new("search");
        clear.duration = options.duration;

        Self {
            value: options.value,
            placeholder: options.placeholder,
            field: FocusActivation::attach(config, field),
            clear: HoverActivation::attach(config, clear),
            debounce: Debouncer::new(options.debounce.unwrap_or(config.search_debounce)),
            on_interact: None,
            on_search: None,
        }
    }

    /// Set a callback called with the text after every edit (and after clearing)
    pub fn on_interact(mut self, f: impl FnMut(&str) + 'static) -> Self {
        self.on_interact = Some(Box::new(f));
        self
    }

    /// Set a callback called with settled queries
    pub fn on_search(mut self, f: impl FnMut(&str) + 'static) -> Self {
        self.on_search = Some(Box::new(f));
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
        self.field.mode()
    }

    /// Whether the clear button is shown
    pub fn clear_visible(&self) -> bool {
        !self.value.is_empty()
    }

    /// Fill progress of a part in `[0, 1]`
    pub fn progress(&self, part: SearchPart) -> f32 {
        match part {
            SearchPart::Field => self.field.progress(),
            SearchPart::Clear => self.clear.progress(),
        }
    }

    /// The host edited the field's text
    ///
    /// Ignored (returns `false`) while the field is dormant.
    pub fn input(&mut self, scheduler: &mut dyn Scheduler, text: impl Into<String>) -> bool {
        if !self.field.is_editable() {
            return false;
        }
        self.value = text.into();
        if self.value.is_empty() {
            // The clear button disappears with the text.
            self.clear.pointer_leave(scheduler);
        }
        if let Some(ref mut on_interact) = self.on_interact {
            on_interact(&self.value);
        }
        if self.on_search.is_some() {
            self.debounce.push(scheduler, self.value.clone());
        }
        true
    }

    /// The field lost focus
    pub fn blur(&mut self) {
        self.field.on_blur();
    }

    fn clear_query(&mut self, scheduler: &mut dyn Scheduler) {
        self.value.clear();
        // A pending query would only repeat the empty one reported below.
        self.debounce.cancel(scheduler);
        self.clear.pointer_leave(scheduler);
        if let Some(ref mut on_interact) = self.on_interact {
            on_interact("");
        }
        if let Some(ref mut on_search) = self.on_search {
            on_search("");
        }
    }
}

impl Widget for Search {
    type Part = SearchPart;
    type Response = ();

    fn element_type(&self) -> ElementType {
        self.field.hover().binding().element_type().clone()
    }

    fn handle_pointer(
        &mut self,
        scheduler: &mut dyn Scheduler,
        part: SearchPart,
        event: PointerEvent,
    ) -> Result<(), InteractionRejected> {
        match part {
            SearchPart::Field => self.field.handle_pointer(scheduler, event),
            SearchPart::Clear => {
                if event == PointerEvent::Enter && !self.clear_visible() {
                    return Ok(());
                }
                self.clear.handle_pointer(scheduler, event)
            }
        }
    }
}

impl Wakeable for Search {
    type Output = SearchEvent;

    fn on_wakeup(&mut self, scheduler: &mut dyn Scheduler, wakeup: Wakeup) -> Option<SearchEvent> {
        if let Some(outcome) = self.field.on_wakeup(scheduler, wakeup) {
            return (outcome == FocusOutcome::Activated).then_some(SearchEvent::Activated);
        }
        if let Some(outcome) = self.clear.on_wakeup(scheduler, wakeup) {
            if outcome == HoverOutcome::Interacted {
                self.clear_query(scheduler);
                return Some(SearchEvent::Cleared);
            }
            return None;
        }

        let query = self.debounce.on_wakeup(scheduler, wakeup)?;
        log::debug!("search query settled: {:?}", query);
        if let Some(ref mut on_search) = self.on_search {
            on_search(&query);
        }
        Some(SearchEvent::Query(query))
    }
}

impl fmt::Debug for Search {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Search")
            .field("value", &self.value)
            .field("placeholder", &self.placeholder)
            .field("field", &self.field)
            .field("clear", &self.clear)
            .field("debounce", &self.debounce)
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

    fn search_with_log() -> (Search, Rc<RefCell<Vec<String>>>) {
        let config = DncConfig::default().with_duration(ms(100));
        let queries = Rc::new(RefCell::new(Vec::new()));
        let sink = queries.clone();
        let search = Search::new(&config, SearchOptions::default())
            .on_search(move |q| sink.borrow_mut().push(q.to_string()));
        (search, queries)
    }

    #[test]
    fn test_queries_are_debounced() {
        let mut scheduler = FrameScheduler::new();
        let (mut search, queries) = search_with_log();

        dwell(&mut scheduler, &mut search, SearchPart::Field, ms(100));
        assert_eq!(search.mode(), FocusMode::Focused);

        search.input(&mut scheduler, "c");
        scheduler.drive(ms(100), &mut search);
        search.input(&mut scheduler, "cr");
        scheduler.drive(ms(100), &mut search);
        search.input(&mut scheduler, "crab");
        let events = scheduler.drive(ms(300), &mut search);

        assert_eq!(events, vec![SearchEvent::Query("crab".to_string())]);
        assert_eq!(*queries.borrow(), vec!["crab".to_string()]);
    }

    #[test]
    fn test_clear_button_empties_field_and_reports_empty_query() {
        let mut scheduler = FrameScheduler::new();
        let (mut search, queries) = search_with_log();

        dwell(&mut scheduler, &mut search, SearchPart::Field, ms(100));
        search.input(&mut scheduler, "rust");
        assert!(search.clear_visible());

        let events = dwell(&mut scheduler, &mut search, SearchPart::Clear, ms(100));
        assert_eq!(events, vec![SearchEvent::Cleared]);
        assert_eq!(search.value(), "");
        assert!(!search.clear_visible());

        scheduler.drive(ms(1000), &mut search);
        assert_eq!(*queries.borrow(), vec![String::new()]);
    }

    #[test]
    fn test_emptying_field_stops_running_clear() {
        let mut scheduler = FrameScheduler::new();
        let (mut search, queries) = search_with_log();

        dwell(&mut scheduler, &mut search, SearchPart::Field, ms(100));
        search.input(&mut scheduler, "rust");
        dwell(&mut scheduler, &mut search, SearchPart::Clear, ms(50));
        search.input(&mut scheduler, "");

        let events = scheduler.drive(ms(1000), &mut search);
        assert_eq!(events, vec![SearchEvent::Query(String::new())]);
        assert_eq!(search.progress(SearchPart::Clear), 0.0);
        assert_eq!(*queries.borrow(), vec![String::new()]);
    }

    #[test]
    fn test_hidden_clear_button_is_inert() {
        let mut scheduler = FrameScheduler::new();
        let (mut search, _) = search_with_log();

        let events = dwell(&mut scheduler, &mut search, SearchPart::Clear, ms(500));
        assert!(events.is_empty());
        assert_eq!(search.progress(SearchPart::Clear), 0.0);
    }
}
