//! Several widgets hosted on one scheduler, the way a frame loop drives them.

use dnc::{
    ConfigOverrides, DisclosureEvent, DncConfig, FrameScheduler, HoverOutcome, PointerEvent,
    Scheduler, Wakeable, Wakeup,
};
use dnc_interactive::{
    Button, ButtonOptions, ButtonPart, Carousel, CarouselOptions, CarouselPart, DropdownItem,
    DropdownMenu, DropdownMenuOptions, FlyoutPart, Menu, MenuItem, MenuOptions, MenuPath,
    NumberInput, NumberInputEvent, NumberInputOptions, NumberInputPart, Pagination,
    PaginationOptions, PaginationPart, Popover, PopoverOptions, PopoverPart, Search, SearchEvent,
    SearchOptions, SearchPart, Select, SelectOption, SelectOptions, TextInput, TextInputOptions,
    TextInputPart, Tooltip, TooltipPart, Widget,
};
use std::time::Duration;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[derive(Debug, PartialEq)]
enum Reported {
    Button(HoverOutcome),
    Tooltip(DisclosureEvent),
    Search(SearchEvent),
}

impl Reported {
    fn is_progress(&self) -> bool {
        matches!(self, Reported::Button(HoverOutcome::Progress(_)))
    }
}

/// A save button with a tooltip, next to a search field
struct Toolbar {
    save: Button,
    hint: Tooltip,
    search: Search,
}

impl Toolbar {
    fn new(config: &DncConfig) -> Self {
        Self {
            save: Button::new(config, ButtonOptions::new("Save")),
            hint: Tooltip::new(config, "Rest here to save"),
            search: Search::new(config, SearchOptions::default()).on_search(|_| {}),
        }
    }

    fn dispatch(&mut self, scheduler: &mut dyn Scheduler, wakeup: Wakeup) -> Option<Reported> {
        if let Some(outcome) = self.save.on_wakeup(scheduler, wakeup) {
            return Some(Reported::Button(outcome));
        }
        if let Some(event) = self.hint.on_wakeup(scheduler, wakeup) {
            return Some(Reported::Tooltip(event));
        }
        let event = self.search.on_wakeup(scheduler, wakeup);
        event.map(Reported::Search)
    }

    fn run(&mut self, scheduler: &mut FrameScheduler, by: Duration) -> Vec<Reported> {
        let mut reported = Vec::new();
        scheduler.advance(by, |scheduler, wakeup| {
            reported.extend(self.dispatch(scheduler, wakeup));
        });
        // Progress frames are only interesting to a renderer.
        reported.retain(|r| !r.is_progress());
        reported
    }
}

#[test]
fn widgets_share_one_scheduler() {
    init_logger();
    let overrides = ConfigOverrides::default().with_duration(ms(400));
    let config = DncConfig::default().configured(overrides);
    let mut scheduler = FrameScheduler::new();
    let mut toolbar = Toolbar::new(&config);

    toolbar
        .save
        .handle_pointer(&mut scheduler, ButtonPart::Body, PointerEvent::Enter)
        .unwrap();
    toolbar
        .hint
        .handle_pointer(&mut scheduler, TooltipPart::Target, PointerEvent::Enter)
        .unwrap();

    assert_eq!(
        toolbar.run(&mut scheduler, ms(200)),
        vec![Reported::Tooltip(DisclosureEvent::Opened)]
    );
    assert_eq!(
        toolbar.run(&mut scheduler, ms(200)),
        vec![Reported::Button(HoverOutcome::Interacted)]
    );

    toolbar
        .save
        .handle_pointer(&mut scheduler, ButtonPart::Body, PointerEvent::Leave)
        .unwrap();
    toolbar
        .hint
        .handle_pointer(&mut scheduler, TooltipPart::Target, PointerEvent::Leave)
        .unwrap();
    assert!(!toolbar.hint.is_visible());

    toolbar
        .search
        .handle_pointer(&mut scheduler, SearchPart::Field, PointerEvent::Enter)
        .unwrap();
    let reported = toolbar.run(&mut scheduler, ms(400));
    assert!(reported.contains(&Reported::Search(SearchEvent::Activated)));

    assert!(toolbar.search.input(&mut scheduler, "rust"));
    toolbar.run(&mut scheduler, ms(100));
    assert!(toolbar.search.input(&mut scheduler, "rusty"));
    let reported = toolbar.run(&mut scheduler, ms(300));
    assert_eq!(
        reported,
        vec![Reported::Search(SearchEvent::Query("rusty".to_string()))]
    );
    assert!(scheduler.is_idle());
}

#[test]
fn number_input_steps_while_held() {
    init_logger();
    let mut scheduler = FrameScheduler::new();
    let mut input = NumberInput::new(
        &DncConfig::default(),
        NumberInputOptions::new(0.0)
            .with_max(2.0)
            .with_duration(ms(100)),
    );

    input
        .handle_pointer(
            &mut scheduler,
            NumberInputPart::Increment,
            PointerEvent::Enter,
        )
        .unwrap();
    let events = scheduler.drive(ms(300), &mut input);
    assert_eq!(
        events,
        vec![
            NumberInputEvent::Changed(1.0),
            NumberInputEvent::Changed(2.0),
            NumberInputEvent::Changed(2.0),
        ]
    );
    assert_eq!(input.value(), 2.0);
}

fn rejected<W: Widget>(mut widget: W, part: W::Part) -> String {
    let mut scheduler = FrameScheduler::new();
    widget
        .handle_pointer(&mut scheduler, part, PointerEvent::Click)
        .err()
        .map(|err| err.to_string())
        .unwrap_or_default()
}

#[test]
fn every_widget_rejects_clicks() {
    let config = DncConfig::default();

    let button = Button::new(&config, ButtonOptions::new("Ok"));
    let input = TextInput::new(&config, TextInputOptions::new(""));
    let number = NumberInput::new(&config, NumberInputOptions::new(1.0));
    let search = Search::new(&config, SearchOptions::default());
    let dropdown = DropdownMenu::new(
        &config,
        DropdownMenuOptions::new("Actions").item(DropdownItem::new("edit", "Edit")),
    );
    let select = Select::new(&config, SelectOptions::new([SelectOption::new("a", "A")]));
    let file = MenuItem::new("file", "File").with_children([MenuItem::new("new", "New")]);
    let menu = Menu::new(&config, MenuOptions::new([file]));
    let tooltip = Tooltip::new(&config, "tip");
    let popover = Popover::new(&config, PopoverOptions::new("body"));
    let carousel = Carousel::new(&config, CarouselOptions::new(3));
    let pagination = Pagination::new(&config, PaginationOptions::new(5));

    let rejections = [
        rejected(button, ButtonPart::Body),
        rejected(input, TextInputPart::Field),
        rejected(number, NumberInputPart::Value),
        rejected(search, SearchPart::Field),
        rejected(dropdown, FlyoutPart::Trigger),
        rejected(select, FlyoutPart::Entry(0)),
        rejected(menu, MenuPath::from([0, 0])),
        rejected(tooltip, TooltipPart::Target),
        rejected(popover, PopoverPart::Trigger),
        rejected(carousel, CarouselPart::Dot(1)),
        rejected(pagination, PaginationPart::Next),
    ];

    let expected = [
        "button",
        "input",
        "number-input",
        "search",
        "dropdown-menu",
        "select",
        "menu",
        "tooltip",
        "popover",
        "carousel",
        "pagination",
    ]
    .map(|element_type| format!("click detected on {element_type}"));
    assert_eq!(rejections, expected);
}
