//! Console demo
//!
//! Replays a scripted pointer session against a dropdown menu, a carousel
//! and a pagination on virtual time, printing what each widget reports.
//!
//! Run with `RUST_LOG=debug` to see the engine's own log output.

use dnc::PointerEvent::{Click, Enter, Leave};
use dnc::{DncConfig, FrameScheduler, PointerEvent, Scheduler, Wakeable};
use dnc_interactive::{
    Carousel, CarouselOptions, CarouselPart, DropdownItem, DropdownMenu, DropdownMenuOptions,
    FlyoutPart, Pagination, PaginationOptions, PaginationPart, Widget,
};
use std::fmt::Debug;
use std::time::Duration;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

/// Advance `by` and print everything `widget` reported
fn wait<W>(scheduler: &mut FrameScheduler, widget: &mut W, name: &str, by: Duration)
where
    W: Wakeable,
    W::Output: Debug,
{
    for output in scheduler.drive(by, widget) {
        let now = scheduler.now().as_millis();
        println!("[{now:>5}ms] {name}: {output:?}");
    }
}

/// Send one pointer event, printing a rejected click
fn send<W: Widget>(
    scheduler: &mut FrameScheduler,
    widget: &mut W,
    part: W::Part,
    event: PointerEvent,
) {
    if let Err(err) = widget.handle_pointer(scheduler, part, event) {
        let now = scheduler.now().as_millis();
        println!("[{now:>5}ms] rejected: {err}");
    }
}

fn main() {
    env_logger::init();

    let config = DncConfig::default();
    let mut scheduler = FrameScheduler::new();

    println!("-- dropdown menu --");
    let mut actions = DropdownMenu::new(
        &config,
        DropdownMenuOptions::new("Actions")
            .item(DropdownItem::new("edit", "Edit"))
            .divider()
            .item(DropdownItem::new("delete", "Delete").with_danger(true))
            .with_duration(ms(600)),
    );
    send(&mut scheduler, &mut actions, FlyoutPart::Trigger, Click);
    send(&mut scheduler, &mut actions, FlyoutPart::Trigger, Enter);
    wait(&mut scheduler, &mut actions, "actions", ms(300));
    send(&mut scheduler, &mut actions, FlyoutPart::Trigger, Leave);
    send(&mut scheduler, &mut actions, FlyoutPart::Entry(2), Enter);
    wait(&mut scheduler, &mut actions, "actions", ms(600));

    println!("-- carousel --");
    let mut slides = Carousel::new(&config, CarouselOptions::new(4).with_duration(ms(500)))
        .on_interact(|index| println!("        slide {index} is now shown"));
    send(&mut scheduler, &mut slides, CarouselPart::Next, Enter);
    wait(&mut scheduler, &mut slides, "carousel", ms(500));
    send(&mut scheduler, &mut slides, CarouselPart::Next, Leave);
    for x in [400.0, 340.0, 280.0, 220.0] {
        let moved = PointerEvent::moved(x, 50.0);
        let swiped = slides.handle_pointer(&mut scheduler, CarouselPart::Viewport, moved);
        if let Ok(Some(index)) = swiped {
            let now = scheduler.now().as_millis();
            println!("[{now:>5}ms] carousel: swiped to {index}");
        }
        wait(&mut scheduler, &mut slides, "carousel", ms(40));
    }

    println!("-- pagination --");
    let mut pages = Pagination::new(&config, PaginationOptions::new(20).with_duration(ms(400)));
    println!("        {:?}", pages.items());
    send(&mut scheduler, &mut pages, PaginationPart::Page(5), Enter);
    wait(&mut scheduler, &mut pages, "pagination", ms(400));
    println!("        {:?}", pages.items());
}
