//! Timing properties of hover activation, flyout disclosure and swipes,
//! exercised through the public API with virtual time.

use dnc::{
    DelayedDisclosure, DisclosureEvent, DisclosureState, DncConfig, FrameScheduler,
    HoverActivation, HoverOptions, HoverOutcome, PointerEvent, SwipeDetector, SwipeDirection,
};
use proptest::prelude::*;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn counting(options: HoverOptions) -> (HoverActivation, Rc<Cell<u32>>) {
    let count = Rc::new(Cell::new(0));
    let counter = count.clone();
    let activation = HoverActivation::attach(&DncConfig::default(), options)
        .on_interact(move || counter.set(counter.get() + 1));
    (activation, count)
}

fn completions(outcomes: &[HoverOutcome]) -> usize {
    outcomes
        .iter()
        .filter(|outcome| **outcome == HoverOutcome::Interacted)
        .count()
}

proptest! {
    #[test]
    fn full_dwell_fires_exactly_once(duration in 1u64..5_000) {
        let mut scheduler = FrameScheduler::new();
        let (mut button, count) = counting(HoverOptions::new("button").with_duration(ms(duration)));

        button.handle_pointer(&mut scheduler, PointerEvent::Enter).unwrap();
        let outcomes = scheduler.drive(ms(duration), &mut button);
        prop_assert_eq!(completions(&outcomes), 1);
        prop_assert_eq!(button.progress(), 1.0);

        // Staying on the element afterwards does nothing more.
        let outcomes = scheduler.drive(ms(duration * 2), &mut button);
        prop_assert_eq!(completions(&outcomes), 0);
        prop_assert_eq!(count.get(), 1);
        prop_assert!(scheduler.is_idle());
    }

    #[test]
    fn leaving_early_never_fires(duration in 20u64..5_000, fraction in 0.0f64..1.0) {
        let mut scheduler = FrameScheduler::new();
        let (mut button, count) = counting(HoverOptions::new("button").with_duration(ms(duration)));
        let dwell = (duration as f64 * fraction) as u64;

        button.handle_pointer(&mut scheduler, PointerEvent::Enter).unwrap();
        scheduler.drive(ms(dwell), &mut button);
        button.handle_pointer(&mut scheduler, PointerEvent::Leave).unwrap();
        prop_assert_eq!(button.progress(), 0.0);

        let outcomes = scheduler.drive(ms(duration * 2), &mut button);
        prop_assert!(outcomes.is_empty());
        prop_assert_eq!(count.get(), 0);
        prop_assert_eq!(button.progress(), 0.0);
    }

    #[test]
    fn repeat_fires_once_per_elapsed_duration(duration in 20u64..200, hovered in 0u64..2_000) {
        let mut scheduler = FrameScheduler::new();
        let (mut stepper, count) = counting(
            HoverOptions::new("number-input").with_duration(ms(duration)).with_repeat(true),
        );

        stepper.handle_pointer(&mut scheduler, PointerEvent::Enter).unwrap();
        let outcomes = scheduler.drive(ms(hovered), &mut stepper);
        let expected = (hovered / duration) as usize;
        prop_assert_eq!(completions(&outcomes), expected);
        prop_assert_eq!(count.get() as usize, expected);
    }
}

#[test]
fn click_is_rejected_in_every_state() {
    let mut scheduler = FrameScheduler::new();
    let (mut button, count) = counting(HoverOptions::new("button").with_duration(ms(200)));

    let idle = button.handle_pointer(&mut scheduler, PointerEvent::Click);
    assert_eq!(idle.unwrap_err().to_string(), "click detected on button");

    button
        .handle_pointer(&mut scheduler, PointerEvent::Enter)
        .unwrap();
    scheduler.drive(ms(100), &mut button);
    let progress = button.progress();
    let running = button.handle_pointer(&mut scheduler, PointerEvent::Click);
    assert!(running.is_err());
    assert_eq!(button.progress(), progress);
    assert!(button.is_running());

    scheduler.drive(ms(100), &mut button);
    let fired = button.handle_pointer(&mut scheduler, PointerEvent::Click);
    assert!(fired.is_err());
    assert_eq!(count.get(), 1);
}

#[test]
fn disclosure_opens_once_after_delay() {
    let mut scheduler = FrameScheduler::new();
    let mut panel = DelayedDisclosure::new(DncConfig::default().open_delay);

    panel.schedule_open(&mut scheduler);
    assert_eq!(panel.state(), DisclosureState::PendingOpen);
    assert!(scheduler.drive(ms(299), &mut panel).is_empty());
    let opened = scheduler.drive(ms(1), &mut panel);
    assert_eq!(opened, vec![DisclosureEvent::Opened]);

    // Re-entering an open panel keeps it open without a second event.
    panel.schedule_open(&mut scheduler);
    assert!(scheduler.drive(ms(1_000), &mut panel).is_empty());
    assert!(panel.is_open());
}

#[test]
fn disclosure_leave_before_delay_stays_closed() {
    let mut scheduler = FrameScheduler::new();
    let mut panel = DelayedDisclosure::new(ms(300));

    panel.schedule_open(&mut scheduler);
    scheduler.drive(ms(200), &mut panel);
    assert_eq!(panel.cancel_and_close(&mut scheduler), None);

    assert!(scheduler.drive(ms(500), &mut panel).is_empty());
    assert_eq!(panel.state(), DisclosureState::Closed);
}

#[test]
fn disclosure_leave_while_open_closes_immediately() {
    let mut scheduler = FrameScheduler::new();
    let mut panel = DelayedDisclosure::new(ms(300));

    panel.schedule_open(&mut scheduler);
    scheduler.drive(ms(300), &mut panel);
    assert_eq!(
        panel.cancel_and_close(&mut scheduler),
        Some(DisclosureEvent::Closed)
    );
    assert!(!panel.is_open());
    assert!(scheduler.is_idle());
}

#[test]
fn swipe_fires_then_waits_for_cooldown() {
    let mut swipe = SwipeDetector::default();
    let sweep = |swipe: &mut SwipeDetector, start: u64| {
        [(300.0, 0), (260.0, 50), (220.0, 100)]
            .into_iter()
            .filter_map(|(x, t)| swipe.sample(x, ms(start + t)))
            .collect::<Vec<_>>()
    };

    assert_eq!(sweep(&mut swipe, 0), vec![SwipeDirection::Next]);
    assert!(swipe.is_empty());

    // Same gesture 150ms later: still cooling down.
    assert!(sweep(&mut swipe, 150).is_empty());

    swipe.handle_pointer(PointerEvent::Leave, ms(300));
    assert_eq!(sweep(&mut swipe, 600), vec![SwipeDirection::Next]);
}
