//! Carousel component
//!
//! Slides change by resting on the arrow zones or on an indicator dot, or by
//! sweeping the pointer across the viewport. Navigation wraps around at
//! both ends.

use crate::Widget;
use dnc::{
    DncConfig, ElementType, HoverActivation, HoverOptions, HoverOutcome, InteractionRejected,
    PointerEvent, Scheduler, SwipeDetector, SwipeDirection, SwipeThresholds, Wakeable, Wakeup,
};
use dnc_macros::WithBuilders;
use std::fmt;
use std::time::Duration;

const ELEMENT_TYPE: &str = "carousel";

/// Options for a [`Carousel`]
#[derive(Debug, Clone, PartialEq, WithBuilders)]
pub struct CarouselOptions {
    /// Number of slides
    pub count: usize,
    /// Initially shown slide (clamped into range)
    pub active_index: usize,
    /// Show the prev/next zones
    pub show_arrows: bool,
    /// Show the indicator dots
    pub show_dots: bool,
    /// Swipe thresholds; fall back to the config
    #[with_builders(some)]
    pub swipe: Option<SwipeThresholds>,
    /// Hover duration override for arrows and dots
    #[with_builders(some)]
    pub duration: Option<Duration>,
}

impl CarouselOptions {
    /// Options for a carousel of `count` slides
    pub fn new(count: usize) -> Self {
        Self {
            count,
            active_index: 0,
            show_arrows: true,
            show_dots: true,
            swipe: None,
            duration: None,
        }
    }
}

/// Pointer targets of a [`Carousel`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselPart {
    /// The slide viewport (swipe surface)
    Viewport,
    /// The "previous" zone
    Prev,
    /// The "next" zone
    Next,
    /// The indicator dot of this slide
    Dot(usize),
}

/// A hover- and swipe-navigated slide carousel
pub struct Carousel {
    count: usize,
    active: usize,
    prev: Option<HoverActivation>,
    next: Option<HoverActivation>,
    dots: Vec<HoverActivation>,
    swipe: SwipeDetector,
    on_interact: Option<Box<dyn FnMut(usize)>>,
}

impl Carousel {
    /// Create a carousel bound to `config`
    pub fn new(config: &DncConfig, options: CarouselOptions) -> Self {
        let zone = || {
            let mut hover = HoverOptions::new(ELEMENT_TYPE);
            hover.duration = options.duration;
            HoverActivation::attach(config, hover)
        };
        let navigable = options.count > 1;
        let (prev, next) = if options.show_arrows && navigable {
            (Some(zone()), Some(zone()))
        } else {
            (None, None)
        };
        let dots = if options.show_dots && navigable {
            (0..options.count).map(|_| zone()).collect()
        } else {
            Vec::new()
        };

        Self {
            count: options.count,
            active: options.active_index.min(options.count.saturating_sub(1)),
            prev,
            next,
            dots,
            swipe: SwipeDetector::new(options.swipe.unwrap_or(config.swipe)),
            on_interact: None,
        }
    }

    /// Set a callback called with the new index after every navigation
    pub fn on_interact(mut self, f: impl FnMut(usize) + 'static) -> Self {
        self.on_interact = Some(Box::new(f));
        self
    }

    /// Number of slides
    pub fn count(&self) -> usize {
        self.count
    }

    /// Index of the shown slide
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Whether the prev/next zones are present
    pub fn has_arrows(&self) -> bool {
        self.prev.is_some()
    }

    /// Whether the indicator dots are present
    pub fn has_dots(&self) -> bool {
        !self.dots.is_empty()
    }

    /// Fill progress of a part in `[0, 1]`
    pub fn progress(&self, part: CarouselPart) -> f32 {
        match part {
            CarouselPart::Viewport => 0.0,
            CarouselPart::Prev => self.prev.as_ref().map_or(0.0, HoverActivation::progress),
            CarouselPart::Next => self.next.as_ref().map_or(0.0, HoverActivation::progress),
            CarouselPart::Dot(index) => self.dots.get(index).map_or(0.0, HoverActivation::progress),
        }
    }

    /// Show slide `index`
    ///
    /// Out-of-range indices are ignored. Returns the new index on success.
    pub fn go_to(&mut self, scheduler: &mut dyn Scheduler, index: usize) -> Option<usize> {
        if index >= self.count {
            return None;
        }
        self.active = index;
        // Every control is redrawn and starts over; the active dot is not
        // hoverable.
        for zone in self.prev.iter_mut().chain(&mut self.next) {
            zone.pointer_leave(scheduler);
        }
        for dot in &mut self.dots {
            dot.pointer_leave(scheduler);
        }
        log::debug!("carousel moved to slide {}", index);
        if let Some(ref mut on_interact) = self.on_interact {
            on_interact(index);
        }
        Some(index)
    }

    /// Show the previous slide, wrapping to the last
    pub fn go_prev(&mut self, scheduler: &mut dyn Scheduler) -> Option<usize> {
        let index = match self.active {
            0 => self.count.checked_sub(1)?,
            active => active - 1,
        };
        self.go_to(scheduler, index)
    }

    /// Show the next slide, wrapping to the first
    pub fn go_next(&mut self, scheduler: &mut dyn Scheduler) -> Option<usize> {
        let index = if self.active + 1 < self.count {
            self.active + 1
        } else {
            0
        };
        self.go_to(scheduler, index)
    }
}

impl Widget for Carousel {
    type Part = CarouselPart;
    /// Index shown after a swipe, if the event completed one
    type Response = Option<usize>;

    fn element_type(&self) -> ElementType {
        ELEMENT_TYPE.into()
    }

    fn handle_pointer(
        &mut self,
        scheduler: &mut dyn Scheduler,
        part: CarouselPart,
        event: PointerEvent,
    ) -> Result<Option<usize>, InteractionRejected> {
        if event == PointerEvent::Click {
            return Err(self.reject());
        }

        match part {
            CarouselPart::Viewport => {
                let direction = self.swipe.handle_pointer(event, scheduler.now());
                return Ok(match direction {
                    Some(SwipeDirection::Next) => self.go_next(scheduler),
                    Some(SwipeDirection::Prev) => self.go_prev(scheduler),
                    None => None,
                });
            }
            CarouselPart::Prev => {
                if let Some(prev) = self.prev.as_mut() {
                    prev.handle_pointer(scheduler, event)?;
                }
            }
            CarouselPart::Next => {
                if let Some(next) = self.next.as_mut() {
                    next.handle_pointer(scheduler, event)?;
                }
            }
            CarouselPart::Dot(index) => {
                let active = self.active;
                if let Some(dot) = self.dots.get_mut(index) {
                    if index != active || event != PointerEvent::Enter {
                        dot.handle_pointer(scheduler, event)?;
                    }
                }
            }
        }
        Ok(None)
    }
}

impl Wakeable for Carousel {
    /// Index shown after the navigation
    type Output = usize;

    fn on_wakeup(&mut self, scheduler: &mut dyn Scheduler, wakeup: Wakeup) -> Option<usize> {
        fn fired(
            zone: Option<&mut HoverActivation>,
            scheduler: &mut dyn Scheduler,
            wakeup: Wakeup,
        ) -> bool {
            let outcome = zone.and_then(|zone| zone.on_wakeup(scheduler, wakeup));
            outcome == Some(HoverOutcome::Interacted)
        }

        if fired(self.prev.as_mut(), scheduler, wakeup) {
            return self.go_prev(scheduler);
        }
        if fired(self.next.as_mut(), scheduler, wakeup) {
            return self.go_next(scheduler);
        }

        for index in 0..self.dots.len() {
            if fired(self.dots.get_mut(index), scheduler, wakeup) {
                return self.go_to(scheduler, index);
            }
        }
        None
    }
}

impl fmt::Debug for Carousel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Carousel")
            .field("count", &self.count)
            .field("active", &self.active)
            .field("prev", &self.prev)
            .field("next", &self.next)
            .field("dots", &self.dots)
            .field("swipe", &self.swipe)
            .finish_non_exhaustive()
    }
}
