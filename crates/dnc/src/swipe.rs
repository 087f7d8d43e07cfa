//! Horizontal swipe detection from pointer motion
//!
//! The detector keeps a short window of `(x, t)` samples and fires a
//! direction when the motion across the window is both long and fast enough.
//! After firing it stays quiet for a cooldown so a single sweep of the
//! pointer produces one navigation.

use crate::PointerEvent;
use dnc_macros::WithBuilders;
use std::collections::VecDeque;
use std::time::Duration;

/// Maximum number of motion samples kept
pub const SWIPE_SAMPLE_CAPACITY: usize = 15;

/// Samples required before a swipe is evaluated
const MIN_SAMPLES: usize = 3;

/// Windows shorter than this are treated as noise
const NOISE_WINDOW: Duration = Duration::from_millis(20);

/// Distance, velocity and cooldown limits for a swipe
#[derive(Debug, Clone, Copy, PartialEq, WithBuilders)]
pub struct SwipeThresholds {
    /// Minimum horizontal travel across the sample window, in pixels
    pub min_distance: f32,
    /// Minimum horizontal speed, in pixels per millisecond
    pub min_velocity: f32,
    /// Quiet period after a fired swipe
    pub cooldown: Duration,
}

impl Default for SwipeThresholds {
    fn default() -> Self {
        Self {
            min_distance: 60.0,
            min_velocity: 0.35,
            cooldown: Duration::from_millis(400),
        }
    }
}

/// Navigation intent inferred from a swipe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Pointer swept right: go to the previous item
    Prev,
    /// Pointer swept left: go to the next item
    Next,
}

/// One motion sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeSample {
    /// Horizontal pointer position in pixels
    pub x: f32,
    /// Sample time
    pub t: Duration,
}

/// Bounded motion buffer that turns pointer movement into prev/next events
#[derive(Debug, Clone)]
pub struct SwipeDetector {
    thresholds: SwipeThresholds,
    samples: VecDeque<SwipeSample>,
    last_fire: Option<Duration>,
}

impl SwipeDetector {
    /// Create an empty detector with the given thresholds
    pub fn new(thresholds: SwipeThresholds) -> Self {
        Self {
            thresholds,
            samples: VecDeque::with_capacity(SWIPE_SAMPLE_CAPACITY),
            last_fire: None,
        }
    }

    /// The thresholds in use
    pub fn thresholds(&self) -> &SwipeThresholds {
        &self.thresholds
    }

    /// Number of buffered samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Record a motion sample and report a swipe if one completed
    pub fn sample(&mut self, x: f32, t: Duration) -> Option<SwipeDirection> {
        self.samples.push_back(SwipeSample { x, t });
        if self.samples.len() > SWIPE_SAMPLE_CAPACITY {
            self.samples.pop_front();
        }

        if self.samples.len() < MIN_SAMPLES {
            return None;
        }
        if let Some(last_fire) = self.last_fire {
            if t.saturating_sub(last_fire) < self.thresholds.cooldown {
                return None;
            }
        }

        let first = *self.samples.front()?;
        let last = *self.samples.back()?;
        let delta_t = last.t.saturating_sub(first.t);
        if delta_t < NOISE_WINDOW {
            return None;
        }

        let delta_x = last.x - first.x;
        let velocity = delta_x / (delta_t.as_secs_f32() * 1000.0);
        let SwipeThresholds {
            min_distance,
            min_velocity,
            ..
        } = self.thresholds;

        let direction = if delta_x < -min_distance && velocity < -min_velocity {
            SwipeDirection::Next
        } else if delta_x > min_distance && velocity > min_velocity {
            SwipeDirection::Prev
        } else {
            return None;
        };

        log::debug!(
            "swipe {:?}: dx={:.1}px over {:?} ({:.3}px/ms)",
            direction,
            delta_x,
            delta_t,
            velocity
        );
        self.last_fire = Some(t);
        self.samples.clear();
        Some(direction)
    }

    /// Drop buffered samples without firing (pointer left the surface)
    ///
    /// The cooldown from the last fired swipe still applies.
    pub fn reset(&mut self) {
        self.samples.clear();
    }

    /// Route a pointer event on the tracked surface, sampled at time `now`
    pub fn handle_pointer(&mut self, event: PointerEvent, now: Duration) -> Option<SwipeDirection> {
        match event {
            PointerEvent::Move { position } => self.sample(position.x, now),
            PointerEvent::Leave => {
                self.reset();
                None
            }
            PointerEvent::Enter | PointerEvent::Click => None,
        }
    }
}

impl Default for SwipeDetector {
    fn default() -> Self {
        Self::new(SwipeThresholds::default())
    }
}
