//! Hover activation - the primitive every Do Not Click widget attaches to
//!
//! Pointer enter starts a [`ProgressTimer`], pointer leave cancels it, and a
//! completed timer invokes the element's interaction callback. Clicking is
//! never an interaction: it is reported as [`InteractionRejected`].

use crate::{
    DncConfig, ElementType, InteractionRejected, PointerEvent, ProgressTimer, Scheduler, Tick,
    Wakeable, Wakeup,
};
use dnc_macros::WithBuilders;
use std::fmt;
use std::time::Duration;

/// Options for attaching hover activation to an element
#[derive(Debug, Clone, Default, PartialEq, WithBuilders)]
pub struct HoverOptions {
    /// Hover duration; falls back to [`DncConfig::duration`] when unset
    #[with_builders(some)]
    pub duration: Option<Duration>,
    /// Diagnostic tag reported in rejections
    #[with_builders(into)]
    pub element_type: ElementType,
    /// Keep cycling while the pointer stays over the element
    pub repeat: bool,
}

impl HoverOptions {
    /// Options for an element of the given type with default timing
    pub fn new(element_type: impl Into<ElementType>) -> Self {
        Self {
            element_type: element_type.into(),
            ..Default::default()
        }
    }
}

/// Resolved configuration of an attached element
///
/// Set once at attach time and read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivationBinding {
    duration: Duration,
    element_type: ElementType,
    repeat: bool,
}

impl ActivationBinding {
    /// Resolve options against the shared config
    pub fn resolve(config: &DncConfig, options: HoverOptions) -> Self {
        Self {
            duration: config.resolve_duration(options.duration),
            element_type: options.element_type,
            repeat: options.repeat,
        }
    }

    /// Time the pointer must stay over the element
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Diagnostic tag of the element
    pub fn element_type(&self) -> &ElementType {
        &self.element_type
    }

    /// Whether the element restarts after each completion
    pub fn repeat(&self) -> bool {
        self.repeat
    }
}

/// What a hover-activated element reports on a frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HoverOutcome {
    /// The progress value changed (drive the visual fill from this)
    Progress(f32),
    /// A hover cycle completed and the interaction fired
    Interacted,
}

/// Hover-to-interact behavior for a single element
///
/// # Example
///
/// ```
/// use dnc::{DncConfig, FrameScheduler, HoverActivation, HoverOptions, HoverOutcome, PointerEvent};
/// use std::time::Duration;
///
/// let config = DncConfig::default();
/// let mut scheduler = FrameScheduler::new();
/// let mut button = HoverActivation::attach(
///     &config,
///     HoverOptions::new("button").with_duration(Duration::from_millis(500)),
/// );
///
/// button.handle_pointer(&mut scheduler, PointerEvent::Enter).unwrap();
/// let outcomes = scheduler.drive(Duration::from_millis(500), &mut button);
/// assert_eq!(outcomes.last(), Some(&HoverOutcome::Interacted));
///
/// assert!(button.handle_pointer(&mut scheduler, PointerEvent::Click).is_err());
/// ```
pub struct HoverActivation {
    binding: ActivationBinding,
    timer: ProgressTimer,
    hovered: bool,
    on_interact: Option<Box<dyn FnMut()>>,
}

impl HoverActivation {
    /// Attach hover activation using `options`, resolved against `config`
    pub fn attach(config: &DncConfig, options: HoverOptions) -> Self {
        Self {
            binding: ActivationBinding::resolve(config, options),
            timer: ProgressTimer::new(),
            hovered: false,
            on_interact: None,
        }
    }

    /// Set a callback invoked once per completed hover cycle
    pub fn on_interact(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_interact = Some(Box::new(f));
        self
    }

    /// The element's resolved configuration
    pub fn binding(&self) -> &ActivationBinding {
        &self.binding
    }

    /// Current progress in `[0, 1]`
    pub fn progress(&self) -> f32 {
        self.timer.progress()
    }

    /// Whether the pointer is currently over the element
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Whether a hover session is running
    pub fn is_running(&self) -> bool {
        self.timer.is_running()
    }

    /// Pointer entered: (re)start the progress timer
    pub fn pointer_enter(&mut self, scheduler: &mut dyn Scheduler) {
        self.hovered = true;
        self.timer.start(scheduler, self.binding.duration);
    }

    /// Pointer left: cancel the timer and reset progress
    pub fn pointer_leave(&mut self, scheduler: &mut dyn Scheduler) {
        self.hovered = false;
        self.timer.cancel(scheduler);
    }

    /// A direct activation gesture reached the element
    ///
    /// Always fails; the timer is left untouched and the callback never runs.
    pub fn click(&self) -> Result<(), InteractionRejected> {
        Err(InteractionRejected::new(self.binding.element_type.clone()))
    }

    /// Route a pointer event to the matching handler
    pub fn handle_pointer(
        &mut self,
        scheduler: &mut dyn Scheduler,
        event: PointerEvent,
    ) -> Result<(), InteractionRejected> {
        match event {
            PointerEvent::Enter => self.pointer_enter(scheduler),
            PointerEvent::Leave => self.pointer_leave(scheduler),
            PointerEvent::Move { .. } => {}
            PointerEvent::Click => return self.click(),
        }
        Ok(())
    }
}

impl Wakeable for HoverActivation {
    type Output = HoverOutcome;

    fn on_wakeup(&mut self, scheduler: &mut dyn Scheduler, wakeup: Wakeup) -> Option<HoverOutcome> {
        let Wakeup::Frame(handle) = wakeup else {
            return None;
        };

        match self.timer.on_frame(scheduler, handle)? {
            Tick::Progress(progress) => Some(HoverOutcome::Progress(progress)),
            Tick::Complete { deadline } => {
                if let Some(ref mut on_interact) = self.on_interact {
                    on_interact();
                }
                // Chain the next cycle from the nominal deadline so repeated
                // completions do not drift with frame timing.
                if self.binding.repeat && self.hovered {
                    self.timer
                        .start_at(scheduler, deadline, self.binding.duration);
                }
                Some(HoverOutcome::Interacted)
            }
        }
    }
}

impl fmt::Debug for HoverActivation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HoverActivation")
            .field("binding", &self.binding)
            .field("timer", &self.timer)
            .field("hovered", &self.hovered)
            .field("on_interact", &self.on_interact.is_some())
            .finish()
    }
}
