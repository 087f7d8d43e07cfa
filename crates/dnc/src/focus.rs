//! Hover-to-focus activation for editable fields
//!
//! Text fields start out dormant (read-only, not focusable). Hovering the
//! wrapper for the configured duration makes the field editable and focused
//! in one step; losing focus puts it back to sleep.

use crate::{
    DncConfig, ElementType, HoverActivation, HoverOptions, HoverOutcome, InteractionRejected,
    PointerEvent, Scheduler, Wakeable, Wakeup,
};
use dnc_macros::WithBuilders;
use std::fmt;
use std::time::Duration;

/// Options for attaching hover-to-focus behavior
#[derive(Debug, Clone, Default, PartialEq, WithBuilders)]
pub struct FocusOptions {
    /// Hover duration; falls back to [`DncConfig::duration`] when unset
    #[with_builders(some)]
    pub duration: Option<Duration>,
    /// Diagnostic tag reported in rejections
    #[with_builders(into)]
    pub element_type: ElementType,
}

impl FocusOptions {
    /// Options for an element of the given type with default timing
    pub fn new(element_type: impl Into<ElementType>) -> Self {
        Self {
            element_type: element_type.into(),
            ..Default::default()
        }
    }
}

/// Editing state of the target field
///
/// A single enum so the field can never be read-only while holding focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusMode {
    /// Read-only and out of the tab order; waiting for a hover activation
    #[default]
    Dormant,
    /// Editable and holding input focus
    Focused,
}

/// What a hover-to-focus element reports on a frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusOutcome {
    /// The hover progress value changed
    Progress(f32),
    /// The field became editable and should receive input focus
    Activated,
}

/// Hover activation whose interaction is "make the field editable and focus it"
pub struct FocusActivation {
    hover: HoverActivation,
    mode: FocusMode,
    on_activate: Option<Box<dyn FnMut()>>,
}

impl FocusActivation {
    /// Attach hover-to-focus behavior to a wrapper and its editable target
    pub fn attach(config: &DncConfig, options: FocusOptions) -> Self {
        let hover_options = HoverOptions {
            duration: options.duration,
            element_type: options.element_type,
            repeat: false,
        };
        Self {
            hover: HoverActivation::attach(config, hover_options),
            mode: FocusMode::Dormant,
            on_activate: None,
        }
    }

    /// Set a callback invoked after the field becomes editable
    pub fn on_activate(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_activate = Some(Box::new(f));
        self
    }

    /// Current editing state
    pub fn mode(&self) -> FocusMode {
        self.mode
    }

    /// Whether the field accepts edits
    pub fn is_editable(&self) -> bool {
        self.mode == FocusMode::Focused
    }

    /// Whether the field holds input focus
    pub fn has_focus(&self) -> bool {
        self.mode == FocusMode::Focused
    }

    /// Current hover progress in `[0, 1]`
    pub fn progress(&self) -> f32 {
        self.hover.progress()
    }

    /// The wrapped hover activation
    pub fn hover(&self) -> &HoverActivation {
        &self.hover
    }

    /// The field lost focus: return to the dormant state
    pub fn on_blur(&mut self) {
        if self.mode == FocusMode::Focused {
            let element_type = self.hover.binding().element_type();
            log::trace!("{element_type} returned to dormant");
        }
        self.mode = FocusMode::Dormant;
    }

    /// Route a pointer event aimed at the wrapper
    pub fn handle_pointer(
        &mut self,
        scheduler: &mut dyn Scheduler,
        event: PointerEvent,
    ) -> Result<(), InteractionRejected> {
        self.hover.handle_pointer(scheduler, event)
    }

    fn activate(&mut self) {
        self.mode = FocusMode::Focused;
        if let Some(ref mut on_activate) = self.on_activate {
            on_activate();
        }
    }
}

impl Wakeable for FocusActivation {
    type Output = FocusOutcome;

    fn on_wakeup(&mut self, scheduler: &mut dyn Scheduler, wakeup: Wakeup) -> Option<FocusOutcome> {
        match self.hover.on_wakeup(scheduler, wakeup)? {
            HoverOutcome::Progress(progress) => Some(FocusOutcome::Progress(progress)),
            HoverOutcome::Interacted => {
                self.activate();
                Some(FocusOutcome::Activated)
            }
        }
    }
}

impl fmt::Debug for FocusActivation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FocusActivation")
            .field("hover", &self.hover)
            .field("mode", &self.mode)
            .field("on_activate", &self.on_activate.is_some())
            .finish()
    }
}
