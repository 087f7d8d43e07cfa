//! # dnc
//!
//! Hover-activation engine for "Do Not Click" widgets.
//!
//! Every widget built on this crate is activated by keeping the pointer over
//! it for a while instead of clicking it. Clicking is rejected with
//! [`InteractionRejected`]. The crate has no windowing or rendering
//! dependency: hosts feed it [`PointerEvent`]s and run a [`Scheduler`].
//!
//! ## Scheduling
//!
//! - [`Scheduler`] - Frame and timer capability supplied by the host
//! - [`FrameScheduler`] - Virtual-time implementation for tests and frame loops
//! - [`Wakeable`] - Components that react to fired frames and timers
//!
//! ## Activation
//!
//! - [`ProgressTimer`] - Frame-driven 0 to 1 progress value
//! - [`HoverActivation`] - Hover-to-interact primitive with click rejection
//! - [`FocusActivation`] - Hover-to-focus for editable fields
//!
//! ## Flyouts & Gestures
//!
//! - [`DelayedDisclosure`] - Delayed-open panels (menus, dropdowns, tooltips)
//! - [`CloseGrace`] - Grace-period close for popovers
//! - [`SwipeDetector`] - Horizontal swipe recognition
//! - [`Debouncer`] - Trailing-edge debounce
//!
//! ## Configuration
//!
//! - [`DncConfig`] - Shared defaults passed into every widget

mod config;
mod debounce;
mod disclosure;
mod error;
mod focus;
mod hover;
mod pointer;
mod progress;
mod scheduler;
mod swipe;

// Scheduling
pub use scheduler::*;

// Activation
pub use focus::*;
pub use hover::*;
pub use progress::*;

// Flyouts & gestures
pub use debounce::*;
pub use disclosure::*;
pub use swipe::*;

// Shared
pub use config::*;
pub use error::*;
pub use pointer::*;
