//! Shared configuration for Do Not Click widgets
//!
//! There is no global settings record: a [`DncConfig`] is created by the host
//! (usually once) and passed by reference into every widget constructor.
//! Widgets that carry their own `duration` override ignore the config value.

use crate::SwipeThresholds;
use dnc_macros::WithBuilders;
use std::time::Duration;

/// Default time the pointer must stay over an element to activate it
pub const DEFAULT_DURATION: Duration = Duration::from_millis(1500);

/// Default delay before a hovered flyout (menu, dropdown, select) opens
pub const DEFAULT_OPEN_DELAY: Duration = Duration::from_millis(300);

/// Default delay before a tooltip appears
pub const DEFAULT_TOOLTIP_DELAY: Duration = Duration::from_millis(200);

/// Default grace period before a popover closes after the pointer leaves
pub const DEFAULT_CLOSE_GRACE: Duration = Duration::from_millis(100);

/// Default quiet period before a search query is reported
pub const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Configuration shared by all widgets of one UI surface
///
/// # Example
///
/// ```
/// use dnc::DncConfig;
/// use std::time::Duration;
///
/// let config = DncConfig::default().with_duration(Duration::from_millis(800));
/// assert_eq!(config.resolve_duration(None), Duration::from_millis(800));
/// assert_eq!(
///     config.resolve_duration(Some(Duration::from_millis(200))),
///     Duration::from_millis(200)
/// );
/// ```
#[derive(Debug, Clone, PartialEq, WithBuilders)]
pub struct DncConfig {
    /// Hover duration used by widgets that do not specify their own
    pub duration: Duration,
    /// Delay before menus, dropdowns and selects open
    pub open_delay: Duration,
    /// Delay before tooltips appear
    pub tooltip_delay: Duration,
    /// Grace period before popovers close
    pub close_grace: Duration,
    /// Carousel swipe thresholds
    pub swipe: SwipeThresholds,
    /// Debounce applied to search queries
    pub search_debounce: Duration,
}

impl Default for DncConfig {
    fn default() -> Self {
        Self {
            duration: DEFAULT_DURATION,
            open_delay: DEFAULT_OPEN_DELAY,
            tooltip_delay: DEFAULT_TOOLTIP_DELAY,
            close_grace: DEFAULT_CLOSE_GRACE,
            swipe: SwipeThresholds::default(),
            search_debounce: DEFAULT_SEARCH_DEBOUNCE,
        }
    }
}

impl DncConfig {
    /// Merge a set of overrides into this config
    ///
    /// Fields left as `None` in `overrides` keep their current value.
    pub fn configure(&mut self, overrides: ConfigOverrides) {
        let ConfigOverrides {
            duration,
            open_delay,
            tooltip_delay,
            close_grace,
            swipe,
            search_debounce,
        } = overrides;

        if let Some(duration) = duration {
            self.duration = duration;
        }
        if let Some(open_delay) = open_delay {
            self.open_delay = open_delay;
        }
        if let Some(tooltip_delay) = tooltip_delay {
            self.tooltip_delay = tooltip_delay;
        }
        if let Some(close_grace) = close_grace {
            self.close_grace = close_grace;
        }
        if let Some(swipe) = swipe {
            self.swipe = swipe;
        }
        if let Some(search_debounce) = search_debounce {
            self.search_debounce = search_debounce;
        }
    }

    /// Return a copy of this config with `overrides` applied
    pub fn configured(mut self, overrides: ConfigOverrides) -> Self {
        self.configure(overrides);
        self
    }

    /// Pick a widget's own duration, falling back to the shared default
    pub fn resolve_duration(&self, duration: Option<Duration>) -> Duration {
        duration.unwrap_or(self.duration)
    }
}

/// Partial update for a [`DncConfig`]
#[derive(Debug, Clone, Default, PartialEq, WithBuilders)]
pub struct ConfigOverrides {
    /// New default hover duration
    #[with_builders(some)]
    pub duration: Option<Duration>,
    /// New flyout open delay
    #[with_builders(some)]
    pub open_delay: Option<Duration>,
    /// New tooltip delay
    #[with_builders(some)]
    pub tooltip_delay: Option<Duration>,
    /// New popover close grace period
    #[with_builders(some)]
    pub close_grace: Option<Duration>,
    /// New swipe thresholds
    #[with_builders(some)]
    pub swipe: Option<SwipeThresholds>,
    /// New search debounce
    #[with_builders(some)]
    pub search_debounce: Option<Duration>,
}
