//! # dnc-interactive
//!
//! Widget controllers for "Do Not Click" interfaces, built on [`dnc`].
//!
//! Each widget owns the hover state of its parts and is driven the same way:
//! the host routes [`PointerEvent`](dnc::PointerEvent)s to a part through
//! [`Widget::handle_pointer`] and forwards fired frames and timers to
//! [`Wakeable::on_wakeup`](dnc::Wakeable::on_wakeup), which reports what the
//! widget did. Clicking any part is rejected.
//!
//! ## Buttons & Fields
//!
//! - [`Button`] - Hover-activated button
//! - [`TextInput`] - Field that becomes editable after hovering
//! - [`NumberInput`] - Numeric field with repeating step zones
//! - [`Search`] - Search field with debounced queries and a clear zone
//!
//! ## Flyouts
//!
//! - [`DropdownMenu`] - Trigger with a delayed-open item list
//! - [`Select`] - Single-choice dropdown
//! - [`Menu`] - Menu bar with nested submenus
//! - [`Tooltip`] - Delayed hover text
//! - [`Popover`] - Hover-opened panel with a grace-period close
//!
//! ## Navigation
//!
//! - [`Carousel`] - Slides navigated by arrows, dots and swipes
//! - [`Pagination`] - Page buttons with an ellipsized window

mod button;
mod carousel;
mod dropdown_menu;
mod flyout;
mod menu;
mod number_input;
mod pagination;
mod popover;
mod search;
mod select;
mod text_input;
mod tooltip;
mod widget;

pub use button::*;
pub use carousel::*;
pub use dropdown_menu::*;
pub use flyout::*;
pub use menu::*;
pub use number_input::*;
pub use pagination::*;
pub use popover::*;
pub use search::*;
pub use select::*;
pub use text_input::*;
pub use tooltip::*;
pub use widget::*;
