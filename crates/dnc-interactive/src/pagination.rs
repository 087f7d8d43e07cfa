//! Pagination component
//!
//! Prev/next buttons and a window of page buttons, each activated by
//! hovering. Long page ranges are shortened with ellipses around the
//! current page.

use crate::Widget;
use dnc::{
    DncConfig, ElementType, HoverActivation, HoverOptions, HoverOutcome, InteractionRejected,
    PointerEvent, Scheduler, Wakeable, Wakeup,
};
use dnc_macros::WithBuilders;
use std::fmt;
use std::time::Duration;

/// Default number of page buttons shown at once
pub const DEFAULT_MAX_VISIBLE: u32 = 7;

/// One slot of the page window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    /// A page button (1-based)
    Page(u32),
    /// A gap in the page range
    Ellipsis,
}

/// Compute the page window around `current`
///
/// All pages are listed when they fit in `max_visible`. Otherwise a window of
/// `max_visible` pages is centered on `current` (shifted to stay in range),
/// and the first and last page are always kept, with an ellipsis standing in
/// for any skipped range.
///
/// ```
/// use dnc_interactive::{page_numbers, PageItem::{Ellipsis, Page}};
///
/// let items = page_numbers(10, 20, 7);
/// assert_eq!(items[..3], [Page(1), Ellipsis, Page(7)]);
/// assert_eq!(items[8..], [Page(13), Ellipsis, Page(20)]);
/// ```
pub fn page_numbers(current: u32, total: u32, max_visible: u32) -> Vec<PageItem> {
    if total <= max_visible {
        return (1..=total).map(PageItem::Page).collect();
    }

    let (current, total, max) = (i64::from(current), i64::from(total), i64::from(max_visible));
    let half = max / 2;
    let mut start = (current - half).max(1);
    let end = (start + max - 1).min(total);
    if end - start + 1 < max {
        start = (end - max + 1).max(1);
    }

    let page = |p: i64| PageItem::Page(u32::try_from(p).unwrap_or(u32::MAX));
    let mut items = Vec::new();
    if start > 1 {
        items.push(page(1));
        if start > 2 {
            items.push(PageItem::Ellipsis);
        }
    }
    items.extend((start..=end).map(page));
    if end < total {
        if end < total - 1 {
            items.push(PageItem::Ellipsis);
        }
        items.push(page(total));
    }
    items
}

/// Options for a [`Pagination`]
#[derive(Debug, Clone, PartialEq, WithBuilders)]
pub struct PaginationOptions {
    /// Number of pages
    pub total_pages: u32,
    /// Initially selected page (1-based)
    pub current_page: u32,
    /// Page buttons shown at once
    pub max_visible: u32,
    /// Hover duration override
    #[with_builders(some)]
    pub duration: Option<Duration>,
}

impl PaginationOptions {
    /// Options for `total_pages` pages starting at page 1
    pub fn new(total_pages: u32) -> Self {
        Self {
            total_pages,
            current_page: 1,
            max_visible: DEFAULT_MAX_VISIBLE,
            duration: None,
        }
    }
}

/// Pointer targets of a [`Pagination`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationPart {
    /// The "previous page" button
    Prev,
    /// The "next page" button
    Next,
    /// The button for this page (1-based)
    Page(u32),
}

/// Hover-activated page navigation
pub struct Pagination {
    total: u32,
    current: u32,
    max_visible: u32,
    config: DncConfig,
    options: HoverOptions,
    prev: HoverActivation,
    next: HoverActivation,
    pages: Vec<(u32, HoverActivation)>,
    on_interact: Option<Box<dyn FnMut(u32)>>,
}

impl Pagination {
    /// Create a pagination bound to `config`
    pub fn new(config: &DncConfig, options: PaginationOptions) -> Self {
        let mut hover = HoverOptions::new("pagination");
        hover.duration = options.duration;

        let mut pagination = Self {
            total: options.total_pages,
            current: options.current_page,
            max_visible: options.max_visible,
            prev: HoverActivation::attach(config, hover.clone()),
            next: HoverActivation::attach(config, hover.clone()),
            config: config.clone(),
            options: hover,
            pages: Vec::new(),
            on_interact: None,
        };
        pagination.rebuild_pages();
        pagination
    }

    /// Set a callback called with the new page after every navigation
    pub fn on_interact(mut self, f: impl FnMut(u32) + 'static) -> Self {
        self.on_interact = Some(Box::new(f));
        self
    }

    /// Current page (1-based)
    pub fn current_page(&self) -> u32 {
        self.current
    }

    /// Number of pages
    pub fn total_pages(&self) -> u32 {
        self.total
    }

    /// The page window as currently shown
    pub fn items(&self) -> Vec<PageItem> {
        page_numbers(self.current, self.total, self.max_visible)
    }

    /// Whether the "previous page" button is active
    pub fn has_prev(&self) -> bool {
        self.current > 1
    }

    /// Whether the "next page" button is active
    pub fn has_next(&self) -> bool {
        self.current < self.total
    }

    /// Fill progress of a part in `[0, 1]`
    pub fn progress(&self, part: PaginationPart) -> f32 {
        match part {
            PaginationPart::Prev => self.prev.progress(),
            PaginationPart::Next => self.next.progress(),
            PaginationPart::Page(page) => self
                .pages
                .iter()
                .find(|(p, _)| *p == page)
                .map_or(0.0, |(_, activation)| activation.progress()),
        }
    }

    fn rebuild_pages(&mut self) {
        let current = self.current;
        let (config, options) = (&self.config, &self.options);
        self.pages = self
            .items()
            .into_iter()
            .filter_map(|item| match item {
                PageItem::Page(page) if page != current => {
                    Some((page, HoverActivation::attach(config, options.clone())))
                }
                _ => None,
            })
            .collect();
    }

    fn navigate(&mut self, scheduler: &mut dyn Scheduler, page: u32) -> u32 {
        self.current = page;
        // Every button is redrawn, so nothing keeps its hover progress.
        self.prev.pointer_leave(scheduler);
        self.next.pointer_leave(scheduler);
        for (_, activation) in &mut self.pages {
            activation.pointer_leave(scheduler);
        }
        self.rebuild_pages();

        log::debug!("pagination moved to page {} of {}", page, self.total);
        if let Some(ref mut on_interact) = self.on_interact {
            on_interact(page);
        }
        page
    }
}

impl Widget for Pagination {
    type Part = PaginationPart;
    type Response = ();

    fn element_type(&self) -> ElementType {
        self.options.element_type.clone()
    }

    fn handle_pointer(
        &mut self,
        scheduler: &mut dyn Scheduler,
        part: PaginationPart,
        event: PointerEvent,
    ) -> Result<(), InteractionRejected> {
        if event == PointerEvent::Click {
            return Err(self.reject());
        }

        let (has_prev, has_next) = (self.has_prev(), self.has_next());
        match part {
            PaginationPart::Prev if has_prev || event == PointerEvent::Leave => {
                self.prev.handle_pointer(scheduler, event)
            }
            PaginationPart::Next if has_next || event == PointerEvent::Leave => {
                self.next.handle_pointer(scheduler, event)
            }
            PaginationPart::Page(page) => {
                match self.pages.iter_mut().find(|(p, _)| *p == page) {
                    Some((_, activation)) => activation.handle_pointer(scheduler, event),
                    None => Ok(()),
                }
            }
            _ => Ok(()),
        }
    }
}

impl Wakeable for Pagination {
    /// Page shown after the navigation
    type Output = u32;

    fn on_wakeup(&mut self, scheduler: &mut dyn Scheduler, wakeup: Wakeup) -> Option<u32> {
        let interacted = |outcome: Option<HoverOutcome>| outcome == Some(HoverOutcome::Interacted);

        if interacted(self.prev.on_wakeup(scheduler, wakeup)) {
            let page = self.current.checked_sub(1).filter(|p| *p >= 1)?;
            return Some(self.navigate(scheduler, page));
        }
        if interacted(self.next.on_wakeup(scheduler, wakeup)) {
            let page = self.current + 1;
            return (page <= self.total).then(|| self.navigate(scheduler, page));
        }

        for (page, activation) in &mut self.pages {
            if interacted(activation.on_wakeup(scheduler, wakeup)) {
                let page = *page;
                return Some(self.navigate(scheduler, page));
            }
        }
        None
    }
}

impl fmt::Debug for Pagination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pagination")
            .field("total", &self.total)
            .field("current", &self.current)
            .field("max_visible", &self.max_visible)
            .field("prev", &self.prev)
            .field("next", &self.next)
            .field("pages", &self.pages)
            .finish_non_exhaustive()
    }
}
