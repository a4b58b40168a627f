//! Page arithmetic and page controls.
//!
//! The paginator does not hold any items. It tracks how many items there are,
//! how many fit on a page and which page is current, and derives everything a
//! front end needs from that: slice bounds for the current window, the list of
//! [`PageControl`]s to draw, and compact text renderings.
//!
//! Pages are numbered from 1. The current page is always within
//! `1..=total_pages`, and `total_pages` is never below 1, even for zero items.

use crate::key;

/// Marker for the current page in [`Type::Dots`] views.
pub const ACTIVE_DOT: &str = "•";

/// Marker for the other pages in [`Type::Dots`] views.
pub const INACTIVE_DOT: &str = "○";

/// How [`Paginator::view`] renders the page position.
///
/// The browser draws the numbered style itself, one styled control at a
/// time, and uses [`Paginator::view`] for the compact styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Type {
    /// Page numbers with the current one in brackets: `‹ 1 [2] 3 ›`.
    #[default]
    Numbered,
    /// Current over total: `2/3`.
    Arabic,
    /// One dot per page: `○ • ○`.
    Dots,
}

/// One element of a pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControl {
    /// The "previous page" control, disabled on the first page.
    Previous {
        /// Whether activating it would change the page.
        enabled: bool,
    },
    /// A direct link to a page.
    Page {
        /// 1-based page number.
        number: usize,
        /// Whether this is the current page.
        active: bool,
    },
    /// The "next page" control, disabled on the last page.
    Next {
        /// Whether activating it would change the page.
        enabled: bool,
    },
}

impl PageControl {
    /// The page this control navigates to, given the current page.
    pub fn target(&self, current: usize) -> usize {
        match *self {
            PageControl::Previous { .. } => current.saturating_sub(1),
            PageControl::Page { number, .. } => number,
            PageControl::Next { .. } => current + 1,
        }
    }

    /// Text of the control in a numbered bar: `‹`, `›`, `2` or `[2]` for
    /// the current page.
    pub fn label(&self) -> String {
        match *self {
            PageControl::Previous { .. } => "‹".to_string(),
            PageControl::Next { .. } => "›".to_string(),
            PageControl::Page { number, active: true } => format!("[{number}]"),
            PageControl::Page { number, .. } => number.to_string(),
        }
    }
}

/// Default key bindings for page navigation.
#[derive(Debug, Clone)]
pub struct PaginatorKeyMap {
    /// Previous page. Default keys: PageUp, Left Arrow, 'h'.
    pub prev_page: key::Binding,
    /// Next page. Default keys: PageDown, Right Arrow, 'l'.
    pub next_page: key::Binding,
}

impl Default for PaginatorKeyMap {
    fn default() -> Self {
        Self {
            prev_page: key::new_binding(vec![
                key::with_keys_str(&["pgup", "left", "h"]),
                key::with_help("←/h", "prev page"),
            ]),
            next_page: key::new_binding(vec![
                key::with_keys_str(&["pgdown", "right", "l"]),
                key::with_help("→/l", "next page"),
            ]),
        }
    }
}

/// Pagination state.
///
/// # Examples
///
/// ```rust
/// use catalog_pager::paginator::{Paginator, PageControl, Type};
///
/// let mut paginator = Paginator::new()
///     .with_per_page(6)
///     .with_total_items(14);
///
/// assert_eq!(paginator.total_pages(), 3);
/// assert_eq!(paginator.slice_bounds(14), (0, 6));
///
/// assert!(paginator.goto(3));
/// assert_eq!(paginator.slice_bounds(14), (12, 14));
///
/// // Out of range requests change nothing.
/// assert!(!paginator.goto(4));
/// assert_eq!(paginator.page(), 3);
///
/// assert_eq!(
///     paginator.controls().last(),
///     Some(&PageControl::Next { enabled: false })
/// );
/// assert_eq!(paginator.view(Type::Arabic), "3/3");
/// ```
#[derive(Debug, Clone)]
pub struct Paginator {
    page: usize,
    per_page: usize,
    total_pages: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 1,
            total_pages: 1,
        }
    }
}

impl Paginator {
    /// Creates a paginator on page 1 of 1 with one item per page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page size (builder pattern). Values below 1 become 1.
    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.set_per_page(per_page);
        self
    }

    /// Sets the item count (builder pattern).
    pub fn with_total_items(mut self, items: usize) -> Self {
        self.set_total_items(items);
        self
    }

    /// Sets the page size. Values below 1 become 1.
    ///
    /// The page count is not recomputed; call [`set_total_items`] afterwards.
    ///
    /// [`set_total_items`]: Paginator::set_total_items
    pub fn set_per_page(&mut self, per_page: usize) {
        self.per_page = per_page.max(1);
    }

    /// Recomputes the page count for `items` items and clamps the current
    /// page into the new range.
    pub fn set_total_items(&mut self, items: usize) {
        self.total_pages = items.div_ceil(self.per_page).max(1);
        if self.page > self.total_pages {
            self.page = self.total_pages;
        }
    }

    /// The current page, starting at 1.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Items per page.
    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// Number of pages, at least 1.
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Returns to page 1.
    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Moves to `page` if it is in `1..=total_pages`.
    ///
    /// Returns true if the page changed. Requests outside the range are
    /// ignored rather than clamped or wrapped.
    pub fn goto(&mut self, page: i64) -> bool {
        let Ok(page) = usize::try_from(page) else {
            return false;
        };
        if page < 1 || page > self.total_pages || page == self.page {
            return false;
        }
        self.page = page;
        true
    }

    /// Moves back one page unless already on the first.
    pub fn prev_page(&mut self) -> bool {
        if self.on_first_page() {
            return false;
        }
        self.page -= 1;
        true
    }

    /// Moves forward one page unless already on the last.
    pub fn next_page(&mut self) -> bool {
        if self.on_last_page() {
            return false;
        }
        self.page += 1;
        true
    }

    /// Returns true on page 1.
    pub fn on_first_page(&self) -> bool {
        self.page == 1
    }

    /// Returns true on the last page.
    pub fn on_last_page(&self) -> bool {
        self.page == self.total_pages
    }

    /// Start (inclusive) and end (exclusive) indices of the current page in
    /// a sequence of `length` items.
    pub fn slice_bounds(&self, length: usize) -> (usize, usize) {
        let start = ((self.page - 1) * self.per_page).min(length);
        let end = (start + self.per_page).min(length);
        (start, end)
    }

    /// The pagination bar: previous, one entry per page, next.
    ///
    /// Empty when everything fits on a single page.
    pub fn controls(&self) -> Vec<PageControl> {
        if self.total_pages <= 1 {
            return Vec::new();
        }
        let mut controls = Vec::with_capacity(self.total_pages + 2);
        controls.push(PageControl::Previous {
            enabled: !self.on_first_page(),
        });
        controls.extend((1..=self.total_pages).map(|number| PageControl::Page {
            number,
            active: number == self.page,
        }));
        controls.push(PageControl::Next {
            enabled: !self.on_last_page(),
        });
        controls
    }

    /// Renders the position in the given style.
    pub fn view(&self, style: Type) -> String {
        match style {
            Type::Numbered => self
                .controls()
                .iter()
                .map(PageControl::label)
                .collect::<Vec<_>>()
                .join(" "),
            Type::Arabic => format!("{}/{}", self.page, self.total_pages),
            Type::Dots => (1..=self.total_pages)
                .map(|i| if i == self.page { ACTIVE_DOT } else { INACTIVE_DOT })
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_zero_items_is_one_page() {
        let paginator = Paginator::new().with_per_page(6).with_total_items(0);
        assert_eq!(paginator.total_pages(), 1);
        assert_eq!(paginator.slice_bounds(0), (0, 0));
        assert!(paginator.controls().is_empty());
    }

    #[test]
    fn test_shrinking_clamps_page() {
        let mut paginator = Paginator::new().with_per_page(5).with_total_items(50);
        assert!(paginator.goto(10));
        paginator.set_total_items(12);
        assert_eq!(paginator.page(), 3);
    }

    #[test]
    fn test_goto_rejects_out_of_range() {
        let mut paginator = Paginator::new().with_per_page(6).with_total_items(14);
        assert!(!paginator.goto(0));
        assert!(!paginator.goto(-5));
        assert!(!paginator.goto(99999));
        assert!(!paginator.goto(i64::MIN));
        assert_eq!(paginator.page(), 1);
    }

    #[test]
    fn test_prev_next_stop_at_ends() {
        let mut paginator = Paginator::new().with_per_page(6).with_total_items(14);
        assert!(!paginator.prev_page());
        assert!(paginator.next_page());
        assert!(paginator.next_page());
        assert!(!paginator.next_page());
        assert_eq!(paginator.page(), 3);
    }

    #[test]
    fn test_controls_on_middle_page() {
        let mut paginator = Paginator::new().with_per_page(6).with_total_items(14);
        paginator.goto(2);
        assert_eq!(
            paginator.controls(),
            vec![
                PageControl::Previous { enabled: true },
                PageControl::Page { number: 1, active: false },
                PageControl::Page { number: 2, active: true },
                PageControl::Page { number: 3, active: false },
                PageControl::Next { enabled: true },
            ]
        );
        assert_eq!(PageControl::Previous { enabled: true }.target(2), 1);
        assert_eq!(PageControl::Next { enabled: true }.target(2), 3);
    }

    #[test]
    fn test_views() {
        let mut paginator = Paginator::new().with_per_page(6).with_total_items(14);
        paginator.goto(2);
        assert_eq!(paginator.view(Type::Numbered), "‹ 1 [2] 3 ›");
        assert_eq!(paginator.view(Type::Arabic), "2/3");
        assert_eq!(paginator.view(Type::Dots), "○ • ○");
    }

    #[test]
    fn test_single_page_numbered_view_is_empty() {
        let paginator = Paginator::new().with_per_page(6).with_total_items(4);
        assert_eq!(paginator.view(Type::Numbered), "");
        assert_eq!(paginator.view(Type::Arabic), "1/1");
    }
}
