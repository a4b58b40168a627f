//! Render-ready snapshots of a catalog.

use crate::paginator::PageControl;

/// What a front end needs to draw one state of the catalog.
///
/// A `ViewState` is derived from the catalog and owns copies of the items on
/// the current page, so it can be handed to a renderer or kept around after
/// the catalog changes.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState<I> {
    /// Items on the current page, in collection order.
    pub items: Vec<I>,
    /// Number of items passing the current filters.
    pub filtered_count: usize,
    /// Current page, starting at 1.
    pub current_page: usize,
    /// Number of pages, at least 1.
    pub total_pages: usize,
    /// Items per page.
    pub page_size: usize,
    /// Pagination bar; empty when there is a single page.
    pub controls: Vec<PageControl>,
}

impl<I> ViewState<I> {
    /// Returns true when no item passes the filters.
    ///
    /// Front ends show a dedicated empty state for this rather than an
    /// error.
    pub fn is_empty(&self) -> bool {
        self.filtered_count == 0
    }

    /// Returns true when the pagination bar should be shown.
    pub fn has_pagination(&self) -> bool {
        self.total_pages > 1
    }

    /// Index of the first item of this page within the filtered sequence.
    pub fn offset(&self) -> usize {
        (self.current_page - 1) * self.page_size
    }
}

/// Formats the results count line, e.g. `"1 service available"`.
///
/// ```
/// use catalog_pager::view::results_label;
///
/// assert_eq!(results_label(0, "service"), "0 services available");
/// assert_eq!(results_label(1, "service"), "1 service available");
/// ```
pub fn results_label(count: usize, noun: &str) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("{count} {noun}{plural} available")
}
