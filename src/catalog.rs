//! The list filtering and pagination core.
//!
//! [`Catalog`] owns a collection of items, the active [`FilterState`] and the
//! page cursor, and produces a [`ViewState`] after every change. It has no
//! knowledge of how the view is drawn; the terminal front end in
//! [`crate::browser`] is one consumer.
//!
//! The filtered view is kept as a list of indices into the collection. It is
//! rebuilt from scratch whenever the collection or the filters change, so it
//! can never hold stale matches, and it preserves collection order because
//! the collection is scanned front to back.
//!
//! # Examples
//!
//! ```
//! use catalog_pager::catalog::Catalog;
//! use catalog_pager::item::Service;
//!
//! let mut catalog = Catalog::new();
//! catalog.load(vec![
//!     Service::new(1, "Logo Design", "", "design"),
//!     Service::new(2, "Copywriting", "", "writing"),
//!     Service::new(3, "Brand Design", "", "design"),
//! ]);
//!
//! let view = catalog.set_category("design");
//! assert_eq!(view.filtered_count, 2);
//!
//! let view = catalog.set_query("logo");
//! let ids: Vec<u64> = view.items.iter().map(|s| s.id).collect();
//! assert_eq!(ids, vec![1]);
//! ```

use crate::config::Config;
use crate::filter::FilterState;
use crate::item::Item;
use crate::paginator::Paginator;
use crate::view::ViewState;
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Filterable, paginated collection of items.
#[derive(Debug, Clone)]
pub struct Catalog<I: Item> {
    items: Vec<I>,
    filter: FilterState,
    filtered: Vec<usize>,
    paginator: Paginator,
    loaded: bool,
}

impl<I: Item> Default for Catalog<I> {
    fn default() -> Self {
        Self::with_config(&Config::default())
    }
}

impl<I: Item> Catalog<I> {
    /// Creates an empty catalog with the default page size.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty catalog using the page size from `config`.
    pub fn with_config(config: &Config) -> Self {
        Self {
            items: Vec::new(),
            filter: FilterState::new(),
            filtered: Vec::new(),
            paginator: Paginator::new().with_per_page(config.page_size),
            loaded: false,
        }
    }

    /// Replaces the collection and resets filters and page.
    ///
    /// An empty collection is valid and produces the empty view.
    pub fn load(&mut self, items: Vec<I>) {
        info!(count = items.len(), "catalog loaded");
        self.items = items;
        self.loaded = true;
        self.filter = FilterState::new();
        self.refilter();
    }

    /// Updates the free-text query and returns the new view.
    pub fn set_query(&mut self, text: &str) -> ViewState<I> {
        self.filter.set_query(text);
        self.refilter();
        self.current_view()
    }

    /// Updates the category selection and returns the new view.
    ///
    /// `"all"`, in any case, removes the category restriction.
    pub fn set_category(&mut self, category: &str) -> ViewState<I> {
        self.filter.set_category(category);
        self.refilter();
        self.current_view()
    }

    /// Clears both filters and returns to page 1.
    pub fn reset_filters(&mut self) -> ViewState<I> {
        self.filter = FilterState::new();
        self.refilter();
        self.current_view()
    }

    /// Navigates to `page`.
    ///
    /// Requests outside `1..=total_pages` leave the view unchanged. Filters
    /// are never touched.
    pub fn goto_page(&mut self, page: i64) -> ViewState<I> {
        if self.paginator.goto(page) {
            debug!(page, "page changed");
        } else if !self.is_current(page) {
            warn!(
                page,
                total_pages = self.paginator.total_pages(),
                "ignoring out of range page request"
            );
        }
        self.current_view()
    }

    /// Moves to the next page, if any.
    pub fn next_page(&mut self) -> ViewState<I> {
        self.paginator.next_page();
        self.current_view()
    }

    /// Moves to the previous page, if any.
    pub fn prev_page(&mut self) -> ViewState<I> {
        self.paginator.prev_page();
        self.current_view()
    }

    /// Snapshot of the current page.
    pub fn current_view(&self) -> ViewState<I> {
        let (start, end) = self.paginator.slice_bounds(self.filtered.len());
        ViewState {
            items: self.filtered[start..end]
                .iter()
                .map(|&index| self.items[index].clone())
                .collect(),
            filtered_count: self.filtered.len(),
            current_page: self.paginator.page(),
            total_pages: self.paginator.total_pages(),
            page_size: self.paginator.per_page(),
            controls: self.paginator.controls(),
        }
    }

    /// The active filters.
    pub fn filter_state(&self) -> &FilterState {
        &self.filter
    }

    /// The whole collection, in load order.
    pub fn items(&self) -> &[I] {
        &self.items
    }

    /// Items passing the current filters, in collection order.
    pub fn filtered_items(&self) -> impl Iterator<Item = &I> + '_ {
        self.filtered.iter().map(move |&index| &self.items[index])
    }

    /// Size of the whole collection.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true when the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns true once [`load`](Catalog::load) has been called.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Items per page.
    pub fn page_size(&self) -> usize {
        self.paginator.per_page()
    }

    /// The page cursor over the filtered items.
    pub fn paginator(&self) -> &Paginator {
        &self.paginator
    }

    /// Distinct category labels in first-seen order.
    ///
    /// Labels differing only in case are reported once, with the spelling
    /// of their first occurrence.
    pub fn categories(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.items
            .iter()
            .filter(|item| seen.insert(item.category().to_lowercase()))
            .map(|item| item.category().to_string())
            .collect()
    }

    fn is_current(&self, page: i64) -> bool {
        usize::try_from(page).is_ok_and(|p| p == self.paginator.page())
    }

    fn refilter(&mut self) {
        let filter = &self.filter;
        self.filtered = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| filter.matches(*item))
            .map(|(index, _)| index)
            .collect();

        self.paginator.set_total_items(self.filtered.len());
        self.paginator.reset();

        debug!(
            query = self.filter.query(),
            category = %self.filter.category(),
            filtered = self.filtered.len(),
            total_pages = self.paginator.total_pages(),
            "filters applied"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Service;
    use crate::paginator::PageControl;
    use pretty_assertions::assert_eq;

    fn numbered(count: u64) -> Vec<Service> {
        (0..count)
            .map(|i| Service::new(i, &format!("Service {i}"), "", "general"))
            .collect()
    }

    fn scenario() -> Vec<Service> {
        vec![
            Service::new(1, "Logo Design", "", "design"),
            Service::new(2, "Copywriting", "", "writing"),
            Service::new(3, "Brand Design", "", "design"),
        ]
    }

    fn ids(view: &ViewState<Service>) -> Vec<u64> {
        view.items.iter().map(|s| s.id).collect()
    }

    #[test]
    fn test_empty_before_load() {
        let catalog: Catalog<Service> = Catalog::new();
        let view = catalog.current_view();
        assert!(!catalog.is_loaded());
        assert_eq!(view.filtered_count, 0);
        assert_eq!(view.current_page, 1);
        assert_eq!(view.total_pages, 1);
        assert!(view.items.is_empty());
        assert!(view.controls.is_empty());
    }

    #[test]
    fn test_load_empty() {
        let mut catalog: Catalog<Service> = Catalog::new();
        catalog.load(Vec::new());
        let view = catalog.current_view();
        assert!(catalog.is_loaded());
        assert!(view.is_empty());
        assert_eq!(view.total_pages, 1);
        assert!(view.items.is_empty());
    }

    #[test]
    fn test_windowing_fourteen_items() {
        let mut catalog = Catalog::new();
        catalog.load(numbered(14));

        let view = catalog.current_view();
        assert_eq!(view.total_pages, 3);
        assert_eq!(ids(&view), vec![0, 1, 2, 3, 4, 5]);

        let view = catalog.goto_page(2);
        assert_eq!(ids(&view), vec![6, 7, 8, 9, 10, 11]);

        let view = catalog.goto_page(3);
        assert_eq!(ids(&view), vec![12, 13]);
        assert_eq!(view.controls.last(), Some(&PageControl::Next { enabled: false }));
    }

    #[test]
    fn test_out_of_range_navigation_is_noop() {
        let mut catalog = Catalog::new();
        catalog.load(numbered(14));
        catalog.goto_page(2);

        for page in [-5, 0, 4, 99999, i64::MAX] {
            let view = catalog.goto_page(page);
            assert_eq!(view.current_page, 2, "page request {page}");
        }
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut catalog = Catalog::new();
        let mut items = numbered(14);
        items[13].category = "a".to_string();
        catalog.load(items);

        catalog.goto_page(3);
        let view = catalog.set_category("A");
        assert_eq!(view.current_page, 1);
        assert_eq!(view.filtered_count, 1);
    }

    #[test]
    fn test_query_change_resets_page_even_with_same_count() {
        let mut catalog = Catalog::new();
        catalog.load(numbered(14));
        catalog.goto_page(2);
        let view = catalog.set_query("service");
        assert_eq!(view.filtered_count, 14);
        assert_eq!(view.current_page, 1);
    }

    #[test]
    fn test_set_query_idempotent() {
        let mut catalog = Catalog::new();
        catalog.load(scenario());
        let once = catalog.set_query("design");
        let twice = catalog.set_query("design");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_design_scenario() {
        let mut catalog = Catalog::new();
        catalog.load(scenario());

        let view = catalog.set_category("design");
        assert_eq!(view.filtered_count, 2);
        assert_eq!(ids(&view), vec![1, 3]);

        let view = catalog.set_query("logo");
        assert_eq!(view.filtered_count, 1);
        assert_eq!(ids(&view), vec![1]);
    }

    #[test]
    fn test_goto_page_keeps_filters() {
        let mut catalog = Catalog::with_config(&Config::default().with_page_size(1));
        catalog.load(scenario());
        catalog.set_category("design");
        let view = catalog.goto_page(2);
        assert_eq!(ids(&view), vec![3]);
        assert_eq!(catalog.filter_state().category().to_string(), "design");
    }

    #[test]
    fn test_reload_resets_everything() {
        let mut catalog = Catalog::new();
        catalog.load(numbered(14));
        catalog.set_query("service 1");
        catalog.load(scenario());

        let view = catalog.current_view();
        assert!(catalog.filter_state().is_unfiltered());
        assert_eq!(view.filtered_count, 3);
        assert_eq!(view.current_page, 1);
    }

    #[test]
    fn test_reset_filters() {
        let mut catalog = Catalog::new();
        catalog.load(scenario());
        catalog.set_category("writing");
        catalog.set_query("zzz");
        assert!(catalog.current_view().is_empty());

        let view = catalog.reset_filters();
        assert_eq!(view.filtered_count, 3);
    }

    #[test]
    fn test_prev_next() {
        let mut catalog = Catalog::new();
        catalog.load(numbered(14));
        assert_eq!(catalog.prev_page().current_page, 1);
        assert_eq!(catalog.next_page().current_page, 2);
        assert_eq!(catalog.next_page().current_page, 3);
        assert_eq!(catalog.next_page().current_page, 3);
    }

    #[test]
    fn test_categories_first_seen_order() {
        let mut catalog = Catalog::new();
        catalog.load(vec![
            Service::new(1, "a", "", "Design"),
            Service::new(2, "b", "", "Writing"),
            Service::new(3, "c", "", "design"),
        ]);
        assert_eq!(catalog.categories(), vec!["Design", "Writing"]);
    }

    #[test]
    fn test_page_invariant_over_mixed_operations() {
        let mut catalog = Catalog::with_config(&Config::default().with_page_size(4));
        let mut items = numbered(23);
        for (i, item) in items.iter_mut().enumerate() {
            item.category = if i % 3 == 0 { "odd" } else { "even" }.to_string();
        }
        catalog.load(items);

        let pages = [-3, 7, 2, 0, 6, 1, 99, 3];
        let categories = ["all", "odd", "even", "none", "ODD"];
        let queries = ["", "1", "service 2", "x"];
        for (step, page) in pages.iter().enumerate() {
            catalog.set_category(categories[step % categories.len()]);
            catalog.goto_page(*page);
            catalog.set_query(queries[step % queries.len()]);
            let view = catalog.goto_page(*page);

            let query = queries[step % queries.len()];
            let category = categories[step % categories.len()].to_lowercase();
            let expected = catalog
                .items()
                .iter()
                .filter(|item| category == "all" || item.category == category)
                .filter(|item| {
                    item.title.to_lowercase().contains(query)
                        || item.description.to_lowercase().contains(query)
                })
                .count();
            assert_eq!(view.filtered_count, expected);
            assert_eq!(catalog.filtered_items().count(), expected);
            assert!(view.current_page >= 1 && view.current_page <= view.total_pages);
            assert_eq!(view.total_pages, expected.div_ceil(4).max(1));
        }
    }
}
