//! Filter state and the item predicate.
//!
//! Two independent predicates decide visibility, combined with logical AND:
//!
//! - **Category**: `all` matches everything, any other value must equal the
//!   item's category ignoring case.
//! - **Query**: an empty query matches everything, otherwise the lower-cased
//!   query must be a substring of the title or of the description.
//!
//! Both inputs are normalized (trimmed, lower-cased) when they are set, so
//! matching only lower-cases the item side.

use crate::item::Item;
use std::fmt;

/// The category sentinel that selects every item.
pub const ALL_CATEGORIES: &str = "all";

/// Category selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// No category restriction.
    #[default]
    All,
    /// Only items whose category equals this lower-cased label.
    Named(String),
}

impl CategoryFilter {
    /// Builds a filter from user input.
    ///
    /// The value is trimmed and lower-cased first, so `"All"` and `" all "`
    /// select everything just like `"all"`.
    ///
    /// ```
    /// use catalog_pager::filter::CategoryFilter;
    ///
    /// assert_eq!(CategoryFilter::parse("All"), CategoryFilter::All);
    /// assert_eq!(
    ///     CategoryFilter::parse(" Design "),
    ///     CategoryFilter::Named("design".to_string())
    /// );
    /// ```
    pub fn parse(input: &str) -> Self {
        let normalized = input.trim().to_lowercase();
        if normalized == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(normalized)
        }
    }

    /// Returns true if an item with the given category passes this filter.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => category.to_lowercase() == *name,
        }
    }

    /// Returns true for the `all` sentinel.
    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str(ALL_CATEGORIES),
            CategoryFilter::Named(name) => f.write_str(name),
        }
    }
}

/// The active free-text query and category selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    query: String,
    category: CategoryFilter,
}

impl FilterState {
    /// Default state: empty query, all categories.
    pub fn new() -> Self {
        Self::default()
    }

    /// The normalized query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The category selection.
    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    /// Stores a new query, trimmed and lower-cased.
    pub fn set_query(&mut self, text: &str) {
        self.query = text.trim().to_lowercase();
    }

    /// Stores a new category selection.
    pub fn set_category(&mut self, category: &str) {
        self.category = CategoryFilter::parse(category);
    }

    /// Returns true when neither predicate restricts anything.
    pub fn is_unfiltered(&self) -> bool {
        self.query.is_empty() && self.category.is_all()
    }

    /// Evaluates both predicates against an item.
    pub fn matches<I: Item>(&self, item: &I) -> bool {
        self.category.matches(item.category()) && self.matches_query(item)
    }

    fn matches_query<I: Item>(&self, item: &I) -> bool {
        if self.query.is_empty() {
            return true;
        }
        item.title().to_lowercase().contains(&self.query)
            || item.description().to_lowercase().contains(&self.query)
    }
}
