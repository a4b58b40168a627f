//! Key bindings for the catalog browser.
//!
//! ## Browsing
//!
//! - **Pages**: `←/h/pgup` previous, `→/l/pgdn` next, `1`-`9` jump,
//!   `g/home` first, `G/end` last
//! - **Categories**: `tab` next, `shift+tab` previous
//! - **Search**: `/` starts editing the query
//! - **Show all**: `esc` clears query and category
//! - **Quit**: `q`, `ctrl+c`
//!
//! ## Searching
//!
//! - **Accept**: `enter` keeps the query and returns to browsing
//! - **Cancel**: `esc` clears the query and returns to browsing

use crate::key;
use crate::paginator::PaginatorKeyMap;
use crossterm::event::{KeyCode, KeyModifiers};

/// Key bindings used by [`Browser`](super::Browser).
#[derive(Debug, Clone)]
pub struct BrowserKeyMap {
    /// Previous page.
    pub prev_page: key::Binding,
    /// Next page.
    pub next_page: key::Binding,
    /// First page.
    pub first_page: key::Binding,
    /// Last page.
    pub last_page: key::Binding,
    /// Select the next category.
    pub next_category: key::Binding,
    /// Select the previous category.
    pub prev_category: key::Binding,
    /// Start editing the search query.
    pub search: key::Binding,
    /// Keep the query and stop editing.
    pub accept_search: key::Binding,
    /// Clear the query and stop editing.
    pub cancel_search: key::Binding,
    /// Clear every filter.
    pub show_all: key::Binding,
    /// Quit.
    pub quit: key::Binding,
    /// Quit from any mode.
    pub force_quit: key::Binding,
}

impl Default for BrowserKeyMap {
    fn default() -> Self {
        let pages = PaginatorKeyMap::default();
        Self {
            prev_page: pages.prev_page,
            next_page: pages.next_page,
            first_page: key::Binding::new(vec![KeyCode::Home, KeyCode::Char('g')])
                .with_help("g/home", "first page"),
            last_page: key::Binding::new(vec![KeyCode::End, KeyCode::Char('G')])
                .with_help("G/end", "last page"),
            next_category: key::Binding::new(vec![KeyCode::Tab]).with_help("tab", "category"),
            prev_category: key::new_binding(vec![
                key::with_keys_str(&["shift+tab"]),
                key::with_help("shift+tab", "prev category"),
            ]),
            search: key::Binding::new(vec![KeyCode::Char('/')]).with_help("/", "search"),
            accept_search: key::Binding::new(vec![KeyCode::Enter]).with_help("enter", "apply"),
            cancel_search: key::Binding::new(vec![KeyCode::Esc]).with_help("esc", "cancel"),
            show_all: key::Binding::new(vec![KeyCode::Esc]).with_help("esc", "show all"),
            quit: key::Binding::new(vec![KeyCode::Char('q')]).with_help("q", "quit"),
            force_quit: key::Binding::new(vec![(KeyCode::Char('c'), KeyModifiers::CONTROL)])
                .with_help("ctrl+c", "quit"),
        }
    }
}

impl key::KeyMap for BrowserKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![
            &self.prev_page,
            &self.next_page,
            &self.next_category,
            &self.search,
            &self.show_all,
            &self.quit,
        ]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            vec![
                &self.prev_page,
                &self.next_page,
                &self.first_page,
                &self.last_page,
            ],
            vec![&self.next_category, &self.prev_category, &self.show_all],
            vec![&self.search, &self.accept_search, &self.cancel_search],
            vec![&self.quit, &self.force_quit],
        ]
    }
}

/// Bindings that apply while the query is being edited.
pub(super) struct SearchKeys<'a>(pub(super) &'a BrowserKeyMap);

impl key::KeyMap for SearchKeys<'_> {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.0.accept_search, &self.0.cancel_search]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![self.short_help()]
    }
}
