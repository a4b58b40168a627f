//! Terminal front end for a [`Catalog`].
//!
//! `Browser<I>` is a bubbletea-rs model that draws a catalog as a list of
//! cards and maps key presses onto the catalog operations:
//!
//! - typing in search mode calls [`Catalog::set_query`] on every keystroke
//! - cycling the category pills calls [`Catalog::set_category`]
//! - page keys call [`Catalog::goto_page`]
//!
//! The browser never touches the collection itself. It keeps the latest
//! [`ViewState`] returned by the catalog and renders only that.
//!
//! ## Loading
//!
//! Data arrives as a [`LoadedMsg`]. [`load_cmd`] wraps a
//! [`DataSource`] in a command that fetches the document and delivers the
//! message for a `Browser<Service>`, so a typical program returns it from
//! `init`. Browsers over other item types use [`load_cmd_with`], which maps
//! the fetched services into their own items:
//!
//! ```no_run
//! use catalog_pager::browser::{load_cmd, Browser};
//! use catalog_pager::item::Service;
//! use catalog_pager::source::JsonFile;
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct App {
//!     browser: Browser<Service>,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let browser = Browser::new();
//!         (Self { browser }, Some(load_cmd(JsonFile::new("services.json"))))
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.browser.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.browser.view()
//!     }
//! }
//! ```
//!
//! A failed fetch leaves the catalog unloaded and shows an error banner in
//! place of the cards.

pub mod keys;
pub mod rendering;
pub mod style;

#[cfg(test)]
mod tests;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::Result;
use crate::filter::ALL_CATEGORIES;
use crate::item::Item;
use crate::paginator::Type;
use crate::source::{DataSource, Payload};
use crate::view::ViewState;
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg, WindowSizeMsg};
use crossterm::event::{KeyCode, KeyModifiers};
use keys::BrowserKeyMap;
use style::BrowserStyles;
use tracing::{debug, warn};
use unicode_segmentation::UnicodeSegmentation;

const DEFAULT_WIDTH: usize = 80;

/// Input mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Keys navigate pages and categories.
    #[default]
    Browsing,
    /// Keys edit the search query.
    Searching,
}

/// Data loading status.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Status {
    /// No data has arrived yet.
    #[default]
    Loading,
    /// The catalog is loaded.
    Ready,
    /// Loading failed; holds the error description.
    Failed(String),
}

/// Items and category labels ready to be loaded into a browser.
#[derive(Debug, Clone)]
pub struct Loaded<I> {
    /// The collection.
    pub items: Vec<I>,
    /// Category labels for the selector. When empty, the labels are
    /// derived from the items.
    pub categories: Vec<String>,
}

/// Result of fetching catalog data.
#[derive(Debug)]
pub struct LoadedMsg<I> {
    /// The fetched data, or why it is unavailable.
    pub result: Result<Loaded<I>>,
}

impl<I> LoadedMsg<I> {
    /// Wraps a fetch result.
    pub fn new(result: Result<Loaded<I>>) -> Self {
        Self { result }
    }
}

/// Creates a command that fetches from `source` and delivers a
/// [`LoadedMsg<Service>`] for a `Browser<Service>`.
pub fn load_cmd<S>(source: S) -> Cmd
where
    S: DataSource + Send + Sync + 'static,
{
    load_cmd_with(source, |payload| payload.services)
}

/// Creates a command that fetches from `source`, turns the payload into
/// items with `map` and delivers a [`LoadedMsg<I>`].
///
/// ```
/// use catalog_pager::browser::load_cmd_with;
/// use catalog_pager::item::Service;
/// use catalog_pager::source::JsonText;
///
/// // Only services with a listed price.
/// let cmd = load_cmd_with(JsonText::new(r#"{ "services": [] }"#), |payload| {
///     payload
///         .services
///         .into_iter()
///         .filter(|s| s.price.is_some())
///         .collect::<Vec<Service>>()
/// });
/// # drop(cmd);
/// ```
pub fn load_cmd_with<S, I, F>(source: S, map: F) -> Cmd
where
    S: DataSource + Send + Sync + 'static,
    I: Item + Send + Sync + 'static,
    F: Fn(Payload) -> Vec<I> + Send + Sync + 'static,
{
    bubbletea_rs::tick(std::time::Duration::from_nanos(1), move |_| {
        let result = source.fetch().map(|payload| Loaded {
            categories: payload.category_names(),
            items: map(payload),
        });
        Box::new(LoadedMsg::<I>::new(result)) as Msg
    })
}

/// Interactive catalog view.
#[derive(Debug, Clone)]
pub struct Browser<I: Item> {
    /// Heading shown above the search line.
    pub title: String,
    /// Singular noun used in the results line, e.g. `"service"`.
    pub item_noun: String,
    /// Key bindings.
    pub keymap: BrowserKeyMap,
    /// Styles.
    pub styles: BrowserStyles,
    /// How the page position is drawn under the cards.
    pub pagination: Type,
    catalog: Catalog<I>,
    view: ViewState<I>,
    config: Config,
    status: Status,
    mode: Mode,
    query: String,
    categories: Vec<String>,
    selected_category: usize,
    width: usize,
}

impl<I: Item + Send + Sync + 'static> Default for Browser<I> {
    fn default() -> Self {
        Self::with_config(Config::default())
    }
}

impl<I: Item + Send + Sync + 'static> Browser<I> {
    /// Creates an empty browser with default settings, waiting for data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty browser with the given settings.
    pub fn with_config(config: Config) -> Self {
        let config = config.normalized();
        let catalog = Catalog::with_config(&config);
        let view = catalog.current_view();
        Self {
            title: "Services".to_string(),
            item_noun: "service".to_string(),
            keymap: BrowserKeyMap::default(),
            styles: BrowserStyles::default(),
            pagination: Type::default(),
            catalog,
            view,
            config,
            status: Status::Loading,
            mode: Mode::Browsing,
            query: String::new(),
            categories: vec![ALL_CATEGORIES.to_string()],
            selected_category: 0,
            width: DEFAULT_WIDTH,
        }
    }

    /// Sets the heading (builder pattern).
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the noun used in the results line (builder pattern).
    pub fn with_item_noun(mut self, noun: impl Into<String>) -> Self {
        self.item_noun = noun.into();
        self
    }

    /// Sets the pagination style (builder pattern).
    pub fn with_pagination(mut self, pagination: Type) -> Self {
        self.pagination = pagination;
        self
    }

    /// Loads items directly, bypassing [`LoadedMsg`].
    pub fn load(&mut self, loaded: Loaded<I>) {
        self.catalog.load(loaded.items);
        let labels = if loaded.categories.is_empty() {
            self.catalog.categories()
        } else {
            loaded.categories
        };
        self.categories = std::iter::once(ALL_CATEGORIES.to_string())
            .chain(labels)
            .collect();
        self.selected_category = 0;
        self.query.clear();
        self.mode = Mode::Browsing;
        self.status = Status::Ready;
        self.view = self.catalog.current_view();
    }

    /// The underlying catalog.
    pub fn catalog(&self) -> &Catalog<I> {
        &self.catalog
    }

    /// The view currently drawn.
    pub fn view_state(&self) -> &ViewState<I> {
        &self.view
    }

    /// Loading status.
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Input mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The query as typed.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The selected category label; `"all"` when unrestricted.
    pub fn selected_category(&self) -> &str {
        &self.categories[self.selected_category]
    }

    /// Category selector entries, `"all"` first.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Selects a category by label and refilters.
    ///
    /// A label missing from the selector selects `"all"`.
    pub fn select_category(&mut self, label: &str) {
        let wanted = label.trim().to_lowercase();
        match self
            .categories
            .iter()
            .position(|c| c.to_lowercase() == wanted)
        {
            Some(index) => {
                self.selected_category = index;
                self.view = self.catalog.set_category(label);
            }
            None => {
                warn!(category = %label, "unknown category, showing all");
                self.selected_category = 0;
                self.view = self.catalog.set_category(ALL_CATEGORIES);
            }
        }
    }

    /// Clears query and category, like the empty state's "show all".
    pub fn show_all(&mut self) {
        self.query.clear();
        self.selected_category = 0;
        self.view = self.catalog.reset_filters();
    }

    fn handle_loaded(&mut self, msg: LoadedMsg<I>) {
        match msg.result {
            Ok(loaded) => self.load(loaded),
            Err(err) => {
                warn!(error = %err, "catalog data unavailable");
                self.status = Status::Failed(err.to_string());
            }
        }
    }

    fn cycle_category(&mut self, forward: bool) {
        let count = self.categories.len();
        if count <= 1 {
            return;
        }
        self.selected_category = if forward {
            (self.selected_category + 1) % count
        } else {
            (self.selected_category + count - 1) % count
        };
        let label = self.categories[self.selected_category].clone();
        debug!(category = %label, "category selected");
        self.view = self.catalog.set_category(&label);
    }

    fn handle_search_key(&mut self, key_msg: &KeyMsg) -> Option<Cmd> {
        if self.keymap.force_quit.matches(key_msg) {
            return Some(bubbletea_rs::quit());
        }
        if self.keymap.accept_search.matches(key_msg) {
            self.mode = Mode::Browsing;
        } else if self.keymap.cancel_search.matches(key_msg) {
            self.mode = Mode::Browsing;
            self.query.clear();
            self.view = self.catalog.set_query("");
        } else {
            match key_msg.key {
                KeyCode::Backspace => {
                    if let Some((start, _)) = self.query.grapheme_indices(true).next_back() {
                        self.query.truncate(start);
                        self.view = self.catalog.set_query(&self.query);
                    }
                }
                KeyCode::Char(c)
                    if !key_msg
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
                {
                    self.query.push(c);
                    self.view = self.catalog.set_query(&self.query);
                }
                _ => {}
            }
        }
        None
    }

    fn handle_browse_key(&mut self, key_msg: &KeyMsg) -> Option<Cmd> {
        if self.keymap.quit.matches(key_msg) || self.keymap.force_quit.matches(key_msg) {
            return Some(bubbletea_rs::quit());
        }

        if self.keymap.search.matches(key_msg) {
            self.mode = Mode::Searching;
        } else if self.keymap.show_all.matches(key_msg) {
            self.show_all();
        } else if self.keymap.next_category.matches(key_msg) {
            self.cycle_category(true);
        } else if self.keymap.prev_category.matches(key_msg) {
            self.cycle_category(false);
        } else if self.keymap.next_page.matches(key_msg) {
            self.view = self.catalog.next_page();
        } else if self.keymap.prev_page.matches(key_msg) {
            self.view = self.catalog.prev_page();
        } else if self.keymap.first_page.matches(key_msg) {
            self.view = self.catalog.goto_page(1);
        } else if self.keymap.last_page.matches(key_msg) {
            let last = self.view.total_pages as i64;
            self.view = self.catalog.goto_page(last);
        } else if let KeyCode::Char(c) = key_msg.key {
            if let Some(page) = c.to_digit(10).filter(|d| *d > 0) {
                self.view = self.catalog.goto_page(i64::from(page));
            }
        }
        None
    }
}

impl<I: Item + Send + Sync + 'static> BubbleTeaModel for Browser<I> {
    fn init() -> (Self, Option<Cmd>) {
        (Self::new(), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if msg.is::<LoadedMsg<I>>() {
            if let Ok(loaded) = msg.downcast::<LoadedMsg<I>>() {
                self.handle_loaded(*loaded);
            }
            return None;
        }

        if let Some(size) = msg.downcast_ref::<WindowSizeMsg>() {
            self.width = (size.width as usize).max(1);
            return None;
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            return match self.mode {
                Mode::Searching => self.handle_search_key(key_msg),
                Mode::Browsing => self.handle_browse_key(key_msg),
            };
        }
        None
    }

    fn view(&self) -> String {
        [self.view_header(), self.view_body(), self.view_footer()].join("\n\n")
    }
}
