#![warn(missing_docs)]

//! # catalog-pager
//!
//! Client-side catalog filtering and pagination, with a terminal front end
//! built on [bubbletea-rs](https://github.com/joshka/bubbletea-rs).
//!
//! ## Overview
//!
//! A catalog page loads its items once, lets the visitor narrow them down by
//! free-text search and by category, and shows them a page at a time. This
//! crate splits that into a pure state core and a renderer:
//!
//! - [`catalog::Catalog`] owns the items, the filters and the current page,
//!   and returns a [`view::ViewState`] after every operation.
//! - [`browser::Browser`] is a bubbletea-rs model that turns key presses into
//!   catalog operations and draws the latest view.
//!
//! The core never renders and never fails: out-of-range page requests are
//! ignored, filter changes always return to page 1, and a catalog that was
//! never loaded behaves like an empty one.
//!
//! ## Quick Start
//!
//! ```rust
//! use catalog_pager::prelude::*;
//!
//! let mut catalog = Catalog::new();
//! catalog.load(vec![
//!     Service::new(1, "Logo Design", "Memorable marks", "Design"),
//!     Service::new(2, "Copywriting", "Words that sell", "Writing"),
//!     Service::new(3, "Brand Design", "Identity systems", "Design"),
//! ]);
//!
//! let view = catalog.set_category("design");
//! assert_eq!(view.filtered_count, 2);
//! assert_eq!(view.current_page, 1);
//! assert_eq!(view.total_pages, 1);
//!
//! let view = catalog.goto_page(5); // ignored
//! assert_eq!(view.current_page, 1);
//! ```
//!
//! ## Loading data
//!
//! The services endpoint document decodes into [`source::Payload`]; any
//! [`source::DataSource`] can provide it:
//!
//! ```rust
//! use catalog_pager::prelude::*;
//!
//! let source = JsonText::new(r#"{
//!     "services": [
//!         { "id": 1, "title": "Logo Design", "description": "", "category": "Design", "price": 2500 }
//!     ]
//! }"#);
//!
//! let payload = source.fetch().expect("valid document");
//! let mut catalog = Catalog::new();
//! catalog.load(payload.services);
//! assert_eq!(catalog.current_view().filtered_count, 1);
//! ```
//!
//! ## Logging
//!
//! State transitions are reported through [`tracing`]. The crate never
//! installs a subscriber.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`catalog`] | Filtering and pagination state |
//! | [`filter`] | Query and category predicates |
//! | [`paginator`] | Page arithmetic and page controls |
//! | [`view`] | Render-ready snapshots |
//! | [`item`] | The `Item` trait and the `Service` record |
//! | [`source`] | JSON payload decoding and data sources |
//! | [`browser`] | bubbletea-rs front end |
//! | [`key`] | Key bindings |
//! | [`config`] | Settings |
//! | [`error`] | Error type |

pub mod browser;
pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod item;
pub mod key;
pub mod paginator;
pub mod source;
pub mod view;

pub use error::{Error, Result};

/// Common imports.
pub mod prelude {
    pub use crate::browser::{load_cmd, load_cmd_with, Browser, Loaded, LoadedMsg};
    pub use crate::catalog::Catalog;
    pub use crate::config::Config;
    pub use crate::error::{Error, Result};
    pub use crate::filter::{CategoryFilter, FilterState, ALL_CATEGORIES};
    pub use crate::item::{Item, Service};
    pub use crate::paginator::{PageControl, Paginator};
    pub use crate::source::{DataSource, JsonFile, JsonText, Payload};
    pub use crate::view::ViewState;
}
