//! Catalog items.
//!
//! The catalog is generic over any type implementing [`Item`]. Items must be
//! displayable and cloneable, like list items elsewhere in the crate, and
//! expose the handful of fields the filters and cards need.
//!
//! [`Service`] is the record served by the services data endpoint and is the
//! item type used by default.
//!
//! # Examples
//!
//! ```
//! use catalog_pager::item::Item;
//! use std::fmt;
//!
//! #[derive(Clone)]
//! struct Video {
//!     id: u64,
//!     name: String,
//!     summary: String,
//!     channel: String,
//! }
//!
//! impl fmt::Display for Video {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         write!(f, "{}", self.name)
//!     }
//! }
//!
//! impl Item for Video {
//!     fn id(&self) -> u64 { self.id }
//!     fn title(&self) -> &str { &self.name }
//!     fn description(&self) -> &str { &self.summary }
//!     fn category(&self) -> &str { &self.channel }
//! }
//! ```

use serde::Deserialize;
use std::fmt;

/// Category label used by the data endpoint when a record has none.
pub const UNCATEGORIZED: &str = "General";

/// A record that can be listed, filtered and paginated.
pub trait Item: fmt::Display + Clone {
    /// Unique identifier of the record.
    fn id(&self) -> u64;

    /// Display title. Searched by the free-text filter.
    fn title(&self) -> &str;

    /// Display description. Searched by the free-text filter.
    fn description(&self) -> &str;

    /// Category label matched by the category filter.
    fn category(&self) -> &str;

    /// Optional price. Items without one render as "contact for price".
    fn price(&self) -> Option<f64> {
        None
    }
}

fn uncategorized() -> String {
    UNCATEGORIZED.to_string()
}

/// A service offered on the site, as returned by the services data endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Service {
    /// Database identifier.
    pub id: u64,
    /// Service name.
    pub title: String,
    /// Long form description.
    pub description: String,
    /// Starting price, when the service has a fixed one.
    #[serde(default)]
    pub price: Option<f64>,
    /// Relative path of the cover image.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Category name.
    #[serde(default = "uncategorized", deserialize_with = "category_or_default")]
    pub category: String,
    /// Category identifier, absent for uncategorized services.
    #[serde(default)]
    pub category_id: Option<u64>,
    /// Creation timestamp in ISO-8601 form.
    #[serde(default)]
    pub created_at: Option<String>,
}

// The endpoint sends `"General"` for uncategorized services, but older
// documents carry an explicit null.
fn category_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.unwrap_or_else(uncategorized))
}

impl Service {
    /// Creates a service with the required fields; everything optional is empty.
    pub fn new(id: u64, title: &str, description: &str, category: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            description: description.to_string(),
            price: None,
            image_url: None,
            category: category.to_string(),
            category_id: None,
            created_at: None,
        }
    }

    /// Sets the price (builder pattern).
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

impl Item for Service {
    fn id(&self) -> u64 {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn price(&self) -> Option<f64> {
        self.price
    }
}

/// A category entry from the data endpoint's `categories` array.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CategoryRecord {
    /// Category identifier.
    pub id: u64,
    /// Category display name.
    pub name: String,
}
