//! Configuration for the catalog and its terminal front end.
//!
//! `Config` follows the same builder conventions as the components: start
//! from `Config::default()` and adjust with `with_*` methods. It also
//! deserializes with serde, with every field optional, so hosts can embed it
//! in their own configuration files.
//!
//! ```rust
//! use catalog_pager::config::Config;
//!
//! let config = Config::default().with_page_size(10);
//! assert_eq!(config.page_size, 10);
//! assert_eq!(config.description_limit, 130);
//!
//! let parsed: Config = serde_json::from_str(r#"{ "page_size": 0 }"#).unwrap();
//! assert_eq!(parsed.normalized().page_size, 1);
//! ```

use serde::Deserialize;

/// Number of items per page on the services page.
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Number of description characters shown on a card before it is cut.
pub const DEFAULT_DESCRIPTION_LIMIT: usize = 130;

/// Currency symbol placed in front of prices.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

/// Catalog and rendering settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Items per page. Values below 1 are treated as 1.
    pub page_size: usize,
    /// Maximum description length on a card, in characters.
    pub description_limit: usize,
    /// Prefix used when rendering prices.
    pub currency_symbol: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            description_limit: DEFAULT_DESCRIPTION_LIMIT,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }
}

impl Config {
    /// Sets the page size (builder pattern). The minimum is 1.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Sets the card description limit (builder pattern).
    pub fn with_description_limit(mut self, limit: usize) -> Self {
        self.description_limit = limit;
        self
    }

    /// Sets the currency symbol (builder pattern).
    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    /// Returns a copy with out-of-range values clamped.
    ///
    /// Deserialized configs bypass the builder, so callers that read a
    /// config from a file should normalize it before use.
    pub fn normalized(mut self) -> Self {
        self.page_size = self.page_size.max(1);
        self
    }
}
