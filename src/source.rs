//! Catalog data sources.
//!
//! The services data endpoint returns a JSON document of the form
//!
//! ```json
//! {
//!   "services": [{ "id": 1, "title": "...", "description": "...", "category": "Design" }],
//!   "categories": [{ "id": 2, "name": "Design" }]
//! }
//! ```
//!
//! A [`DataSource`] produces such a [`Payload`]. Anything that goes wrong
//! while doing so is reported as [`Error::DataUnavailable`]; callers show a
//! message and leave the catalog unloaded.

use crate::error::{Error, Result};
use crate::item::{CategoryRecord, Service};
use serde::Deserialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Decoded services document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Payload {
    /// The services, in the order the endpoint sent them.
    pub services: Vec<Service>,
    /// Known categories. Older documents omit this field.
    #[serde(default)]
    pub categories: Vec<CategoryRecord>,
}

impl Payload {
    /// Decodes a payload from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Category names from the `categories` array, in document order.
    pub fn category_names(&self) -> Vec<String> {
        self.categories.iter().map(|c| c.name.clone()).collect()
    }
}

/// Decodes a payload from a JSON string.
///
/// ```
/// use catalog_pager::source::parse_payload;
///
/// let payload = parse_payload(r#"{ "services": [] }"#).unwrap();
/// assert!(payload.services.is_empty());
///
/// assert!(parse_payload(r#"{ "items": [] }"#).is_err());
/// ```
pub fn parse_payload(text: &str) -> Result<Payload> {
    Ok(serde_json::from_str(text)?)
}

/// Something that can produce the catalog document.
pub trait DataSource {
    /// Fetches and decodes the document.
    fn fetch(&self) -> Result<Payload>;
}

/// Reads the document from a file on disk.
#[derive(Debug, Clone)]
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    /// Creates a source reading from `path`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The file this source reads.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataSource for JsonFile {
    fn fetch(&self) -> Result<Payload> {
        debug!(path = %self.path.display(), "reading catalog document");
        let file = std::fs::File::open(&self.path).map_err(|err| {
            warn!(path = %self.path.display(), error = %err, "catalog document missing");
            Error::from(err)
        })?;
        Payload::from_reader(std::io::BufReader::new(file))
    }
}

/// Serves a document held in memory.
#[derive(Debug, Clone)]
pub struct JsonText {
    text: String,
}

impl JsonText {
    /// Creates a source from JSON text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl DataSource for JsonText {
    fn fetch(&self) -> Result<Payload> {
        parse_payload(&self.text)
    }
}

impl<S: DataSource + ?Sized> DataSource for Box<S> {
    fn fetch(&self) -> Result<Payload> {
        (**self).fetch()
    }
}
