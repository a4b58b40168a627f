//! Error types for catalog data loading.
//!
//! The filtering and pagination core is total over its inputs and never
//! fails. The only failure the crate knows about is the catalog data not
//! being available, either because it could not be read or because the
//! document was malformed.

use thiserror::Error;

/// Errors produced while obtaining catalog data.
#[derive(Debug, Error)]
pub enum Error {
    /// The catalog document could not be read or decoded.
    ///
    /// A catalog that receives this error is never loaded and keeps its
    /// empty-state view.
    #[error("catalog data unavailable: {reason}")]
    DataUnavailable {
        /// Short human readable description of what went wrong.
        reason: String,
        /// The underlying cause.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

impl Error {
    pub(crate) fn unavailable(
        reason: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Error::DataUnavailable {
            reason: reason.into(),
            source: Box::new(source),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::unavailable("malformed catalog document", err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::unavailable("catalog document could not be read", err)
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_is_data_unavailable() {
        let err: Error = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, Error::DataUnavailable { .. }));
        assert!(err.to_string().starts_with("catalog data unavailable"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_io_error_reason() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = Error::from(io);
        assert_eq!(
            err.to_string(),
            "catalog data unavailable: catalog document could not be read"
        );
    }
}
