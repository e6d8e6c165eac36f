//! Data loading error types.

/// Errors from loading the flight data file.
///
/// A missing or malformed file is the one genuinely fatal condition in
/// the system; it belongs here, never in the search core.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// The data file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The data file is not valid JSON or fails record validation.
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
