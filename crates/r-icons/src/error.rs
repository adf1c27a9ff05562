//! Error types for schema loading and theme output.

use std::path::PathBuf;

/// Result type alias for theme generation operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading schema documents or persisting the
/// composed theme. Composition itself cannot fail; every fault here belongs
/// to the I/O boundary.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Failed to read a schema document from disk.
    #[error("failed to read schema '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A schema document is not a valid theme layer.
    #[error("invalid schema document '{path}': {source}")]
    Schema {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The composed document could not be serialized.
    #[error("failed to serialize theme document: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },

    /// The composed document could not be written out.
    #[error("failed to write theme '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a schema read error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a malformed-schema error.
    pub fn schema(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Schema {
            path: path.into(),
            source,
        }
    }

    /// Create a serialization error.
    pub fn serialize(source: serde_json::Error) -> Self {
        Self::Serialize { source }
    }

    /// Create an output write error.
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}
