//! Error types for accessibility snapshots.

use std::path::PathBuf;

/// Result type alias for snapshot operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while producing an accessibility snapshot.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The traversal went deeper than the configured limit, which almost
    /// always means the node tree contains a cycle.
    #[error("accessibility tree exceeds maximum depth of {depth} (cyclic tree?)")]
    CyclicTree { depth: usize },

    /// The environment-enable hook could not switch on the accessibility subsystem.
    #[error("failed to enable accessibility: {0}")]
    EnableFailed(String),

    /// Invalid snapshot configuration.
    #[error("invalid snapshot configuration: {message}")]
    Config { message: String },

    /// File I/O error.
    #[error("failed to read snapshot configuration '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An AccessKit tree update did not name a root node that it contains.
    #[error("accessibility tree update has no root node")]
    MissingRoot,

    /// A trait name that is not part of the canonical trait list.
    #[error("unknown accessibility trait '{0}'")]
    UnknownTrait(String),
}

impl Error {
    /// Create an enable error.
    pub fn enable_failed(message: impl Into<String>) -> Self {
        Self::EnableFailed(message.into())
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
