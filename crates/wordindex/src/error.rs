//! Error types for wordindex

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Result type alias for wordindex operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for indexing and lookup
#[derive(Debug)]
pub enum Error {
    /// A zero-length word was passed to insert
    EmptyWord,

    /// A document could not be opened or read
    DocumentUnreadable {
        /// Path of the document
        path: PathBuf,
        /// Underlying failure
        source: io::Error,
    },
}

impl Error {
    /// Wrap an I/O failure for the document at `path`
    pub fn unreadable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::DocumentUnreadable {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyWord => write!(f, "Empty word"),
            Error::DocumentUnreadable { path, source } => {
                write!(f, "Cannot read document {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::DocumentUnreadable { source, .. } => Some(source),
            Error::EmptyWord => None,
        }
    }
}
