//! Errors surfaced by tree rendering.

use std::io;
use thiserror::Error;

/// A directory in the walked filesystem could not be listed.
///
/// Any listing failure aborts the whole render; no partial report is produced.
#[derive(Debug, Error)]
#[error("cannot list {path}")]
pub struct ListError {
    /// Filesystem path whose listing failed.
    pub path: String,
    /// Underlying cause reported by the filesystem.
    #[source]
    pub source: io::Error,
}

impl ListError {
    pub fn new(path: impl Into<String>, source: io::Error) -> Self {
        Self {
            path: path.into(),
            source,
        }
    }

    /// The io error kind of the underlying cause.
    pub fn kind(&self) -> io::ErrorKind {
        self.source.kind()
    }
}
