//! Error taxonomy shared by the config generator and the mesh flipper
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for vrsetup operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading tile files or rewriting meshes.
///
/// Every variant is fatal to the run; messages identify the failing file,
/// tile or line so the caller can report them verbatim.
#[derive(Error, Debug)]
pub enum Error {
    #[error("file not found: {}", path.display())]
    MissingFile { path: PathBuf },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}:{line}: line is not valid UTF-8 text", path.display())]
    MalformedLine { path: PathBuf, line: usize },

    #[error("tile {tile}: missing required attribute `{key}`")]
    MissingAttribute { tile: usize, key: &'static str },

    #[error("tile {tile}: attribute `{key}` has malformed coordinate {value:?}: {reason}")]
    MalformedCoordinate {
        tile: usize,
        key: &'static str,
        value: String,
        reason: String,
    },

    #[error("line {line}: malformed mesh record: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Map an I/O error on `path`, folding `NotFound` into [`Error::MissingFile`].
    pub fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            Error::MissingFile { path }
        } else {
            Error::Io { path, source }
        }
    }
}
