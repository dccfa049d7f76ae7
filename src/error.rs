//! Error types for the loader and the database phase.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Boxed error returned by [`crate::seed::GrapeStore`] implementations.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failure while reading or parsing a grape file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// A malformed line, located by file and 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("error on line {line} in file {}: {kind}", .path.display())]
pub struct ParseError {
    pub path: PathBuf,
    pub line: usize,
    pub kind: ParseErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("number of items {got}, expect: {want}")]
    FieldCountMismatch { got: usize, want: usize },

    #[error("color '{value}' is not recognized")]
    UnknownColor { value: String },
}

/// Failure in the database phase.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0} must not be empty")]
    MissingParameter(&'static str),

    #[error("error dialing to database {host_port}: {source}")]
    Connect {
        host_port: String,
        #[source]
        source: BoxError,
    },

    #[error("error removing existing grapes from {collection}: {source}")]
    Delete {
        collection: String,
        #[source]
        source: BoxError,
    },

    #[error("error inserting grape #{index} '{name}': {source}")]
    Insert {
        index: usize,
        name: String,
        #[source]
        source: BoxError,
    },
}
