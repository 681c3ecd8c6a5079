//! Error types for the merge pipeline
//!
//! All three top-level kinds are fatal: the merge performs no retry,
//! no line skipping, and no rollback of partial output.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A single line failed to produce a valid [`crate::Record`]
#[derive(Debug, Error)]
pub enum ParseError {
    /// The line is not a JSON object
    #[error("line is not a JSON object: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The JSON object has no `timestamp` field
    #[error("missing \"timestamp\" field")]
    MissingTimestamp,

    /// The `timestamp` field is present but not a string
    #[error("\"timestamp\" field is not a string")]
    NonTextTimestamp,

    /// The `timestamp` string does not match the required format
    #[error("malformed timestamp {value:?}: expected YYYY-MM-DD HH:MM:SS")]
    BadTimestampFormat { value: String },
}

/// Fatal failure of a merge run
#[derive(Debug, Error)]
pub enum MergeError {
    /// An input path does not exist or cannot be read
    #[error("cannot read input file {}: {source}", .path.display())]
    InputNotFound { path: PathBuf, source: io::Error },

    /// A line in an input file failed to parse (1-based line number)
    #[error("{}:{line}: {source}", .path.display())]
    MalformedRecord {
        path: PathBuf,
        line: usize,
        source: ParseError,
    },

    /// The output file cannot be created or a write failed mid-run
    #[error("cannot write output file {}: {source}", .path.display())]
    OutputWrite { path: PathBuf, source: io::Error },
}

impl MergeError {
    pub(crate) fn input(path: &Path, source: io::Error) -> Self {
        Self::InputNotFound {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn malformed(path: &Path, line: usize, source: ParseError) -> Self {
        Self::MalformedRecord {
            path: path.to_path_buf(),
            line,
            source,
        }
    }

    pub(crate) fn output(path: &Path, source: io::Error) -> Self {
        Self::OutputWrite {
            path: path.to_path_buf(),
            source,
        }
    }
}
