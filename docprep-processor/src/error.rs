//! Error types for the line processor.

use crate::directive::DirectiveError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Every way a processing run can fail. None of these are recovered from.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// The input document or an included file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An `#include` line whose path could not be extracted.
    #[error("malformed include directive on line {line}: {source}")]
    MalformedDirective {
        line: usize,
        #[source]
        source: DirectiveError,
    },

    /// The output could not be created or written.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ProcessError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ProcessError::Read {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ProcessError::Write {
            path: path.into(),
            source,
        }
    }
}

/// Alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ProcessError>;
