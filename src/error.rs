//! Defines the errors raised while building, writing, and reading linear systems.

use std::{error, fmt, io, path::PathBuf};

/// An error type for all operations on matrices, vectors, and their text files.
#[derive(Debug)]
pub enum SystemError {
    /// A dimension of size zero was requested.
    EmptyDimension,
    /// Two objects with incompatible shapes were combined.
    IncompatibleShapes(Vec<usize>, Vec<usize>),
    /// A file could not be created, written, or read.
    Io {
        /// The file being accessed.
        path: PathBuf,
        /// The underlying error.
        source: io::Error,
    },
    /// A token in a text file is not a number.
    Parse {
        /// The 1-based line number of the token.
        line: usize,
        /// The offending token.
        token: String,
    },
    /// A matrix row holds a different number of values than the first row.
    Ragged {
        /// The 1-based line number of the row.
        line: usize,
        /// The number of values in the first row.
        expected: usize,
        /// The number of values in this row.
        found: usize,
    },
    /// A text file holds no values.
    Empty,
}

impl error::Error for SystemError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl fmt::Display for SystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDimension => write!(f, "Dimensions must be non-zero."),
            Self::IncompatibleShapes(l, r) => write!(f, "Incompatible shapes {:?} and {:?}.", l, r),
            Self::Io { path, source } => write!(f, "I/O error on {}: {}.", path.display(), source),
            Self::Parse { line, token } => write!(f, "Invalid number {:?} on line {}.", token, line),
            Self::Ragged {
                line,
                expected,
                found,
            } => write!(
                f,
                "Row on line {} has {} values (expected {}).",
                line, found, expected
            ),
            Self::Empty => write!(f, "No values found."),
        }
    }
}

impl SystemError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
