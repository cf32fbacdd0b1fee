//! Errors from reading and writing data files.

use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

use quench_core::StoreError;

/// Errors from the data-file layer.
#[derive(Debug)]
pub enum IoError {
    /// The filesystem rejected an operation.
    Io {
        /// File or directory involved.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },
    /// A line could not be parsed.
    Parse {
        /// File being read.
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        /// What was wrong with it.
        reason: String,
    },
    /// A file held a different number of values than expected.
    LengthMismatch {
        /// File being read.
        path: PathBuf,
        /// Expected value count.
        expected: usize,
        /// Values actually found.
        actual: usize,
    },
    /// A grid entry the operation needs is missing or mistyped.
    Store(StoreError),
}

impl IoError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(path: impl Into<PathBuf>, line: usize, reason: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            line,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for IoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Parse { path, line, reason } => {
                write!(f, "{}:{line}: {reason}", path.display())
            }
            Self::LengthMismatch {
                path,
                expected,
                actual,
            } => write!(
                f,
                "{}: expected {expected} values, found {actual}",
                path.display()
            ),
            Self::Store(e) => write!(f, "{e}"),
        }
    }
}

impl Error for IoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Store(e) => Some(e),
            Self::Parse { .. } | Self::LengthMismatch { .. } => None,
        }
    }
}

impl From<StoreError> for IoError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_location() {
        let e = IoError::parse("data/params.ini", 3, "missing '='");
        assert_eq!(e.to_string(), "data/params.ini:3: missing '='");
        assert!(e.source().is_none());

        let e = IoError::io("data", io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert!(e.source().is_some());
    }
}
