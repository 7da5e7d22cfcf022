use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur while saving or loading an NPY array file.
#[derive(Debug, Error)]
pub enum NpyError {
    /// A file operation failed.
    #[error("I/O error on {}", .path.display())]
    Io {
        path: PathBuf,

        #[source]
        source: io::Error,
    },

    /// Reading or writing the underlying stream failed.
    #[error("stream error")]
    Stream(#[from] io::Error),

    /// The input does not start with the NPY magic string.
    #[error("missing NPY magic string")]
    BadMagic,

    /// The format version is not one this reader understands.
    #[error("unsupported NPY version {major}.{minor}")]
    UnsupportedVersion { major: u8, minor: u8 },

    /// The stored element type is not little-endian `f64`.
    #[error("unsupported dtype {descr:?}, expected '<f8'")]
    UnsupportedDtype { descr: String },

    /// The header dictionary could not be parsed.
    #[error("malformed header: {context}")]
    Header { context: String },

    /// The payload length disagrees with the declared shape.
    #[error("shape {shape:?} requires {expected} values, payload holds {found} bytes")]
    Payload {
        shape: Vec<usize>,
        expected: usize,
        found: usize,
    },

    /// The array does not have the requested number of dimensions.
    #[error("expected a {expected}-dimensional array, found shape {shape:?}")]
    Dimension { expected: usize, shape: Vec<usize> },
}

impl NpyError {
    pub(super) fn header(context: impl Into<String>) -> Self {
        Self::Header {
            context: context.into(),
        }
    }

    /// Attaches a file path to a bare stream error.
    pub(super) fn at(self, path: impl Into<PathBuf>) -> Self {
        match self {
            Self::Stream(source) => Self::Io {
                path: path.into(),
                source,
            },
            other => other,
        }
    }
}
