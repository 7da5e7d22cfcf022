use std::{num::ParseFloatError, path::PathBuf};

use thiserror::Error;

/// Errors that can occur while reading a `.mot` file.
///
/// Every variant carries the offending file path. Row-level variants also
/// carry the 1-based line number within the file.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The file does not exist.
    #[error("mot file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// The file exists but could not be read as text.
    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,

        #[source]
        source: std::io::Error,
    },

    /// The file ends before the data section begins.
    #[error("{}: expected at least {required} lines, found {found}", .path.display())]
    TooShort {
        path: PathBuf,
        required: usize,
        found: usize,
    },

    /// The data section holds no rows.
    #[error("{}: no data rows after the {header_lines}-line header", .path.display())]
    NoData { path: PathBuf, header_lines: usize },

    /// A row has a different field count than the first data row, or the
    /// column-name row disagrees with the data width.
    #[error("{}:{line}: expected {expected} fields, found {found}", .path.display())]
    Ragged {
        path: PathBuf,
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A row is too narrow to hold a requested column.
    #[error("{}:{line}: column {column} requested, row has {found} fields", .path.display())]
    MissingColumn {
        path: PathBuf,
        line: usize,
        column: usize,
        found: usize,
    },

    /// A field is not a floating-point number.
    #[error("{}:{line}: invalid number {value:?} in column {column}", .path.display())]
    InvalidNumber {
        path: PathBuf,
        line: usize,
        column: usize,
        value: String,

        #[source]
        source: ParseFloatError,
    },
}

impl FormatError {
    /// Returns the path of the file that failed to parse.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::NotFound { path }
            | Self::Io { path, .. }
            | Self::TooShort { path, .. }
            | Self::NoData { path, .. }
            | Self::Ragged { path, .. }
            | Self::MissingColumn { path, .. }
            | Self::InvalidNumber { path, .. } => path,
        }
    }
}
