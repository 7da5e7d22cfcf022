//! Reading `.mot` motion files.
//!
//! A `.mot` file is plain text with a fixed layout:
//!
//! ```text
//! lines 0..=12   free-form metadata (title, nRows=…, inDegrees=…, endheader)
//! line  13       column names, one per data field after the filler field
//! lines 14..     delimited floating-point rows
//! ```
//!
//! Data field 0 is filler and carries no physical meaning. [`read_mot`]
//! drops it, so column `k` of its result is labelled by name `k`.
//!
//! [`MotFile`] exposes the lower-level pieces (header metadata, column
//! selection, delimiter choice) used by the knee readers in
//! [`crate::models::knee`].

mod error;
mod header;
mod layout;
mod table;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::FormatError;
pub use header::MotHeader;
pub use layout::{Delimiter, HEADER_LINES, MotLayout, NAMES_LINE, PADDING_COLUMN, TIME_COLUMN};

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use ndarray::{Array2, s};
use tracing::debug;

use table::Columns;

/// A `.mot` file loaded into memory.
#[derive(Debug, Clone)]
pub struct MotFile {
    path: PathBuf,
    layout: MotLayout,
    text: String,
}

impl MotFile {
    /// Loads a file using the standard 14-line header layout.
    ///
    /// # Errors
    ///
    /// Returns a [`FormatError`] if the file is missing, unreadable, or
    /// shorter than the header.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, FormatError> {
        Self::open_with(path, MotLayout::default())
    }

    /// Loads a file using a custom layout.
    ///
    /// # Errors
    ///
    /// Returns a [`FormatError`] if the file is missing, unreadable, or
    /// shorter than the layout's header.
    pub fn open_with(path: impl AsRef<Path>, layout: MotLayout) -> Result<Self, FormatError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                FormatError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                FormatError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        let found = text.lines().count();
        let required = layout.required_lines();
        if found < required {
            return Err(FormatError::TooShort {
                path: path.to_path_buf(),
                required,
                found,
            });
        }

        debug!(path = %path.display(), lines = found, "loaded mot file");

        Ok(Self {
            path: path.to_path_buf(),
            layout,
            text,
        })
    }

    /// Path the file was loaded from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Line layout used to parse the file.
    #[must_use]
    pub fn layout(&self) -> MotLayout {
        self.layout
    }

    /// Metadata lines preceding the column-name row.
    #[must_use]
    pub fn header(&self) -> MotHeader<'_> {
        MotHeader::new(self.text.lines().take(self.layout.names_line))
    }

    /// Every whitespace-delimited name on the column-name row.
    ///
    /// # Errors
    ///
    /// Infallible for a loaded file; the `Result` matches [`Self::select_column_names`].
    pub fn column_names(&self) -> Result<Vec<String>, FormatError> {
        table::parse_names(
            &self.path,
            self.layout.names_line,
            self.names_line(),
            Columns::All,
        )
    }

    /// Names at the given positions of the column-name row.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::MissingColumn`] if the row is too short.
    pub fn select_column_names(&self, columns: &[usize]) -> Result<Vec<String>, FormatError> {
        table::parse_names(
            &self.path,
            self.layout.names_line,
            self.names_line(),
            Columns::Select(columns),
        )
    }

    /// Parses every field of every data row.
    ///
    /// # Errors
    ///
    /// Returns a [`FormatError`] if there are no data rows, rows differ in
    /// width, or a field is not a number.
    pub fn table(&self, delimiter: Delimiter) -> Result<Array2<f64>, FormatError> {
        self.parse(delimiter, Columns::All)
    }

    /// Parses the given data fields of every row, in the given order.
    ///
    /// # Errors
    ///
    /// Returns a [`FormatError`] if there are no data rows, a row lacks a
    /// requested field, or a field is not a number.
    pub fn select_columns(
        &self,
        delimiter: Delimiter,
        columns: &[usize],
    ) -> Result<Array2<f64>, FormatError> {
        self.parse(delimiter, Columns::Select(columns))
    }

    fn parse(
        &self,
        delimiter: Delimiter,
        columns: Columns<'_>,
    ) -> Result<Array2<f64>, FormatError> {
        let data = table::parse_rows(
            &self.path,
            self.layout.header_lines,
            self.text.lines().enumerate().skip(self.layout.header_lines),
            delimiter,
            columns,
        )?;
        debug!(
            path = %self.path.display(),
            rows = data.nrows(),
            columns = data.ncols(),
            "parsed mot data"
        );
        Ok(data)
    }

    fn names_line(&self) -> &str {
        self.text
            .lines()
            .nth(self.layout.names_line)
            .unwrap_or_default()
    }
}

/// Reads the numeric data of a `.mot` file, dropping the filler column.
///
/// Rows are split on whitespace and must all have the same width.
///
/// # Errors
///
/// Returns a [`FormatError`] if the file is missing, has fewer than 14
/// lines, has no data rows, has rows of differing width, or holds a field
/// that is not a number.
pub fn read_mot(path: impl AsRef<Path>) -> Result<Array2<f64>, FormatError> {
    let file = MotFile::open(path)?;
    file.table(Delimiter::Whitespace).map(drop_padding)
}

/// Reads the column names and numeric data of a `.mot` file.
///
/// Names come from the line immediately preceding the data and are
/// positionally aligned with the returned columns.
///
/// # Errors
///
/// Returns a [`FormatError`] under the same conditions as [`read_mot`], or
/// [`FormatError::Ragged`] if the name row and the data differ in width.
pub fn read_mot_with_names(
    path: impl AsRef<Path>,
) -> Result<(Vec<String>, Array2<f64>), FormatError> {
    let file = MotFile::open(path)?;
    let data = file.table(Delimiter::Whitespace).map(drop_padding)?;
    let names = file.column_names()?;
    if names.len() != data.ncols() {
        return Err(FormatError::Ragged {
            path: file.path().to_path_buf(),
            line: file.layout().names_line + 1,
            expected: data.ncols(),
            found: names.len(),
        });
    }
    Ok((names, data))
}

fn drop_padding(data: Array2<f64>) -> Array2<f64> {
    data.slice(s![.., PADDING_COLUMN + 1..]).to_owned()
}
