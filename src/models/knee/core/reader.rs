//! Reading only the knee columns of a `.mot` file.
//!
//! Rows are split on single tabs and only the six knee fields are parsed,
//! so the filler field is never read and columns outside the knee range may
//! hold anything.

use std::path::Path;

use ndarray::Array2;

use crate::support::mot::{Delimiter, FormatError, MotFile};

use super::{
    KneeKinematics,
    channel::{NAMED_KNEE_COLUMNS, RAW_KNEE_COLUMNS},
};

/// Reads the six knee columns of a `.mot` file in file order (`Tz, Tx, Ty, FE, VV, IE`).
///
/// # Errors
///
/// Returns a [`FormatError`] if the file is missing, has fewer than 14
/// lines, has no data rows, has a row with fewer than 35 fields, or holds a
/// knee field that is not a number.
pub fn read_knee_columns(path: impl AsRef<Path>) -> Result<Array2<f64>, FormatError> {
    let file = MotFile::open(path)?;
    file.select_columns(Delimiter::Tab, &RAW_KNEE_COLUMNS)
}

/// Reads the six knee columns and their names from a `.mot` file.
///
/// Names and columns are both in file order.
///
/// # Errors
///
/// Returns a [`FormatError`] under the same conditions as
/// [`read_knee_columns`], or if the name row has fewer than 34 names.
pub fn read_knee_columns_with_names(
    path: impl AsRef<Path>,
) -> Result<(Vec<String>, Array2<f64>), FormatError> {
    let file = MotFile::open(path)?;
    let data = file.select_columns(Delimiter::Tab, &RAW_KNEE_COLUMNS)?;
    let names = file.select_column_names(&NAMED_KNEE_COLUMNS)?;
    Ok((names, data))
}

/// Reads the knee columns of a `.mot` file in canonical order.
///
/// # Errors
///
/// Returns a [`FormatError`] under the same conditions as [`read_knee_columns`].
pub fn read_knee_kinematics(path: impl AsRef<Path>) -> Result<KneeKinematics, FormatError> {
    let raw = read_knee_columns(path)?;
    Ok(KneeKinematics::from_file_order(raw.view()))
}
