//! Row parsing for the data and name sections of a `.mot` file.

use std::path::Path;

use ndarray::Array2;

use super::{Delimiter, FormatError};

/// Columns retained from each row.
#[derive(Debug, Clone, Copy)]
pub(super) enum Columns<'a> {
    /// Every field; all rows must have the same width.
    All,

    /// Only the listed fields, in the listed order.
    Select(&'a [usize]),
}

/// Parses numbered data lines into a row-major matrix.
///
/// Blank lines are skipped. `lines` yields zero-based line indices paired
/// with line text; indices are reported 1-based in errors.
pub(super) fn parse_rows<'t>(
    path: &Path,
    header_lines: usize,
    lines: impl Iterator<Item = (usize, &'t str)>,
    delimiter: Delimiter,
    columns: Columns<'_>,
) -> Result<Array2<f64>, FormatError> {
    let mut values = Vec::new();
    let mut width = None;
    let mut rows = 0;

    for (index, line) in lines {
        if line.trim().is_empty() {
            continue;
        }
        let line_no = index + 1;
        let fields = delimiter.split(line);

        match columns {
            Columns::All => {
                let expected = *width.get_or_insert(fields.len());
                if fields.len() != expected {
                    return Err(FormatError::Ragged {
                        path: path.to_path_buf(),
                        line: line_no,
                        expected,
                        found: fields.len(),
                    });
                }
                for (column, field) in fields.iter().enumerate() {
                    values.push(parse_field(path, line_no, column, field)?);
                }
            }
            Columns::Select(selected) => {
                for &column in selected {
                    let field = select(path, line_no, &fields, column)?;
                    values.push(parse_field(path, line_no, column, field)?);
                }
            }
        }

        rows += 1;
    }

    if rows == 0 {
        return Err(FormatError::NoData {
            path: path.to_path_buf(),
            header_lines,
        });
    }

    let width = values.len() / rows;
    Ok(Array2::from_shape_fn((rows, width), |(r, c)| {
        values[r * width + c]
    }))
}

/// Splits the column-name line into owned names.
pub(super) fn parse_names(
    path: &Path,
    index: usize,
    line: &str,
    columns: Columns<'_>,
) -> Result<Vec<String>, FormatError> {
    let fields = Delimiter::Whitespace.split(line);

    match columns {
        Columns::All => Ok(fields.into_iter().map(str::to_owned).collect()),
        Columns::Select(selected) => selected
            .iter()
            .map(|&column| select(path, index + 1, &fields, column).map(str::to_owned))
            .collect(),
    }
}

fn select<'f>(
    path: &Path,
    line: usize,
    fields: &[&'f str],
    column: usize,
) -> Result<&'f str, FormatError> {
    fields
        .get(column)
        .copied()
        .ok_or_else(|| FormatError::MissingColumn {
            path: path.to_path_buf(),
            line,
            column,
            found: fields.len(),
        })
}

fn parse_field(path: &Path, line: usize, column: usize, field: &str) -> Result<f64, FormatError> {
    let field = field.trim();
    field
        .parse::<f64>()
        .map_err(|source| FormatError::InvalidNumber {
            path: path.to_path_buf(),
            line,
            column,
            value: field.to_owned(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(text: &str) -> impl Iterator<Item = (usize, &str)> {
        text.lines().enumerate()
    }

    #[test]
    fn parses_all_columns() {
        let data = parse_rows(
            Path::new("t.mot"),
            0,
            numbered("0 1.5 2\n\n0 3.5 4\n"),
            Delimiter::Whitespace,
            Columns::All,
        )
        .unwrap();

        assert_eq!(data.shape(), &[2, 3]);
        assert_eq!(data[[1, 1]], 3.5);
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = parse_rows(
            Path::new("t.mot"),
            0,
            numbered("1 2 3\n1 2\n"),
            Delimiter::Whitespace,
            Columns::All,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            FormatError::Ragged {
                line: 2,
                expected: 3,
                found: 2,
                ..
            }
        ));
    }

    #[test]
    fn selects_in_requested_order() {
        let data = parse_rows(
            Path::new("t.mot"),
            0,
            numbered("9\t1\t2\t3\n9\t4\t5\t6\n"),
            Delimiter::Tab,
            Columns::Select(&[3, 1]),
        )
        .unwrap();

        assert_eq!(data.row(0).to_vec(), [3.0, 1.0]);
        assert_eq!(data.row(1).to_vec(), [6.0, 4.0]);
    }

    #[test]
    fn narrow_row_reports_missing_column() {
        let err = parse_rows(
            Path::new("t.mot"),
            0,
            numbered("1\t2\n"),
            Delimiter::Tab,
            Columns::Select(&[5]),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            FormatError::MissingColumn {
                column: 5,
                found: 2,
                ..
            }
        ));
    }

    #[test]
    fn empty_tab_field_is_invalid() {
        let err = parse_rows(
            Path::new("t.mot"),
            0,
            numbered("1\t\t3\n"),
            Delimiter::Tab,
            Columns::Select(&[1]),
        )
        .unwrap_err();

        assert!(matches!(err, FormatError::InvalidNumber { column: 1, .. }));
    }

    #[test]
    fn no_rows_is_an_error() {
        let err = parse_rows(
            Path::new("t.mot"),
            14,
            numbered("\n  \n"),
            Delimiter::Whitespace,
            Columns::All,
        )
        .unwrap_err();

        assert!(matches!(err, FormatError::NoData { header_lines: 14, .. }));
    }

    #[test]
    fn names_select_by_position() {
        let names = parse_names(
            Path::new("t.mot"),
            13,
            "time\ta\tb\tc",
            Columns::Select(&[2, 0]),
        )
        .unwrap();

        assert_eq!(names, ["b", "time"]);
    }
}
