/// Number of lines preceding the first data row.
pub const HEADER_LINES: usize = 14;

/// Zero-based line index of the column-name row.
pub const NAMES_LINE: usize = 13;

/// Data field holding filler values with no physical meaning.
///
/// The column-name row has no entry for this field, so name index `k`
/// labels data field `k + 1`.
pub const PADDING_COLUMN: usize = 0;

/// Data field holding elapsed simulation time.
pub const TIME_COLUMN: usize = 1;

/// Line positions of a `.mot` file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotLayout {
    /// Lines skipped before the data section.
    pub header_lines: usize,

    /// Zero-based line index of the column-name row.
    pub names_line: usize,
}

impl Default for MotLayout {
    fn default() -> Self {
        Self {
            header_lines: HEADER_LINES,
            names_line: NAMES_LINE,
        }
    }
}

impl MotLayout {
    /// Minimum line count a file must have to match this layout.
    pub(super) fn required_lines(&self) -> usize {
        self.header_lines.max(self.names_line + 1)
    }
}

/// Field separator used when splitting data rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Delimiter {
    /// Runs of spaces or tabs; leading and trailing whitespace is ignored.
    #[default]
    Whitespace,

    /// A single tab character; adjacent tabs delimit an empty field.
    Tab,
}

impl Delimiter {
    pub(super) fn split(self, line: &str) -> Vec<&str> {
        match self {
            Self::Whitespace => line.split_whitespace().collect(),
            Self::Tab => line.split('\t').collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_collapses_runs() {
        assert_eq!(Delimiter::Whitespace.split("  1.0\t 2.0   3.0 "), ["1.0", "2.0", "3.0"]);
    }

    #[test]
    fn tab_keeps_empty_fields() {
        assert_eq!(Delimiter::Tab.split("\t1.0\t\t2.0"), ["", "1.0", "", "2.0"]);
    }

    #[test]
    fn names_line_precedes_data() {
        let layout = MotLayout::default();
        assert_eq!(layout.names_line + 1, layout.header_lines);
        assert_eq!(layout.required_lines(), 14);
    }
}
