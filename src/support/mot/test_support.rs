use std::{fmt::Write as _, fs, path::Path};

/// Raw data fields per row: filler, time, then columns up to the last knee channel.
pub(crate) const RAW_FIELDS: usize = 35;

/// Builds synthetic `.mot` text with deterministic values.
///
/// Data field `c` of row `r` holds `offset + 100 r + c + 0.25`, except the
/// filler field which holds `padding`. All values are exact in binary.
#[derive(Debug, Clone)]
pub(crate) struct MotFixture {
    rows: usize,
    fields: usize,
    padding: f64,
    offset: f64,
}

impl MotFixture {
    pub(crate) fn new(rows: usize) -> Self {
        Self {
            rows,
            fields: RAW_FIELDS,
            padding: 0.0,
            offset: 0.0,
        }
    }

    pub(crate) fn fields(self, fields: usize) -> Self {
        Self { fields, ..self }
    }

    pub(crate) fn padding(self, padding: f64) -> Self {
        Self { padding, ..self }
    }

    pub(crate) fn offset(self, offset: f64) -> Self {
        Self { offset, ..self }
    }

    /// Value written at data field `column` of row `row`.
    pub(crate) fn value(&self, row: usize, column: usize) -> f64 {
        if column == 0 {
            return self.padding;
        }
        self.offset + 100.0 * row as f64 + column as f64 + 0.25
    }

    pub(crate) fn render(&self) -> String {
        let mut text = String::new();
        let metadata = [
            "knee_fixture".to_owned(),
            "version=1".to_owned(),
            format!("nRows={}", self.rows),
            format!("nColumns={}", self.fields),
            "inDegrees=yes".to_owned(),
        ];
        for line in &metadata {
            writeln!(text, "{line}").unwrap();
        }
        for i in metadata.len()..12 {
            writeln!(text, "comment line {i}").unwrap();
        }
        writeln!(text, "endheader").unwrap();

        let names: Vec<String> = (1..self.fields).map(field_name).collect();
        writeln!(text, "{}", names.join("\t")).unwrap();

        for row in 0..self.rows {
            let fields: Vec<String> = (0..self.fields)
                .map(|column| self.value(row, column).to_string())
                .collect();
            writeln!(text, "{}", fields.join("\t")).unwrap();
        }
        text
    }

    pub(crate) fn write(&self, path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, self.render()).unwrap();
    }
}

/// Column name labelling data field `column`.
pub(crate) fn field_name(column: usize) -> String {
    match column {
        1 => "time".to_owned(),
        29 => "knee_tz".to_owned(),
        30 => "knee_tx".to_owned(),
        31 => "knee_ty".to_owned(),
        32 => "knee_fe".to_owned(),
        33 => "knee_vv".to_owned(),
        34 => "knee_ie".to_owned(),
        _ => format!("col{column}"),
    }
}
