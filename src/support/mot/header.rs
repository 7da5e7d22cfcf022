/// Metadata lines preceding the column-name row of a `.mot` file.
///
/// The metadata is free-form, but simulation tools commonly write a title
/// line followed by `key=value` entries such as `nRows=101` and
/// `inDegrees=yes`. Keys are matched case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MotHeader<'a> {
    lines: Vec<&'a str>,
}

impl<'a> MotHeader<'a> {
    pub(super) fn new(lines: impl Iterator<Item = &'a str>) -> Self {
        Self {
            lines: lines.collect(),
        }
    }

    /// Returns the raw metadata lines.
    #[must_use]
    pub fn lines(&self) -> &[&'a str] {
        &self.lines
    }

    /// Returns the value of the first `key=value` entry matching `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&'a str> {
        self.lines.iter().copied().find_map(|line| {
            let (k, v) = line.split_once('=')?;
            k.trim().eq_ignore_ascii_case(key).then(|| v.trim())
        })
    }

    /// Row count declared by the `nRows` entry.
    #[must_use]
    pub fn rows(&self) -> Option<usize> {
        self.get("nRows")?.parse().ok()
    }

    /// Column count declared by the `nColumns` entry.
    #[must_use]
    pub fn columns(&self) -> Option<usize> {
        self.get("nColumns")?.parse().ok()
    }

    /// Whether rotations are stored in degrees, per the `inDegrees` entry.
    ///
    /// Returns `None` when the entry is absent or unrecognized.
    #[must_use]
    pub fn in_degrees(&self) -> Option<bool> {
        match self.get("inDegrees")?.to_ascii_lowercase().as_str() {
            "yes" | "true" => Some(true),
            "no" | "false" => Some(false),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "knee_sim\nversion=1\nnRows=101\n nColumns = 35\ninDegrees=yes\nendheader";

    #[test]
    fn reads_key_value_entries() {
        let header = MotHeader::new(TEXT.lines());

        assert_eq!(header.lines().len(), 6);
        assert_eq!(header.get("version"), Some("1"));
        assert_eq!(header.rows(), Some(101));
        assert_eq!(header.columns(), Some(35));
        assert_eq!(header.in_degrees(), Some(true));
    }

    #[test]
    fn missing_or_unknown_entries() {
        let header = MotHeader::new("title\ninDegrees=maybe".lines());

        assert_eq!(header.rows(), None);
        assert_eq!(header.in_degrees(), None);
        assert_eq!(header.get("title"), None);
    }
}
