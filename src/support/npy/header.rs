//! The ASCII dictionary header of an NPY file.

use super::NpyError;

/// Element type written and accepted by this crate.
pub(super) const DESCR: &str = "<f8";

/// Preamble (magic, version, length, dictionary) is padded to this size.
const ALIGNMENT: usize = 64;

/// Bytes preceding the dictionary in a version 1.0 file.
const V1_PREFIX: usize = 6 + 2 + 2;

/// Parsed header dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Header {
    pub(super) descr: String,
    pub(super) fortran_order: bool,
    pub(super) shape: Vec<usize>,
}

impl Header {
    /// Encodes a C-ordered `f64` header for a version 1.0 file.
    ///
    /// The returned text includes trailing space padding and the final newline.
    pub(super) fn encode(shape: &[usize]) -> String {
        let shape = match shape {
            [n] => format!("({n},)"),
            dims => {
                let dims: Vec<String> = dims.iter().map(ToString::to_string).collect();
                format!("({})", dims.join(", "))
            }
        };
        let mut dict =
            format!("{{'descr': '{DESCR}', 'fortran_order': False, 'shape': {shape}, }}");

        let unpadded = V1_PREFIX + dict.len() + 1;
        let padding = (ALIGNMENT - unpadded % ALIGNMENT) % ALIGNMENT;
        dict.extend(std::iter::repeat_n(' ', padding));
        dict.push('\n');
        dict
    }

    pub(super) fn parse(text: &str) -> Result<Self, NpyError> {
        let body = text
            .trim()
            .strip_prefix('{')
            .and_then(|s| s.strip_suffix('}'))
            .ok_or_else(|| NpyError::header("header is not a dictionary"))?;

        let descr = unquote(field(body, "descr")?)?;

        let fortran_order = match field(body, "fortran_order")? {
            "True" => true,
            "False" => false,
            other => {
                return Err(NpyError::header(format!(
                    "fortran_order must be True or False, got {other:?}"
                )));
            }
        };

        let shape = field(body, "shape")?
            .strip_prefix('(')
            .and_then(|s| s.strip_suffix(')'))
            .ok_or_else(|| NpyError::header("shape is not a tuple"))?
            .split(',')
            .map(str::trim)
            .filter(|dim| !dim.is_empty())
            .map(|dim| {
                dim.parse::<usize>()
                    .map_err(|_| NpyError::header(format!("invalid dimension {dim:?}")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            descr: descr.to_owned(),
            fortran_order,
            shape,
        })
    }
}

/// Returns the raw value text following `'key':` in a dictionary body.
fn field<'a>(body: &'a str, key: &str) -> Result<&'a str, NpyError> {
    let start = [format!("'{key}'"), format!("\"{key}\"")]
        .iter()
        .find_map(|quoted| body.find(quoted.as_str()).map(|i| i + quoted.len()))
        .ok_or_else(|| NpyError::header(format!("missing key {key:?}")))?;

    let rest = body[start..]
        .trim_start()
        .strip_prefix(':')
        .ok_or_else(|| NpyError::header(format!("missing ':' after {key:?}")))?
        .trim_start();

    let end = match rest.chars().next() {
        Some('(') => rest.find(')').map(|i| i + 1),
        Some(q @ ('\'' | '"')) => rest[1..].find(q).map(|i| i + 2),
        Some(_) => Some(rest.find(',').unwrap_or(rest.len())),
        None => None,
    }
    .ok_or_else(|| NpyError::header(format!("unterminated value for {key:?}")))?;

    Ok(rest[..end].trim())
}

fn unquote(value: &str) -> Result<&str, NpyError> {
    value
        .strip_prefix('\'')
        .and_then(|v| v.strip_suffix('\''))
        .or_else(|| value.strip_prefix('"').and_then(|v| v.strip_suffix('"')))
        .ok_or_else(|| NpyError::header(format!("expected a quoted string, got {value:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoded_preamble_is_aligned() {
        let shapes: [&[usize]; 4] = [&[], &[3], &[2, 5, 7], &[1000, 20_000, 7]];
        for shape in shapes {
            let header = Header::encode(shape);
            assert_eq!((V1_PREFIX + header.len()) % ALIGNMENT, 0);
            assert!(header.ends_with('\n'));
        }
    }

    #[test]
    fn encodes_tuple_syntax() {
        assert!(Header::encode(&[4]).contains("'shape': (4,)"));
        assert!(Header::encode(&[2, 5, 7]).contains("'shape': (2, 5, 7)"));
        assert!(Header::encode(&[]).contains("'shape': ()"));
    }

    #[test]
    fn parses_encoded_header() {
        let header = Header::parse(&Header::encode(&[2, 5, 7])).unwrap();

        assert_eq!(
            header,
            Header {
                descr: DESCR.to_owned(),
                fortran_order: false,
                shape: vec![2, 5, 7],
            }
        );
    }

    #[test]
    fn parses_foreign_key_order() {
        let text = "{\"shape\": (3,), \"fortran_order\": True, \"descr\": \"<f8\"}";
        let header = Header::parse(text).unwrap();

        assert!(header.fortran_order);
        assert_eq!(header.shape, [3]);
    }

    #[test]
    fn rejects_missing_shape() {
        let err = Header::parse("{'descr': '<f8', 'fortran_order': False}").unwrap_err();
        assert!(matches!(err, NpyError::Header { .. }));
    }
}
