//! Saving and loading `f64` arrays in the NPY format.
//!
//! NPY is the binary array format understood by most numeric array
//! libraries. A file is a short preamble followed by raw element data:
//!
//! ```text
//! \x93NUMPY            magic string
//! u8 u8                format version (major, minor)
//! u16 / u32 (LE)       header length (u16 for 1.0, u32 for 2.0 and 3.0)
//! ASCII dict           {'descr': '<f8', 'fortran_order': False, 'shape': (…), }
//! f64 (LE) …           elements, C order unless fortran_order is True
//! ```
//!
//! Files are always written as version 1.0, little-endian `f64`, C order,
//! with the preamble padded to a multiple of 64 bytes.
//! Loading accepts versions 1.0 through 3.0 and either memory order.

mod error;
mod header;

pub use error::NpyError;

use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Read, Write},
    path::Path,
};

use ndarray::{Array3, ArrayBase, ArrayD, Data, Dimension, Ix3, IxDyn, ShapeBuilder};

use header::{DESCR, Header};

const MAGIC: &[u8; 6] = b"\x93NUMPY";

/// Writes `array` to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns [`NpyError::Io`] if the file cannot be created or written.
pub fn save<S, D>(path: impl AsRef<Path>, array: &ArrayBase<S, D>) -> Result<(), NpyError>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let path = path.as_ref();
    File::create(path)
        .and_then(|file| {
            let mut writer = BufWriter::new(file);
            write(&mut writer, array)?;
            writer.flush()
        })
        .map_err(|source| NpyError::Io {
            path: path.to_path_buf(),
            source,
        })
}

/// Writes `array` in NPY format to `writer`.
///
/// Elements are written in logical (C) order regardless of memory layout.
///
/// # Errors
///
/// Returns any error produced by the writer.
pub fn write<W, S, D>(mut writer: W, array: &ArrayBase<S, D>) -> io::Result<()>
where
    W: Write,
    S: Data<Elem = f64>,
    D: Dimension,
{
    let header = Header::encode(array.shape());
    let header_len = u16::try_from(header.len())
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "NPY header too long"))?;

    writer.write_all(MAGIC)?;
    writer.write_all(&[1, 0])?;
    writer.write_all(&header_len.to_le_bytes())?;
    writer.write_all(header.as_bytes())?;
    for value in array {
        writer.write_all(&value.to_le_bytes())?;
    }
    Ok(())
}

/// Loads an array of any dimensionality from `path`.
///
/// # Errors
///
/// Returns an [`NpyError`] if the file cannot be read or is not a valid
/// little-endian `f64` NPY file.
pub fn load(path: impl AsRef<Path>) -> Result<ArrayD<f64>, NpyError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| NpyError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read(BufReader::new(file)).map_err(|err| err.at(path))
}

/// Loads a three-dimensional array from `path`.
///
/// # Errors
///
/// Returns [`NpyError::Dimension`] if the stored array is not 3D, or any
/// error [`load`] can return.
pub fn load_array3(path: impl AsRef<Path>) -> Result<Array3<f64>, NpyError> {
    let array = load(path)?;
    let shape = array.shape().to_vec();
    array
        .into_dimensionality::<Ix3>()
        .map_err(|_| NpyError::Dimension { expected: 3, shape })
}

/// Reads an NPY array from `reader`.
///
/// # Errors
///
/// Returns an [`NpyError`] if the stream is not a valid little-endian
/// `f64` NPY array.
pub fn read<R: Read>(mut reader: R) -> Result<ArrayD<f64>, NpyError> {
    let mut magic = [0u8; 6];
    reader.read_exact(&mut magic)?;
    if &magic != MAGIC {
        return Err(NpyError::BadMagic);
    }

    let mut version = [0u8; 2];
    reader.read_exact(&mut version)?;
    let header_len = match version {
        [1, 0] => {
            let mut len = [0u8; 2];
            reader.read_exact(&mut len)?;
            usize::from(u16::from_le_bytes(len))
        }
        [2 | 3, 0] => {
            let mut len = [0u8; 4];
            reader.read_exact(&mut len)?;
            usize::try_from(u32::from_le_bytes(len))
                .map_err(|_| NpyError::header("header length exceeds address space"))?
        }
        [major, minor] => return Err(NpyError::UnsupportedVersion { major, minor }),
    };

    let mut header = vec![0u8; header_len];
    reader.read_exact(&mut header)?;
    let header = std::str::from_utf8(&header)
        .map_err(|_| NpyError::header("header is not valid text"))?;
    let header = Header::parse(header)?;

    if header.descr != DESCR {
        return Err(NpyError::UnsupportedDtype {
            descr: header.descr,
        });
    }

    let (expected, byte_len) = header
        .shape
        .iter()
        .try_fold(1usize, |acc, &dim| acc.checked_mul(dim))
        .and_then(|count| Some((count, count.checked_mul(size_of::<f64>())?)))
        .ok_or_else(|| NpyError::header("shape overflows address space"))?;
    let mut payload = Vec::new();
    reader.read_to_end(&mut payload)?;
    if payload.len() != byte_len {
        return Err(NpyError::Payload {
            shape: header.shape,
            expected,
            found: payload.len(),
        });
    }

    let values: Vec<f64> = payload
        .chunks_exact(size_of::<f64>())
        .map(|chunk| {
            let mut bytes = [0u8; 8];
            bytes.copy_from_slice(chunk);
            f64::from_le_bytes(bytes)
        })
        .collect();

    let shape = IxDyn(&header.shape);
    let array = if header.fortran_order {
        ArrayD::from_shape_vec(shape.f(), values)
    } else {
        ArrayD::from_shape_vec(shape, values)
    };
    array.map_err(|_| NpyError::Payload {
        shape: header.shape.clone(),
        expected,
        found: payload.len(),
    })
}
