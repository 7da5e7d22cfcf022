//! Aggregating knee kinematics across numbered simulation directories.
//!
//! Simulation `i` of a batch lives at `<root>/sim_dir.<i>/<prefix><i>.mot`.
//! Each file contributes its time column and six knee columns, reordered to
//! `time, Tx, Ty, Tz, FE, VV, IE`, to one slice of a `[sim, row, channel]`
//! array. The completed array is written to `<root>/kneeKinArray.npy`.
//!
//! Every simulation must have the same row count as simulation 0; a
//! mismatch aborts the batch with [`BatchError::ShapeMismatch`].

mod config;
mod error;
mod result;

pub use config::BatchConfig;
pub use error::BatchError;
pub use result::{BatchResult, Persistence};

use std::{
    path::{Path, PathBuf},
    sync::atomic::{AtomicBool, Ordering},
};

use ndarray::{Array3, Axis, s};
use tracing::{debug, info, warn};

use crate::support::{
    mot::{Delimiter, MotFile, TIME_COLUMN},
    npy,
};

use super::channel::{KNEE_CHANNELS, RAW_KNEE_COLUMNS};

/// Channels per timestep in the aggregated array: time plus six knee channels.
pub const BATCH_CHANNELS: usize = KNEE_CHANNELS + 1;

/// Data fields read from each simulation, in file order `time, Tz, Tx, Ty, FE, VV, IE`.
pub const BATCH_RAW_COLUMNS: [usize; BATCH_CHANNELS] = [
    TIME_COLUMN,
    RAW_KNEE_COLUMNS[0],
    RAW_KNEE_COLUMNS[1],
    RAW_KNEE_COLUMNS[2],
    RAW_KNEE_COLUMNS[3],
    RAW_KNEE_COLUMNS[4],
    RAW_KNEE_COLUMNS[5],
];

/// For each output channel, its position within [`BATCH_RAW_COLUMNS`].
pub const BATCH_FROM_RAW: [usize; BATCH_CHANNELS] = [0, 2, 3, 1, 4, 5, 6];

/// Identifies a batch of simulations on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSpec {
    /// Directory containing the `sim_dir.<i>` directories.
    pub root: PathBuf,

    /// Motion file name prefix; simulation `i` reads `<prefix><i>.mot`.
    pub prefix: String,

    /// Number of simulations, numbered from 0.
    pub sim_count: usize,
}

/// Aggregates knee kinematics for `sim_count` simulations under `root`.
///
/// Uses [`BatchConfig::default`]. See [`aggregate_cancellable`].
///
/// # Errors
///
/// Returns a [`BatchError`] if any simulation file cannot be read or has a
/// different row count than simulation 0.
pub fn aggregate(
    root: impl AsRef<Path>,
    prefix: &str,
    sim_count: usize,
) -> Result<BatchResult, BatchError> {
    aggregate_with(root, prefix, sim_count, &BatchConfig::default())
}

/// Aggregates knee kinematics using a custom configuration.
///
/// See [`aggregate_cancellable`].
///
/// # Errors
///
/// Returns a [`BatchError`] if any simulation file cannot be read or has a
/// different row count than simulation 0.
pub fn aggregate_with(
    root: impl AsRef<Path>,
    prefix: &str,
    sim_count: usize,
    config: &BatchConfig,
) -> Result<BatchResult, BatchError> {
    aggregate_cancellable(root, prefix, sim_count, config, &AtomicBool::new(false))
}

/// Aggregates knee kinematics, checking `cancel` before each simulation.
///
/// Simulation 0 is read first to fix the row count. The result array is
/// zero-filled, then each simulation's slice is populated in order. When
/// saving is enabled the array is written to
/// `<root>/<config.output_file>`, replacing any existing file. A write
/// failure is reported through [`BatchResult::persistence`] and does not
/// discard the array.
///
/// An empty batch (`sim_count == 0`) reads nothing and produces a
/// `[0, 0, 7]` array.
///
/// # Errors
///
/// Returns a [`BatchError`] if any simulation file cannot be read, has a
/// different row count than simulation 0, or if `cancel` is set before the
/// batch completes.
pub fn aggregate_cancellable(
    root: impl AsRef<Path>,
    prefix: &str,
    sim_count: usize,
    config: &BatchConfig,
    cancel: &AtomicBool,
) -> Result<BatchResult, BatchError> {
    let root = root.as_ref();

    let rows = if sim_count == 0 {
        0
    } else {
        probe_rows(root, prefix, config)?
    };

    let mut array = Array3::<f64>::zeros((sim_count, rows, BATCH_CHANNELS));

    for sim in 0..sim_count {
        if cancel.load(Ordering::Relaxed) {
            return Err(BatchError::Cancelled { completed: sim });
        }

        let path = config.mot_path(root, prefix, sim);
        let raw = MotFile::open_with(&path, config.layout)
            .and_then(|file| file.select_columns(Delimiter::Tab, &BATCH_RAW_COLUMNS))
            .map_err(|source| BatchError::Format { sim, source })?;

        if raw.nrows() != rows {
            return Err(BatchError::ShapeMismatch {
                sim,
                path,
                expected: rows,
                found: raw.nrows(),
            });
        }

        array
            .slice_mut(s![sim, .., ..])
            .assign(&raw.select(Axis(1), &BATCH_FROM_RAW));

        debug!(sim, path = %path.display(), rows, "loaded simulation");
    }

    let persistence = if config.save {
        persist(&array, config.output_path(root))
    } else {
        Persistence::Skipped
    };

    info!(
        root = %root.display(),
        sims = sim_count,
        rows,
        saved = persistence.is_saved(),
        "aggregated knee kinematics"
    );

    Ok(BatchResult { array, persistence })
}

/// Reads only the time column of simulation 0 to size the batch.
fn probe_rows(root: &Path, prefix: &str, config: &BatchConfig) -> Result<usize, BatchError> {
    let path = config.mot_path(root, prefix, 0);
    let time = MotFile::open_with(&path, config.layout)
        .and_then(|file| file.select_columns(Delimiter::Tab, &[TIME_COLUMN]))
        .map_err(|source| BatchError::Format { sim: 0, source })?;

    debug!(path = %path.display(), rows = time.nrows(), "sized batch from simulation 0");
    Ok(time.nrows())
}

fn persist(array: &Array3<f64>, path: PathBuf) -> Persistence {
    match npy::save(&path, array) {
        Ok(()) => {
            info!(path = %path.display(), shape = ?array.shape(), "saved knee kinematics array");
            Persistence::Saved(path)
        }
        Err(error) => {
            warn!(path = %path.display(), %error, "failed to save knee kinematics array");
            Persistence::Failed { path, error }
        }
    }
}
