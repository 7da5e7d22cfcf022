use std::path::{Path, PathBuf};

use ndarray::{Array3, ArrayView1, s};

use uom::si::f64::Time;

use crate::{
    models::knee::core::KneeKinematics,
    support::{npy::NpyError, units::elapsed},
};

/// Outcome of writing the aggregated array to disk.
#[derive(Debug)]
pub enum Persistence {
    /// The array was written to this path.
    Saved(PathBuf),

    /// Saving was disabled in the configuration.
    Skipped,

    /// Writing failed; the in-memory array is still valid.
    Failed { path: PathBuf, error: NpyError },
}

impl Persistence {
    /// Returns `true` if the array was written.
    #[must_use]
    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved(_))
    }

    /// Path written or attempted, if saving was enabled.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Saved(path) | Self::Failed { path, .. } => Some(path),
            Self::Skipped => None,
        }
    }

    /// Write error, if saving failed.
    #[must_use]
    pub fn error(&self) -> Option<&NpyError> {
        match self {
            Self::Failed { error, .. } => Some(error),
            Self::Saved(_) | Self::Skipped => None,
        }
    }
}

/// Aggregated knee kinematics for a batch of simulations.
///
/// The array is indexed `[simulation, timestep, channel]` where channel 0 is
/// elapsed time and channels 1 through 6 are `Tx, Ty, Tz, FE, VV, IE`.
#[derive(Debug)]
pub struct BatchResult {
    pub(super) array: Array3<f64>,
    pub(super) persistence: Persistence,
}

impl BatchResult {
    /// The `[simulation, timestep, channel]` array.
    #[must_use]
    pub fn array(&self) -> &Array3<f64> {
        &self.array
    }

    /// Consumes `self`, returning the array.
    #[must_use]
    pub fn into_array(self) -> Array3<f64> {
        self.array
    }

    /// What happened when the array was written to disk.
    #[must_use]
    pub fn persistence(&self) -> &Persistence {
        &self.persistence
    }

    /// Number of simulations in the batch.
    #[must_use]
    pub fn sim_count(&self) -> usize {
        self.array.len_of(ndarray::Axis(0))
    }

    /// Timesteps per simulation.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.array.len_of(ndarray::Axis(1))
    }

    /// Elapsed time of simulation `sim`, or `None` if out of range.
    #[must_use]
    pub fn time(&self, sim: usize) -> Option<ArrayView1<'_, f64>> {
        (sim < self.sim_count()).then(|| self.array.slice(s![sim, .., 0]))
    }

    /// Elapsed time at timestep `row` of simulation `sim`, or `None` if
    /// either index is out of range.
    #[must_use]
    pub fn elapsed(&self, sim: usize, row: usize) -> Option<Time> {
        self.array.get([sim, row, 0]).copied().map(elapsed)
    }

    /// Knee kinematics of simulation `sim`, or `None` if out of range.
    #[must_use]
    pub fn kinematics(&self, sim: usize) -> Option<KneeKinematics> {
        (sim < self.sim_count())
            .then(|| KneeKinematics::from_canonical(self.array.slice(s![sim, .., 1..]).to_owned()))
    }
}
