use std::path::PathBuf;

use thiserror::Error;

use crate::support::mot::FormatError;

/// Errors that abort a batch aggregation.
///
/// No partial result is returned; the first failing simulation ends the batch.
#[derive(Debug, Error)]
pub enum BatchError {
    /// A simulation's motion file could not be read.
    #[error("simulation {sim}: failed to read motion file")]
    Format {
        sim: usize,

        #[source]
        source: FormatError,
    },

    /// A simulation's row count differs from simulation 0.
    #[error(
        "simulation {sim} ({}): expected {expected} rows to match simulation 0, found {found}",
        .path.display()
    )]
    ShapeMismatch {
        sim: usize,
        path: PathBuf,
        expected: usize,
        found: usize,
    },

    /// The caller requested cancellation.
    #[error("batch cancelled after {completed} simulations")]
    Cancelled {
        /// Simulations fully loaded before cancellation was observed.
        completed: usize,
    },
}
