//! Knee joint kinematics from simulation `.mot` output.
//!
//! This module provides free functions for reading, extracting, and
//! aggregating knee kinematics, plus [`twine_core::Model`] adapters for the
//! extractor and the batch aggregator. The computational core is in the
//! internal `core` module.
//!
//! # Example
//!
//! ```no_run
//! use mot_kinematics::{
//!     models::knee::{self, KneeChannel},
//!     support::mot::read_mot,
//! };
//!
//! let data = read_mot("sim_dir.0/run_0.mot")?;
//! let kin = knee::extract_knee_kinematics(data.view())?;
//! let peak = kin
//!     .channel(KneeChannel::FlexionExtension)
//!     .iter()
//!     .copied()
//!     .fold(f64::MIN, f64::max);
//! println!("peak flexion: {peak}");
//!
//! let batch = knee::aggregate("./", "run_", 10)?;
//! assert_eq!(batch.array().shape()[2], knee::BATCH_CHANNELS);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod core;

pub use self::core::{
    BATCH_CHANNELS, BATCH_FROM_RAW, BATCH_RAW_COLUMNS, BatchConfig, BatchError, BatchResult,
    BatchSpec, CANONICAL_FROM_RAW, FULL_KNEE_MIN_COLUMNS, FULL_KNEE_OFFSET, KNEE_CHANNELS,
    KneeChannel, KneeKinematics, KneePose, NAMED_KNEE_COLUMNS, Persistence, RAW_KNEE_COLUMNS,
    ShapeError, aggregate, aggregate_cancellable, aggregate_with, extract_knee_kinematics,
    read_knee_columns, read_knee_columns_with_names, read_knee_kinematics,
};

use ndarray::Array2;
use twine_core::Model;

/// Model adapter extracting canonical knee kinematics from a filler-dropped matrix.
///
/// Delegates to [`extract_knee_kinematics`].
#[derive(Debug, Clone, Copy, Default)]
pub struct KneeKinematicsExtractor;

impl Model for KneeKinematicsExtractor {
    type Input = Array2<f64>;
    type Output = KneeKinematics;
    type Error = ShapeError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        extract_knee_kinematics(input.view())
    }
}

/// Model adapter aggregating a batch of simulations.
///
/// Delegates to [`aggregate_with`] using the wrapped configuration.
#[derive(Debug, Clone, Default)]
pub struct BatchAggregator {
    /// Directory naming, output file, and save behavior for each call.
    pub config: BatchConfig,
}

impl BatchAggregator {
    /// Creates an aggregator with the given configuration.
    #[must_use]
    pub fn new(config: BatchConfig) -> Self {
        Self { config }
    }
}

impl Model for BatchAggregator {
    type Input = BatchSpec;
    type Output = BatchResult;
    type Error = BatchError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        aggregate_with(&input.root, &input.prefix, input.sim_count, &self.config)
    }
}
