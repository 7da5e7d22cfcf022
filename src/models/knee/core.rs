//! Knee kinematics extraction and batch aggregation.
//!
//! Simulation output stores the six knee channels in file order
//! `Tz, Tx, Ty, FE, VV, IE`. Everything returned from this module as
//! [`KneeKinematics`] or as a batch array is in canonical order
//! `Tx, Ty, Tz, FE, VV, IE`; [`read_knee_columns`] is the one reader that
//! keeps file order.

mod batch;
mod channel;
mod error;
mod kinematics;
mod reader;

pub use batch::{
    BATCH_CHANNELS, BATCH_FROM_RAW, BATCH_RAW_COLUMNS, BatchConfig, BatchError, BatchResult,
    BatchSpec, Persistence, aggregate, aggregate_cancellable, aggregate_with,
};
pub use channel::{
    CANONICAL_FROM_RAW, FULL_KNEE_MIN_COLUMNS, FULL_KNEE_OFFSET, KNEE_CHANNELS, KneeChannel,
    NAMED_KNEE_COLUMNS, RAW_KNEE_COLUMNS,
};
pub use error::ShapeError;
pub use kinematics::{KneeKinematics, KneePose, extract_knee_kinematics};
pub use reader::{read_knee_columns, read_knee_columns_with_names, read_knee_kinematics};
