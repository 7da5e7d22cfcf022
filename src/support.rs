//! Supporting utilities used by models.
//!
//! - [`mot`]: Reading `.mot` motion files.
//! - [`npy`]: Saving and loading `f64` arrays as NPY files.
//! - [`units`]: Unit conventions for kinematic channels.

pub mod mot;
pub mod npy;
pub mod units;
