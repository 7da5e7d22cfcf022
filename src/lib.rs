//! # mot-kinematics
//!
//! Readers and batch tools for `.mot` motion files written by
//! musculoskeletal simulations, focused on knee joint kinematics.
//!
//! ## Crate layout
//!
//! - [`models`]: Knee kinematics readers, extraction, batch aggregation, and
//!   [`twine_core::Model`] adapters.
//! - [`support`]: `.mot` parsing, NPY array persistence, and unit conventions.
//!
//! ## Channel order
//!
//! Simulation output stores the knee channels as `Tz, Tx, Ty, FE, VV, IE`.
//! Unless a function states otherwise, everything this crate returns uses
//! the canonical order `Tx, Ty, Tz, FE, VV, IE`. Batch arrays prepend
//! elapsed time as channel 0.
//!
//! ## Logging
//!
//! Progress is reported through [`tracing`] at `debug` and `info` levels,
//! and persistence failures at `warn`. No subscriber is installed.

pub mod models;
pub mod support;
