//! Public models.
//!
//! # Organization
//!
//! Models are grouped by joint or body segment (currently only `knee`).
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core`
//! submodule where parsing and array logic lives. The public free functions
//! are re-exported from `core`; [`twine_core::Model`] implementations are
//! thin adapters that delegate to them.

pub mod knee;
