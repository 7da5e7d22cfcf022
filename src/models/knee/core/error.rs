use thiserror::Error;

/// A matrix is too narrow to hold knee kinematics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("matrix has {found} columns, knee kinematics require at least {required}")]
pub struct ShapeError {
    /// Minimum column count.
    pub required: usize,

    /// Column count of the supplied matrix.
    pub found: usize,
}
