//! Knee kinematics in canonical channel order.

use ndarray::{Array2, ArrayView1, ArrayView2, Axis, s};
use uom::si::f64::{Angle, Length};

use crate::support::units::{AngleUnit, translation};

use super::{
    ShapeError,
    channel::{
        CANONICAL_FROM_RAW, FULL_KNEE_MIN_COLUMNS, FULL_KNEE_OFFSET, KNEE_CHANNELS, KneeChannel,
    },
};

/// Knee kinematic samples, one row per timestep.
///
/// Columns follow [`KneeChannel`] order: `Tx, Ty, Tz, FE, VV, IE`.
#[derive(Debug, Clone, PartialEq)]
pub struct KneeKinematics {
    data: Array2<f64>,
}

impl KneeKinematics {
    /// Reorders six file-order columns (`Tz, Tx, Ty, FE, VV, IE`) into canonical order.
    pub(crate) fn from_file_order(raw: ArrayView2<'_, f64>) -> Self {
        debug_assert_eq!(raw.ncols(), KNEE_CHANNELS);
        Self {
            data: raw.select(Axis(1), &CANONICAL_FROM_RAW),
        }
    }

    /// Wraps six columns already in canonical order.
    pub(crate) fn from_canonical(data: Array2<f64>) -> Self {
        debug_assert_eq!(data.ncols(), KNEE_CHANNELS);
        Self { data }
    }

    /// Number of timesteps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.nrows()
    }

    /// Returns `true` if there are no timesteps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.nrows() == 0
    }

    /// Samples as a `[timestep, channel]` matrix in canonical order.
    #[must_use]
    pub fn as_array(&self) -> &Array2<f64> {
        &self.data
    }

    /// Consumes `self`, returning the underlying matrix.
    #[must_use]
    pub fn into_array(self) -> Array2<f64> {
        self.data
    }

    /// Samples of a single channel across all timesteps.
    #[must_use]
    pub fn channel(&self, channel: KneeChannel) -> ArrayView1<'_, f64> {
        self.data.column(channel.index())
    }

    /// Typed sample at `row`, or `None` if `row` is out of range.
    ///
    /// Translations are read as metres; rotations use `angles`.
    #[must_use]
    pub fn pose(&self, row: usize, angles: AngleUnit) -> Option<KneePose> {
        if row >= self.len() {
            return None;
        }
        let at = |channel: KneeChannel| self.data[[row, channel.index()]];

        Some(KneePose {
            tx: translation(at(KneeChannel::Tx)),
            ty: translation(at(KneeChannel::Ty)),
            tz: translation(at(KneeChannel::Tz)),
            flexion_extension: angles.angle(at(KneeChannel::FlexionExtension)),
            varus_valgus: angles.angle(at(KneeChannel::VarusValgus)),
            internal_external: angles.angle(at(KneeChannel::InternalExternal)),
        })
    }
}

/// A single knee kinematic sample with physical units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KneePose {
    /// Anterior-posterior translation.
    pub tx: Length,

    /// Superior-inferior translation.
    pub ty: Length,

    /// Medial-lateral translation.
    pub tz: Length,

    /// Flexion (positive) or extension.
    pub flexion_extension: Angle,

    /// Varus-valgus rotation.
    pub varus_valgus: Angle,

    /// Internal-external rotation.
    pub internal_external: Angle,
}

/// Extracts knee kinematics from a matrix read with the filler column dropped.
///
/// Columns `28..34` hold the knee channels in file order; they are returned
/// in canonical order.
///
/// # Errors
///
/// Returns a [`ShapeError`] if the matrix has fewer than 34 columns.
pub fn extract_knee_kinematics(matrix: ArrayView2<'_, f64>) -> Result<KneeKinematics, ShapeError> {
    if matrix.ncols() < FULL_KNEE_MIN_COLUMNS {
        return Err(ShapeError {
            required: FULL_KNEE_MIN_COLUMNS,
            found: matrix.ncols(),
        });
    }

    let raw = matrix.slice(s![.., FULL_KNEE_OFFSET..FULL_KNEE_MIN_COLUMNS]);
    Ok(KneeKinematics::from_file_order(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use ndarray::Array2;
    use uom::si::{angle::degree, length::meter};

    fn full_matrix(rows: usize, cols: usize) -> Array2<f64> {
        Array2::from_shape_fn((rows, cols), |(r, c)| r as f64 * 1000.0 + c as f64)
    }

    #[test]
    fn permutes_into_canonical_order() {
        let matrix = full_matrix(5, 40);

        let kin = extract_knee_kinematics(matrix.view()).unwrap();

        assert_eq!(kin.as_array().shape(), &[5, KNEE_CHANNELS]);
        for row in 0..5 {
            for (k, &p) in CANONICAL_FROM_RAW.iter().enumerate() {
                assert_eq!(kin.as_array()[[row, k]], matrix[[row, FULL_KNEE_OFFSET + p]]);
            }
        }
    }

    #[test]
    fn named_channels() {
        let matrix = full_matrix(2, 34);

        let kin = extract_knee_kinematics(matrix.view()).unwrap();

        // File order is Tz, Tx, Ty at columns 28, 29, 30.
        assert_eq!(kin.channel(KneeChannel::Tx).to_vec(), [29.0, 1029.0]);
        assert_eq!(kin.channel(KneeChannel::Ty).to_vec(), [30.0, 1030.0]);
        assert_eq!(kin.channel(KneeChannel::Tz).to_vec(), [28.0, 1028.0]);
        assert_eq!(kin.channel(KneeChannel::InternalExternal).to_vec(), [33.0, 1033.0]);
    }

    #[test]
    fn too_few_columns() {
        let matrix = full_matrix(3, 33);

        let err = extract_knee_kinematics(matrix.view()).unwrap_err();

        assert_eq!(
            err,
            ShapeError {
                required: 34,
                found: 33
            }
        );
    }

    #[test]
    fn extraction_is_deterministic() {
        let matrix = full_matrix(4, 36);

        let a = extract_knee_kinematics(matrix.view()).unwrap();
        let b = extract_knee_kinematics(matrix.view()).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn typed_pose() {
        let kin = KneeKinematics::from_canonical(ndarray::array![[
            0.001, 0.002, 0.003, 45.0, -2.0, 5.0
        ]]);

        let pose = kin.pose(0, AngleUnit::Degrees).unwrap();

        assert_relative_eq!(pose.tx.get::<meter>(), 0.001);
        assert_relative_eq!(pose.tz.get::<meter>(), 0.003);
        assert_relative_eq!(pose.flexion_extension.get::<degree>(), 45.0);
        assert_relative_eq!(pose.varus_valgus.get::<degree>(), -2.0);
        assert!(kin.pose(1, AngleUnit::Degrees).is_none());
    }

    #[test]
    fn empty_matrix() {
        let matrix = Array2::<f64>::zeros((0, 34));

        let kin = extract_knee_kinematics(matrix.view()).unwrap();

        assert!(kin.is_empty());
        assert_eq!(kin.len(), 0);
    }
}
