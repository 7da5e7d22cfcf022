//! Unit conventions for `.mot` kinematic channels.
//!
//! This crate uses [`uom`] for physical quantities exposed through typed
//! accessors. Numeric arrays stay in the file's native units: seconds for
//! time, metres for translations, and degrees or radians for rotations as
//! declared by the file's `inDegrees` header entry.
//!
//! ```
//! use mot_kinematics::support::units::{AngleUnit, translation};
//! use uom::si::{angle::radian, length::millimeter};
//!
//! let flexion = AngleUnit::Degrees.angle(90.0);
//! assert!((flexion.get::<radian>() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
//!
//! let tx = translation(0.0125);
//! assert!((tx.get::<millimeter>() - 12.5).abs() < 1e-12);
//! ```

use uom::si::{
    angle::{degree, radian},
    f64::{Angle, Length, Time},
    length::meter,
    time::second,
};

/// Unit of the rotational channels in a `.mot` file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AngleUnit {
    #[default]
    Degrees,
    Radians,
}

impl AngleUnit {
    /// Chooses the unit from a parsed `inDegrees` header flag.
    ///
    /// Files that omit the flag are assumed to store degrees.
    #[must_use]
    pub fn from_in_degrees(in_degrees: Option<bool>) -> Self {
        match in_degrees {
            Some(false) => Self::Radians,
            Some(true) | None => Self::Degrees,
        }
    }

    /// Interprets a raw rotation value in this unit.
    #[must_use]
    pub fn angle(self, value: f64) -> Angle {
        match self {
            Self::Degrees => Angle::new::<degree>(value),
            Self::Radians => Angle::new::<radian>(value),
        }
    }
}

/// Interprets a raw translation value, stored in metres.
#[must_use]
pub fn translation(value: f64) -> Length {
    Length::new::<meter>(value)
}

/// Interprets a raw time value, stored in seconds.
#[must_use]
pub fn elapsed(value: f64) -> Time {
    Time::new::<second>(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::time::millisecond;

    #[test]
    fn in_degrees_flag() {
        assert_eq!(AngleUnit::from_in_degrees(Some(true)), AngleUnit::Degrees);
        assert_eq!(AngleUnit::from_in_degrees(Some(false)), AngleUnit::Radians);
        assert_eq!(AngleUnit::from_in_degrees(None), AngleUnit::Degrees);
    }

    #[test]
    fn angles_convert() {
        assert_relative_eq!(AngleUnit::Degrees.angle(180.0).get::<radian>(), std::f64::consts::PI);
        assert_relative_eq!(AngleUnit::Radians.angle(1.0).get::<radian>(), 1.0);
    }

    #[test]
    fn time_converts() {
        assert_relative_eq!(elapsed(0.25).get::<millisecond>(), 250.0);
    }
}
