/// Number of knee kinematic channels.
pub const KNEE_CHANNELS: usize = 6;

/// Data fields holding knee kinematics, in file order `Tz, Tx, Ty, FE, VV, IE`.
pub const RAW_KNEE_COLUMNS: [usize; KNEE_CHANNELS] = [29, 30, 31, 32, 33, 34];

/// Column-name fields labelling [`RAW_KNEE_COLUMNS`].
///
/// The name row has no entry for the filler field, so each name sits one
/// position left of the data it labels.
pub const NAMED_KNEE_COLUMNS: [usize; KNEE_CHANNELS] = [28, 29, 30, 31, 32, 33];

/// First knee column of a matrix read with the filler column dropped.
pub const FULL_KNEE_OFFSET: usize = 28;

/// Minimum column count of a filler-dropped matrix holding knee kinematics.
pub const FULL_KNEE_MIN_COLUMNS: usize = FULL_KNEE_OFFSET + KNEE_CHANNELS;

/// For each canonical channel, its position within the file-order columns.
pub const CANONICAL_FROM_RAW: [usize; KNEE_CHANNELS] = [1, 2, 0, 3, 4, 5];

/// A knee degree of freedom, listed in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KneeChannel {
    /// Translation along X.
    Tx,
    /// Translation along Y.
    Ty,
    /// Translation along Z.
    Tz,
    /// Flexion-extension rotation.
    FlexionExtension,
    /// Varus-valgus rotation.
    VarusValgus,
    /// Internal-external rotation.
    InternalExternal,
}

impl KneeChannel {
    /// Every channel in canonical order.
    pub const ALL: [Self; KNEE_CHANNELS] = [
        Self::Tx,
        Self::Ty,
        Self::Tz,
        Self::FlexionExtension,
        Self::VarusValgus,
        Self::InternalExternal,
    ];

    /// Position of this channel in canonical order.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Data field holding this channel in a `.mot` file.
    #[must_use]
    pub const fn raw_column(self) -> usize {
        RAW_KNEE_COLUMNS[CANONICAL_FROM_RAW[self.index()]]
    }

    /// Returns `true` for the three rotational channels.
    #[must_use]
    pub const fn is_rotation(self) -> bool {
        matches!(
            self,
            Self::FlexionExtension | Self::VarusValgus | Self::InternalExternal
        )
    }

    /// Short label (`Tx`, `Ty`, `Tz`, `FE`, `VV`, `IE`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Tx => "Tx",
            Self::Ty => "Ty",
            Self::Tz => "Tz",
            Self::FlexionExtension => "FE",
            Self::VarusValgus => "VV",
            Self::InternalExternal => "IE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_offsets_trail_data_offsets() {
        for (raw, named) in RAW_KNEE_COLUMNS.iter().zip(NAMED_KNEE_COLUMNS) {
            assert_eq!(*raw, named + 1);
        }
        assert_eq!(RAW_KNEE_COLUMNS[0], FULL_KNEE_OFFSET + 1);
    }

    #[test]
    fn raw_columns_follow_file_order() {
        assert_eq!(KneeChannel::Tz.raw_column(), 29);
        assert_eq!(KneeChannel::Tx.raw_column(), 30);
        assert_eq!(KneeChannel::Ty.raw_column(), 31);
        assert_eq!(KneeChannel::FlexionExtension.raw_column(), 32);
        assert_eq!(KneeChannel::InternalExternal.raw_column(), 34);
    }

    #[test]
    fn indices_match_canonical_order() {
        for (i, channel) in KneeChannel::ALL.iter().enumerate() {
            assert_eq!(channel.index(), i);
            assert_eq!(channel.is_rotation(), i >= 3);
        }
        let labels: Vec<_> = KneeChannel::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(labels, ["Tx", "Ty", "Tz", "FE", "VV", "IE"]);
    }
}
