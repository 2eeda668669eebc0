//! Reverberant interior sound field from source power and room absorption.

use crate::constants::SABINE_CONSTANT;
use crate::error::AcousticsError;
use crate::math_utils::ratio_db;
use crate::spectrum::{BandHz, Spectrum};
use serde::{Deserialize, Serialize};

/// Room volume (m³) and per-band reverberation time (s).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomAcoustics {
    pub volume: f64,
    pub reverberation_time: Spectrum,
}

impl RoomAcoustics {
    pub fn new(volume: f64, reverberation_time: Spectrum) -> Self {
        Self {
            volume,
            reverberation_time,
        }
    }

    pub fn absorption(&self) -> Result<Spectrum, AcousticsError> {
        calc_absorption(self.volume, &self.reverberation_time)
    }
}

/// Equivalent absorption area per band, `A = 0.16·V / T60` (Sabine).
pub fn calc_absorption(
    volume: f64,
    reverberation_time: &Spectrum,
) -> Result<Spectrum, AcousticsError> {
    if !(volume > 0.0 && volume.is_finite()) {
        return Err(AcousticsError::InvalidVolume { volume });
    }

    reverberation_time
        .iter()
        .map(|(&band, &seconds)| {
            if !(seconds > 0.0 && seconds.is_finite()) {
                return Err(AcousticsError::InvalidReverberationTime { band, seconds });
            }
            Ok((band, SABINE_CONSTANT * volume / seconds))
        })
        .collect()
}

/// Interior pressure level, `Lp = Lw + 10·log10(4 / A)`.
///
/// Only bands present in both `lw` and `absorption` are produced.
pub fn calc_lp_inside(lw: &Spectrum, absorption: &Spectrum) -> Result<Spectrum, AcousticsError> {
    lw.iter()
        .filter_map(|(&band, &level)| absorption.get(&band).map(|&a| (band, level, a)))
        .map(|(band, level, a)| -> Result<(BandHz, f64), AcousticsError> {
            check_absorption(band, a)?;
            Ok((band, level + ratio_db(4.0, a)))
        })
        .collect()
}

pub(crate) fn check_absorption(band: BandHz, absorption: f64) -> Result<(), AcousticsError> {
    if absorption > 0.0 && absorption.is_finite() {
        Ok(())
    } else {
        Err(AcousticsError::InvalidAbsorption { band, absorption })
    }
}
