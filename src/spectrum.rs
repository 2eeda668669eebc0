//! Band-keyed spectra.
//!
//! A spectrum maps a band center frequency (Hz) to a level in dB. Whether the
//! level is a sound power (Lw) or a sound pressure (Lp) is decided by the
//! function that produced it.

use crate::constants::OCTAVE_THIRDS;
use crate::math_utils::{db_sum, db_to_energy, energy_to_db};
use std::collections::BTreeMap;

pub type BandHz = u32;

/// Ordered so that iteration, and therefore floating point summation, is deterministic.
pub type Spectrum = BTreeMap<BandHz, f64>;

/// Builds a spectrum from `(band, dB)` pairs.
pub fn spectrum_from(pairs: &[(BandHz, f64)]) -> Spectrum {
    pairs.iter().copied().collect()
}

/// Same level in every given band.
pub fn flat_spectrum(bands: &[BandHz], level_db: f64) -> Spectrum {
    bands.iter().map(|&band| (band, level_db)).collect()
}

/// Logarithmic sum over every band of `spectrum`. `None` when the spectrum is empty.
pub fn energy_sum(spectrum: &Spectrum) -> Option<f64> {
    db_sum(spectrum.values().copied())
}

/// Accumulates the linear energy of `level_db` into `band`.
pub fn accumulate_energy(energies: &mut BTreeMap<BandHz, f64>, band: BandHz, level_db: f64) {
    *energies.entry(band).or_insert(0.0) += db_to_energy(level_db);
}

/// Converts accumulated linear energies back into levels.
pub fn energies_to_spectrum(energies: BTreeMap<BandHz, f64>) -> Spectrum {
    energies
        .into_iter()
        .map(|(band, energy)| (band, energy_to_db(energy)))
        .collect()
}

/// Energy-combines third-octave levels into octave levels.
///
/// An octave is emitted when at least one of its three thirds is present;
/// bands outside 50..5000 Hz are ignored.
pub fn to_octave_bands(third_octave: &Spectrum) -> Spectrum {
    OCTAVE_THIRDS
        .iter()
        .filter_map(|(center, thirds)| {
            let present = thirds.iter().filter_map(|band| third_octave.get(band).copied());
            db_sum(present).map(|level| (*center, level))
        })
        .collect()
}
