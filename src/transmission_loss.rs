//! Condition-adjusted transmission loss and single-number summaries
//! for walls, doors and windows.

use crate::constants::{
    AREA_REDUCTION_CEILING_DB, AREA_REDUCTION_FLOOR_DB, DEFAULT_KEY_BANDS, EFFECTIVE_LOSS_FLOOR_DB,
};
use crate::material::{DeratingFactor, MaterialSpectrum};
use crate::spectrum::{BandHz, Spectrum};

/// Derates every band of `material` by the condition's factor.
///
/// The output has exactly the key set of `material.band_loss`; no bands are
/// interpolated or added.
pub fn calc_transmission_loss_bands<C: DeratingFactor>(
    material: &MaterialSpectrum,
    condition: C,
) -> Spectrum {
    let factor = condition.derating_factor();
    material
        .band_loss
        .iter()
        .map(|(&band, &loss)| (band, loss * factor))
        .collect()
}

/// Arithmetic mean of the loss at the key bands (125/500/2000 Hz when `keys` is `None`).
///
/// A key band missing from `bands` counts as 0 dB. This is a quick summary,
/// not the ISO 717 Rw; use `WeightedIndex::rw` for that.
pub fn calc_average_transmission_loss(bands: &Spectrum, keys: Option<&[BandHz]>) -> f64 {
    let keys = keys.unwrap_or(&DEFAULT_KEY_BANDS);
    if keys.is_empty() {
        return 0.0;
    }

    let total: f64 = keys
        .iter()
        .map(|band| bands.get(band).copied().unwrap_or(0.0))
        .sum();
    total / keys.len() as f64
}

/// `max(avg_loss - area_reduction - openings_penalty, 5)`
pub fn calc_effective_transmission_loss(
    avg_loss: f64,
    area_reduction: f64,
    openings_penalty: f64,
) -> f64 {
    (avg_loss - area_reduction - openings_penalty).max(EFFECTIVE_LOSS_FLOOR_DB)
}

/// `min(10·log10(opening_area), 20)`; a non-positive area gives 0 dB.
pub fn calc_area_reduction(opening_area: f64) -> f64 {
    if !(opening_area > 0.0) {
        return AREA_REDUCTION_FLOOR_DB;
    }
    (10.0 * opening_area.log10()).min(AREA_REDUCTION_CEILING_DB)
}

/// `(Rw + C, Rw + Ctr)` of a material.
pub fn calc_weighted_reductions(material: &MaterialSpectrum) -> (f64, f64) {
    let index = &material.weighted_index;
    (index.rw_c(), index.rw_ctr())
}
