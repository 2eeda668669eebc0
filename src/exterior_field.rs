//! Exterior sound pressure at a receiver point from many radiating elements.
//!
//! Contributions from separate elements are incoherent and are summed in
//! linear energy per band, then converted back to dB.

use crate::constants::{
    DEFAULT_DIRECTIVITY_N, FREE_FIELD_CONSTANT_DB, MIN_DIRECTIVITY, MIN_DISTANCE_M,
};
use crate::element_radiation::RadiatingSource;
use crate::error::AcousticsError;
use crate::geometry_math::{cos_angle_between, distance, normalize};
use crate::math_utils::db_sum;
use crate::spectrum::{Spectrum, accumulate_energy, energies_to_spectrum};
use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExteriorFieldOptions {
    /// Exponent of the cosine directivity, `Q = cos(θ)^n`
    pub directivity_n: f64,
    /// Ground/barrier correction subtracted per band; absent bands get none
    pub ground: Option<Spectrum>,
}

impl Default for ExteriorFieldOptions {
    fn default() -> Self {
        Self {
            directivity_n: DEFAULT_DIRECTIVITY_N,
            ground: None,
        }
    }
}

/// Levels at one receiver point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointLevel {
    pub spectrum: Spectrum,
    /// `None` when no element contributed any band
    pub laeq: Option<f64>,
}

/// `20·log10(r) + 11`, with `r` floored at 0.1 m.
pub fn free_field_attenuation(r: f64) -> f64 {
    20.0 * r.max(MIN_DISTANCE_M).log10() + FREE_FIELD_CONSTANT_DB
}

/// `max(ε, cos(θ)^n)` where θ is the angle between the outward normal and
/// the direction to the receiver.
///
/// A negative cosine raised to a fractional exponent has no real value and
/// gets ε. A receiver coincident with the element has no direction and is
/// treated as on-axis.
pub fn directivity_factor(normal: DVec3, to_receiver: DVec3, directivity_n: f64) -> f64 {
    let cos_theta = cos_angle_between(normal, to_receiver).unwrap_or(1.0);
    let q = cos_theta.powf(directivity_n);
    if q.is_nan() {
        MIN_DIRECTIVITY
    } else {
        q.max(MIN_DIRECTIVITY)
    }
}

/// Combined pressure spectrum at `point` from every source.
///
/// An empty `sources` slice gives an empty spectrum, which means "no data"
/// rather than 0 dB.
pub fn calc_lp_at_point_from_elements(
    point: DVec3,
    sources: &[RadiatingSource],
    options: &ExteriorFieldOptions,
) -> Result<Spectrum, AcousticsError> {
    let mut energies = BTreeMap::new();

    for source in sources {
        let normal = normalize(source.normal)
            .ok_or_else(|| AcousticsError::DegenerateNormal.for_element(&source.label))?;
        let to_receiver = point - source.position;
        let r = distance(point, source.position);

        let spreading = free_field_attenuation(r);
        let q = directivity_factor(normal, to_receiver, options.directivity_n);
        let directivity_db = 10.0 * q.log10();

        for (&band, &lw) in &source.lw_out {
            let ground_db = options
                .ground
                .as_ref()
                .and_then(|g| g.get(&band).copied())
                .unwrap_or(0.0);
            let lp = lw - spreading + directivity_db - ground_db;
            accumulate_energy(&mut energies, band, lp);
        }
    }

    Ok(energies_to_spectrum(energies))
}

/// `10·log10(Σ 10^((Lp + Aw)/10))` over the bands of `spectrum`.
///
/// `Ok(None)` for an empty spectrum; a band with no weighting offset is an error.
pub fn calc_laeq(spectrum: &Spectrum, weighting: &Spectrum) -> Result<Option<f64>, AcousticsError> {
    let weighted = spectrum
        .iter()
        .map(|(&band, &lp)| {
            weighting
                .get(&band)
                .map(|aw| lp + aw)
                .ok_or(AcousticsError::MissingWeighting { band })
        })
        .collect::<Result<Vec<f64>, _>>()?;

    Ok(db_sum(weighted))
}

/// Spectrum and weighted single number at one receiver.
pub fn evaluate_point(
    point: DVec3,
    sources: &[RadiatingSource],
    options: &ExteriorFieldOptions,
    weighting: &Spectrum,
) -> Result<PointLevel, AcousticsError> {
    let spectrum = calc_lp_at_point_from_elements(point, sources, options)?;
    let laeq = calc_laeq(&spectrum, weighting)?;
    Ok(PointLevel { spectrum, laeq })
}
