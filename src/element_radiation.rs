//! Sound power radiated outward by a single façade element.

use crate::error::AcousticsError;
use crate::geometry_math::normalize;
use crate::interior_field::check_absorption;
use crate::material::{DeratingFactor, MaterialSpectrum};
use crate::math_utils::ratio_db;
use crate::spectrum::{BandHz, Spectrum};
use crate::transmission_loss::calc_transmission_loss_bands;
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// A wall segment, door or window of the envelope, valid for one analysis pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadiatingElement {
    pub label: String,
    /// m²
    pub area: f64,
    pub transmission_loss_bands: Spectrum,
    pub position: DVec3,
    /// Outward unit normal
    pub normal: DVec3,
}

impl RadiatingElement {
    /// Resolves the element's band loss from its material and condition.
    pub fn new<C: DeratingFactor>(
        label: impl Into<String>,
        area: f64,
        material: &MaterialSpectrum,
        condition: C,
        position: DVec3,
        normal: DVec3,
    ) -> Self {
        Self {
            label: label.into(),
            area,
            transmission_loss_bands: calc_transmission_loss_bands(material, condition),
            position,
            normal,
        }
    }

    /// Radiated power of this element; failures carry the element label.
    ///
    /// The source's normal is re-normalized here, so a zero normal is
    /// rejected once rather than at every receiver.
    pub fn radiate(
        &self,
        lp_inside: &Spectrum,
        absorption: &Spectrum,
        delta_db: f64,
    ) -> Result<RadiatingSource, AcousticsError> {
        let normal = normalize(self.normal)
            .ok_or_else(|| AcousticsError::DegenerateNormal.for_element(&self.label))?;
        let lw_out = calc_lw_out_per_element(
            lp_inside,
            self.area,
            &self.transmission_loss_bands,
            absorption,
            delta_db,
        )
        .map_err(|e| e.for_element(&self.label))?;

        Ok(RadiatingSource {
            label: self.label.clone(),
            lw_out,
            position: self.position,
            normal,
        })
    }
}

/// Outward sound power of an element, positioned for the exterior aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadiatingSource {
    pub label: String,
    pub lw_out: Spectrum,
    pub position: DVec3,
    pub normal: DVec3,
}

/// `LW,out = Lp,in + 10·log10(S / A) − R + Δ` for every band of `lp_inside`.
///
/// A band of `lp_inside` without transmission loss or absorption data is an
/// error; the element is never treated as acoustically transparent.
pub fn calc_lw_out_per_element(
    lp_inside: &Spectrum,
    area: f64,
    transmission_loss: &Spectrum,
    absorption: &Spectrum,
    delta_db: f64,
) -> Result<Spectrum, AcousticsError> {
    if !(area > 0.0 && area.is_finite()) {
        return Err(AcousticsError::InvalidArea { area });
    }

    lp_inside
        .iter()
        .map(|(&band, &lp)| -> Result<(BandHz, f64), AcousticsError> {
            let r = *transmission_loss
                .get(&band)
                .ok_or(AcousticsError::MissingTransmissionLoss { band })?;
            let a = *absorption
                .get(&band)
                .ok_or(AcousticsError::MissingAbsorption { band })?;
            check_absorption(band, a)?;

            Ok((band, lp + ratio_db(area, a) - r + delta_db))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_db_eq;
    use crate::material::{ElementCondition, WeightedIndex};
    use crate::spectrum::spectrum_from;

    #[test]
    fn worked_example_window() {
        let lp_in = spectrum_from(&[(500, 86.0206)]);
        let r = spectrum_from(&[(500, 30.0)]);
        let a = spectrum_from(&[(500, 10.0)]);

        let lw = calc_lw_out_per_element(&lp_in, 2.0, &r, &a, 0.0).unwrap();
        assert_db_eq!(lw[&500], 49.0309, 1e-4);

        let lw = calc_lw_out_per_element(&lp_in, 2.0, &r, &a, 3.0).unwrap();
        assert_db_eq!(lw[&500], 52.0309, 1e-4);
    }

    #[test]
    fn missing_band_loss_is_an_error() {
        let lp_in = spectrum_from(&[(500, 86.0), (1000, 84.0)]);
        let r = spectrum_from(&[(500, 30.0)]);
        let a = spectrum_from(&[(500, 10.0), (1000, 10.0)]);

        let err = calc_lw_out_per_element(&lp_in, 2.0, &r, &a, 0.0).unwrap_err();
        assert!(matches!(err, AcousticsError::MissingTransmissionLoss { band: 1000 }));
        assert!(err.is_configuration_error());
    }

    #[test]
    fn extra_loss_bands_are_ignored() {
        let lp_in = spectrum_from(&[(500, 86.0)]);
        let r = spectrum_from(&[(250, 25.0), (500, 30.0), (1000, 35.0)]);
        let a = spectrum_from(&[(500, 10.0)]);

        let lw = calc_lw_out_per_element(&lp_in, 2.0, &r, &a, 0.0).unwrap();
        assert_eq!(lw.len(), 1);
    }

    #[test]
    fn invalid_area_and_absorption() {
        let lp_in = spectrum_from(&[(500, 86.0)]);
        let r = spectrum_from(&[(500, 30.0)]);
        let a = spectrum_from(&[(500, 10.0)]);

        assert!(matches!(
            calc_lw_out_per_element(&lp_in, 0.0, &r, &a, 0.0),
            Err(AcousticsError::InvalidArea { .. })
        ));
        assert!(matches!(
            calc_lw_out_per_element(&lp_in, 2.0, &r, &spectrum_from(&[(500, -1.0)]), 0.0),
            Err(AcousticsError::InvalidAbsorption { band: 500, .. })
        ));
        assert!(matches!(
            calc_lw_out_per_element(&lp_in, 2.0, &r, &Spectrum::new(), 0.0),
            Err(AcousticsError::MissingAbsorption { band: 500 })
        ));
    }

    #[test]
    fn element_radiate_labels_errors() {
        let material = MaterialSpectrum {
            band_loss: spectrum_from(&[(500, 30.0)]),
            weighted_index: WeightedIndex { rw: 30.0, c: 0.0, ctr: 0.0 },
        };
        let window = RadiatingElement::new(
            "window-1",
            2.0,
            &material,
            ElementCondition::Excellent,
            DVec3::ZERO,
            DVec3::X,
        );

        let source = window
            .radiate(&spectrum_from(&[(500, 86.0206)]), &spectrum_from(&[(500, 10.0)]), 0.0)
            .unwrap();
        assert_eq!(source.label, "window-1");
        assert_db_eq!(source.lw_out[&500], 49.0309, 1e-4);

        let err = window
            .radiate(&spectrum_from(&[(2000, 80.0)]), &spectrum_from(&[(2000, 10.0)]), 0.0)
            .unwrap_err();
        assert!(err.to_string().starts_with("element 'window-1'"));
        assert_eq!(err.band(), Some(2000));
    }

    #[test]
    fn element_radiate_checks_normal() {
        let material = MaterialSpectrum {
            band_loss: spectrum_from(&[(500, 30.0)]),
            weighted_index: WeightedIndex { rw: 30.0, c: 0.0, ctr: 0.0 },
        };
        let lp_in = spectrum_from(&[(500, 86.0)]);
        let a = spectrum_from(&[(500, 10.0)]);

        let tilted = RadiatingElement::new(
            "skylight",
            1.0,
            &material,
            ElementCondition::Good,
            DVec3::ZERO,
            DVec3::new(0.0, 0.0, 3.0),
        );
        let source = tilted.radiate(&lp_in, &a, 0.0).unwrap();
        assert_eq!(source.normal, DVec3::Z);

        let flat = RadiatingElement { normal: DVec3::ZERO, ..tilted };
        let err = flat.radiate(&lp_in, &a, 0.0).unwrap_err();
        assert!(err.is_domain_error());
        assert!(matches!(&err, AcousticsError::Element { element, .. } if element == "skylight"));
    }
}
