//! One analysis pass over a building envelope.
//!
//! The interior field and every element's radiated power are computed once;
//! receiver points are then evaluated independently. An element that cannot
//! radiate is set aside with its error and the rest of the façade still
//! contributes, and a failing sample is reported on its own without stopping
//! the sweep.

use crate::constants::A_WEIGHTING;
use crate::element_radiation::{RadiatingElement, RadiatingSource};
use crate::error::AcousticsError;
use crate::exterior_field::{ExteriorFieldOptions, PointLevel, evaluate_point};
use crate::interior_field::{RoomAcoustics, calc_lp_inside};
use crate::spectrum::Spectrum;
use glam::DVec3;
use log::{debug, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FacadeAnalysisConfig {
    /// Δ added to every element's radiated power (dB)
    pub delta_db: f64,
    pub options: ExteriorFieldOptions,
}

#[derive(Debug)]
pub struct FacadeAnalysis {
    absorption: Spectrum,
    lp_inside: Spectrum,
    sources: Vec<RadiatingSource>,
    failed_elements: Vec<AcousticsError>,
    options: ExteriorFieldOptions,
}

impl FacadeAnalysis {
    /// Fails only when the room itself is invalid; element failures are
    /// collected in [`FacadeAnalysis::failed_elements`].
    pub fn new(
        room: &RoomAcoustics,
        source_lw: &Spectrum,
        elements: &[RadiatingElement],
        config: &FacadeAnalysisConfig,
    ) -> Result<Self, AcousticsError> {
        let absorption = room.absorption()?;
        let lp_inside = calc_lp_inside(source_lw, &absorption)?;

        let mut sources = Vec::with_capacity(elements.len());
        let mut failed_elements = Vec::new();
        for element in elements {
            match element.radiate(&lp_inside, &absorption, config.delta_db) {
                Ok(source) => sources.push(source),
                Err(e) => {
                    warn!("skipping element: {}", e);
                    failed_elements.push(e);
                }
            }
        }

        debug!(
            "facade analysis ready: {} of {} elements, {} interior bands",
            sources.len(),
            elements.len(),
            lp_inside.len()
        );

        Ok(Self {
            absorption,
            lp_inside,
            sources,
            failed_elements,
            options: config.options.clone(),
        })
    }

    pub fn absorption(&self) -> &Spectrum {
        &self.absorption
    }

    pub fn lp_inside(&self) -> &Spectrum {
        &self.lp_inside
    }

    pub fn sources(&self) -> &[RadiatingSource] {
        &self.sources
    }

    /// Elements left out of the pass, each error labelled with its element.
    pub fn failed_elements(&self) -> &[AcousticsError] {
        &self.failed_elements
    }

    pub fn evaluate_point(&self, point: DVec3) -> Result<PointLevel, AcousticsError> {
        evaluate_point(point, &self.sources, &self.options, &A_WEIGHTING)
    }

    /// Evaluates every receiver in parallel; results are in input order.
    pub fn evaluate(&self, points: &[DVec3]) -> Vec<Result<PointLevel, AcousticsError>> {
        let results: Vec<_> = points
            .par_iter()
            .map(|&point| self.evaluate_point(point))
            .collect();

        let failed = results.iter().filter(|r| r.is_err()).count();
        if failed > 0 {
            warn!("{} of {} receiver points could not be evaluated", failed, points.len());
        }
        results
    }
}
