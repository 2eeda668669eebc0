//! Error taxonomy for the façade transmission engine.
//!
//! Clamped results (distance floor, directivity floor, area-reduction ceiling,
//! effective-loss floor) are not errors and never appear here.

use crate::spectrum::BandHz;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum AcousticsError {
    #[error("room volume must be positive, got {volume} m³")]
    InvalidVolume { volume: f64 },

    #[error("reverberation time at {band} Hz must be positive, got {seconds} s")]
    InvalidReverberationTime { band: BandHz, seconds: f64 },

    #[error("element area must be positive, got {area} m²")]
    InvalidArea { area: f64 },

    #[error("absorption area at {band} Hz must be positive, got {absorption} m²")]
    InvalidAbsorption { band: BandHz, absorption: f64 },

    #[error("element normal has zero length")]
    DegenerateNormal,

    #[error("no transmission loss data at {band} Hz")]
    MissingTransmissionLoss { band: BandHz },

    #[error("no absorption data at {band} Hz")]
    MissingAbsorption { band: BandHz },

    #[error("no weighting offset at {band} Hz")]
    MissingWeighting { band: BandHz },

    #[error("unknown material '{id}'")]
    UnknownMaterial { id: String },

    #[error("element '{element}': {source}")]
    Element {
        element: String,
        #[source]
        source: Box<AcousticsError>,
    },

    #[error("failed to parse material catalog: {0}")]
    Catalog(#[from] serde_json::Error),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AcousticsError {
    /// Attach the label of the element being computed.
    pub fn for_element(self, element: impl Into<String>) -> Self {
        AcousticsError::Element {
            element: element.into(),
            source: Box::new(self),
        }
    }

    /// Strips element context and returns the underlying failure.
    pub fn root(&self) -> &AcousticsError {
        match self {
            AcousticsError::Element { source, .. } => source.root(),
            other => other,
        }
    }

    /// Invalid physical input (non-positive volume, T60, area, absorption or a null normal).
    pub fn is_domain_error(&self) -> bool {
        matches!(
            self.root(),
            AcousticsError::InvalidVolume { .. }
                | AcousticsError::InvalidReverberationTime { .. }
                | AcousticsError::InvalidArea { .. }
                | AcousticsError::InvalidAbsorption { .. }
                | AcousticsError::DegenerateNormal
        )
    }

    /// Required data is missing from a spectrum or the catalog.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self.root(),
            AcousticsError::MissingTransmissionLoss { .. }
                | AcousticsError::MissingAbsorption { .. }
                | AcousticsError::MissingWeighting { .. }
                | AcousticsError::UnknownMaterial { .. }
        )
    }

    /// Band at which the failure occurred, when there is one.
    pub fn band(&self) -> Option<BandHz> {
        match self.root() {
            AcousticsError::InvalidReverberationTime { band, .. }
            | AcousticsError::InvalidAbsorption { band, .. }
            | AcousticsError::MissingTransmissionLoss { band }
            | AcousticsError::MissingAbsorption { band }
            | AcousticsError::MissingWeighting { band } => Some(*band),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_context_wraps_root() {
        let err = AcousticsError::MissingTransmissionLoss { band: 500 }.for_element("window-3");

        assert!(err.is_configuration_error());
        assert!(!err.is_domain_error());
        assert_eq!(err.band(), Some(500));
        assert_eq!(
            err.to_string(),
            "element 'window-3': no transmission loss data at 500 Hz"
        );
    }

    #[test]
    fn domain_errors_are_classified() {
        assert!(AcousticsError::InvalidVolume { volume: 0.0 }.is_domain_error());
        assert!(AcousticsError::DegenerateNormal.for_element("door").is_domain_error());
        assert_eq!(AcousticsError::InvalidArea { area: -1.0 }.band(), None);
    }
}
