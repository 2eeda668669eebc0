// src/material.rs - Acoustic material catalog and element conditions

use crate::constants::DEFAULT_CONDITION_FACTOR;
use crate::error::AcousticsError;
use crate::spectrum::Spectrum;
use log::debug;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Qualitative state of a wall, door or window, applied as a derating factor
/// on its sound reduction index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementCondition {
    Excellent,
    Good,
    Fair,
    Poor,
    Damaged,
    ClosedSealed,
    ClosedUnsealed,
    PartiallyOpen,
    FullyOpen,
}

impl ElementCondition {
    pub const ALL: [ElementCondition; 9] = [
        ElementCondition::Excellent,
        ElementCondition::Good,
        ElementCondition::Fair,
        ElementCondition::Poor,
        ElementCondition::Damaged,
        ElementCondition::ClosedSealed,
        ElementCondition::ClosedUnsealed,
        ElementCondition::PartiallyOpen,
        ElementCondition::FullyOpen,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ElementCondition::Excellent => "excellent",
            ElementCondition::Good => "good",
            ElementCondition::Fair => "fair",
            ElementCondition::Poor => "poor",
            ElementCondition::Damaged => "damaged",
            ElementCondition::ClosedSealed => "closed_sealed",
            ElementCondition::ClosedUnsealed => "closed_unsealed",
            ElementCondition::PartiallyOpen => "partially_open",
            ElementCondition::FullyOpen => "fully_open",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == s)
    }

    /// Multiplicative derating of the band loss, in [0.1, 1.0].
    pub fn factor(&self) -> f64 {
        match self {
            ElementCondition::Excellent => 1.0,
            ElementCondition::Good => 0.95,
            ElementCondition::Fair => 0.85,
            ElementCondition::Poor => 0.7,
            ElementCondition::Damaged => 0.5,
            ElementCondition::ClosedSealed => 1.0,
            ElementCondition::ClosedUnsealed => 0.8,
            ElementCondition::PartiallyOpen => 0.3,
            ElementCondition::FullyOpen => 0.1,
        }
    }
}

/// Derating factor for a condition name; unrecognised names use the 0.8 default.
pub fn condition_factor(name: &str) -> f64 {
    ElementCondition::parse(name)
        .map(|c| c.factor())
        .unwrap_or(DEFAULT_CONDITION_FACTOR)
}

/// Anything that resolves to a band-loss derating factor.
pub trait DeratingFactor {
    fn derating_factor(&self) -> f64;
}

impl DeratingFactor for ElementCondition {
    fn derating_factor(&self) -> f64 {
        self.factor()
    }
}

impl DeratingFactor for Option<ElementCondition> {
    fn derating_factor(&self) -> f64 {
        self.map(|c| c.factor()).unwrap_or(DEFAULT_CONDITION_FACTOR)
    }
}

impl DeratingFactor for &str {
    fn derating_factor(&self) -> f64 {
        condition_factor(self)
    }
}

/// Single-number rating of a material (ISO 717-1).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightedIndex {
    #[serde(rename = "Rw")]
    pub rw: f64,
    #[serde(rename = "C", default)]
    pub c: f64,
    #[serde(rename = "Ctr", default)]
    pub ctr: f64,
}

impl WeightedIndex {
    /// Rw + C, pink noise adapted
    pub fn rw_c(&self) -> f64 {
        self.rw + self.c
    }

    /// Rw + Ctr, urban traffic adapted
    pub fn rw_ctr(&self) -> f64 {
        self.rw + self.ctr
    }
}

/// Per-band sound reduction index of a material plus its weighted index.
/// Immutable once loaded; elements share it by reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialSpectrum {
    pub band_loss: Spectrum,
    pub weighted_index: WeightedIndex,
}

/// Read-only lookup table of materials keyed by id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaterialCatalog {
    materials: BTreeMap<String, MaterialSpectrum>,
}

impl MaterialCatalog {
    pub fn from_json_str(json_str: &str) -> Result<Self, AcousticsError> {
        let catalog: MaterialCatalog = serde_json::from_str(json_str)?;
        debug!("loaded material catalog with {} materials", catalog.len());
        Ok(catalog)
    }

    pub fn from_file<P: AsRef<Path>>(file_path: P) -> Result<Self, AcousticsError> {
        let path = file_path.as_ref();
        let json_str = fs::read_to_string(path).map_err(|source| AcousticsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json_str)
    }

    pub fn get(&self, id: &str) -> Result<&MaterialSpectrum, AcousticsError> {
        self.materials
            .get(id)
            .ok_or_else(|| AcousticsError::UnknownMaterial { id: id.to_string() })
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.materials.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

const DEFAULT_MATERIALS_JSON: &str = include_str!("materials.json");

/// Built-in catalog, parsed once on first use
pub static DEFAULT_CATALOG: Lazy<MaterialCatalog> = Lazy::new(|| {
    MaterialCatalog::from_json_str(DEFAULT_MATERIALS_JSON)
        .expect("embedded materials.json is valid")
});

pub fn get_material(id: &str) -> Result<&'static MaterialSpectrum, AcousticsError> {
    DEFAULT_CATALOG.get(id)
}
