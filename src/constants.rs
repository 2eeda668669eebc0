use crate::spectrum::{BandHz, Spectrum};
use once_cell::sync::Lazy;

// Standardized third-octave centers, 50 Hz .. 5000 Hz
pub const THIRD_OCTAVE_BANDS: [BandHz; 21] = [
    50, 63, 80, 100, 125, 160, 200, 250, 315, 400, 500, 630, 800, 1000, 1250, 1600, 2000, 2500,
    3150, 4000, 5000,
];

// Reduced octave set; each center owns the third-octave band below and above it
pub const OCTAVE_BANDS: [BandHz; 7] = [63, 125, 250, 500, 1000, 2000, 4000];

pub const OCTAVE_THIRDS: [(BandHz, [BandHz; 3]); 7] = [
    (63, [50, 63, 80]),
    (125, [100, 125, 160]),
    (250, [200, 250, 315]),
    (500, [400, 500, 630]),
    (1000, [800, 1000, 1250]),
    (2000, [1600, 2000, 2500]),
    (4000, [3150, 4000, 5000]),
];

// A-weighting offsets in dB (IEC 61672-1), same order as THIRD_OCTAVE_BANDS
pub const A_WEIGHTING_DB: [f64; 21] = [
    -30.2, -26.2, -22.5, -19.1, -16.1, -13.4, -10.9, -8.6, -6.6, -4.8, -3.2, -1.9, -0.8, 0.0, 0.6,
    1.0, 1.2, 1.3, 1.2, 1.0, 0.5,
];

pub static A_WEIGHTING: Lazy<Spectrum> = Lazy::new(|| {
    THIRD_OCTAVE_BANDS
        .iter()
        .copied()
        .zip(A_WEIGHTING_DB.iter().copied())
        .collect()
});

// Sabine: A = 0.16 * V / T60 (m², V in m³, T60 in s)
pub const SABINE_CONSTANT: f64 = 0.16;

// 10·log10(4π) rounded, spherical spreading term of ISO 12354-4
pub const FREE_FIELD_CONSTANT_DB: f64 = 11.0;

// Safety clamps
pub const MIN_DISTANCE_M: f64 = 0.1;
pub const MIN_DIRECTIVITY: f64 = 1.0e-6;
pub const AREA_REDUCTION_CEILING_DB: f64 = 20.0;
pub const AREA_REDUCTION_FLOOR_DB: f64 = 0.0;
pub const EFFECTIVE_LOSS_FLOOR_DB: f64 = 5.0;

pub const DEFAULT_CONDITION_FACTOR: f64 = 0.8;
pub const DEFAULT_DIRECTIVITY_N: f64 = 1.0;
pub const DEFAULT_KEY_BANDS: [BandHz; 3] = [125, 500, 2000];
