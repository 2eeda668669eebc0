//! Vector helpers for receiver/element geometry.

use glam::DVec3;

pub fn distance(a: DVec3, b: DVec3) -> f64 {
    a.distance(b)
}

/// Unit vector along `v`, or `None` for a zero or non-finite vector.
pub fn normalize(v: DVec3) -> Option<DVec3> {
    v.try_normalize()
}

/// Cosine of the angle between `a` and `b`, clamped to [-1, 1].
///
/// `None` when either vector has no direction.
pub fn cos_angle_between(a: DVec3, b: DVec3) -> Option<f64> {
    let a = normalize(a)?;
    let b = normalize(b)?;
    Some(a.dot(b).clamp(-1.0, 1.0))
}

/// Angle between `a` and `b` in radians, in [0, π].
pub fn angle_between(a: DVec3, b: DVec3) -> Option<f64> {
    cos_angle_between(a, b).map(f64::acos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    #[test]
    fn distance_is_euclidean() {
        let a = DVec3::new(1.0, 2.0, 3.0);
        let b = DVec3::new(4.0, 6.0, 3.0);
        assert_abs_diff_eq!(distance(a, b), 5.0, epsilon = 1e-12);
        assert_eq!(distance(a, a), 0.0);
    }

    #[test]
    fn normalize_rejects_zero() {
        assert_eq!(normalize(DVec3::ZERO), None);

        let unit = normalize(DVec3::new(0.0, 3.0, 4.0)).unwrap();
        assert_abs_diff_eq!(unit.length(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(unit.z, 0.8, epsilon = 1e-12);
    }

    #[test]
    fn angles() {
        assert_abs_diff_eq!(angle_between(DVec3::X, DVec3::X).unwrap(), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(angle_between(DVec3::X, DVec3::Y).unwrap(), FRAC_PI_2, epsilon = 1e-12);
        assert_abs_diff_eq!(angle_between(DVec3::X, -DVec3::X).unwrap(), PI, epsilon = 1e-12);
        assert_abs_diff_eq!(
            angle_between(DVec3::X, DVec3::new(1.0, 1.0, 0.0)).unwrap(),
            FRAC_PI_4,
            epsilon = 1e-12
        );
        assert_eq!(angle_between(DVec3::ZERO, DVec3::X), None);
    }

    #[test]
    fn cosine_is_scale_independent() {
        let cos = cos_angle_between(DVec3::new(0.0, 0.0, 5.0), DVec3::new(0.0, 3.0, 3.0)).unwrap();
        assert_abs_diff_eq!(cos, FRAC_PI_4.cos(), epsilon = 1e-12);
    }
}
