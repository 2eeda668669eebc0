//! Decibel arithmetic shared by the transmission, interior and exterior calculators.
//!
//! Levels combine in linear energy, never by adding or averaging dB values.

/// Assert that two levels in dB are within `tolerance` dB of each other
///
/// # Examples
/// See the test cases below for usage examples.
#[macro_export]
macro_rules! assert_db_eq {
    ($actual:expr, $expected:expr, $tolerance:expr) => {
        {
            let actual_val: f64 = $actual;
            let expected_val: f64 = $expected;
            let tol: f64 = $tolerance;
            let diff = (actual_val - expected_val).abs();

            if !(diff <= tol) {
                panic!(
                    "assertion failed: |{:.4} dB - {:.4} dB| = {:.4} dB > {:.4} dB",
                    actual_val, expected_val, diff, tol
                );
            }
        }
    };
    ($actual:expr, $expected:expr, $tolerance:expr, $($arg:tt)+) => {
        {
            let actual_val: f64 = $actual;
            let expected_val: f64 = $expected;
            let tol: f64 = $tolerance;
            let diff = (actual_val - expected_val).abs();

            if !(diff <= tol) {
                panic!(
                    "assertion failed: |{:.4} dB - {:.4} dB| = {:.4} dB > {:.4} dB: {}",
                    actual_val, expected_val, diff, tol, format_args!($($arg)+)
                );
            }
        }
    };
}

/// Converts a level in dB to relative linear energy
///
/// # Examples
/// ```
/// use facade_acoustics::math_utils::db_to_energy;
///
/// assert_eq!(db_to_energy(0.0), 1.0);
/// assert!((db_to_energy(20.0) - 100.0).abs() < 1e-9);
/// ```
pub fn db_to_energy(level_db: f64) -> f64 {
    10f64.powf(level_db / 10.0)
}

/// Converts relative linear energy back to dB
///
/// Zero energy maps to negative infinity; callers that can see an empty sum
/// should use [`db_sum`], which reports it as `None`.
pub fn energy_to_db(energy: f64) -> f64 {
    10.0 * energy.log10()
}

/// Logarithmic sum `10·log10(Σ 10^(L/10))`
///
/// # Returns
/// `None` when `levels` is empty
///
/// # Examples
/// ```
/// use facade_acoustics::math_utils::db_sum;
///
/// let combined = db_sum([70.0, 70.0]).unwrap();
/// assert!((combined - 73.0103).abs() < 1e-4);
/// assert_eq!(db_sum(std::iter::empty()), None);
/// ```
pub fn db_sum<I>(levels: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let mut count = 0usize;
    let total: f64 = levels
        .into_iter()
        .inspect(|_| count += 1)
        .map(db_to_energy)
        .sum();

    if count == 0 {
        None
    } else {
        Some(energy_to_db(total))
    }
}

/// Level ratio `10·log10(numerator / denominator)`
pub fn ratio_db(numerator: f64, denominator: f64) -> f64 {
    10.0 * (numerator / denominator).log10()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_energy_round_trip() {
        assert_db_eq!(energy_to_db(db_to_energy(63.7)), 63.7, 1e-9);
        assert_eq!(energy_to_db(1.0), 0.0);
    }

    #[test]
    fn test_db_sum() {
        assert_db_eq!(db_sum([70.0, 70.0]).unwrap(), 73.0103, 1e-4);
        assert_db_eq!(db_sum([60.0]).unwrap(), 60.0, 1e-12);
        // a quieter source barely moves the total
        assert_db_eq!(db_sum([80.0, 60.0]).unwrap(), 80.0432, 1e-4);
        assert_eq!(db_sum(Vec::new()), None);
    }

    #[test]
    fn test_ratio_db() {
        assert_db_eq!(ratio_db(4.0, 10.0), -3.9794, 1e-4);
        assert_db_eq!(ratio_db(2.0, 10.0), -6.9897, 1e-4);
        assert_eq!(ratio_db(10.0, 10.0), 0.0);
    }

    #[test]
    fn test_assert_db_eq_macro() {
        assert_db_eq!(73.01, 73.0103, 0.01);
        assert_db_eq!(18.03, 18.0309, 0.01, "receiver level at {} m", 10);
    }

    #[test]
    #[should_panic(expected = "assertion failed")]
    fn test_assert_db_eq_macro_fails() {
        assert_db_eq!(140.0, 73.01, 0.1);
    }
}
