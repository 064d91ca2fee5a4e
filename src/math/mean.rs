//! Arithmetic mean with a defined empty-input policy.
//!
//! ## Purpose
//!
//! This module reduces a numeric slice to its arithmetic mean (sum divided by
//! count). It is the single reduction step of the sampling pipeline but is
//! exposed as a standalone function because it is useful on any numeric
//! slice, integer or real.
//!
//! ## Design notes
//!
//! * Generic over `num_traits::ToPrimitive`, so `&[i64]`, `&[f64]`, and the
//!   other primitive numeric slices all work through one implementation.
//! * The accumulator is `f64` regardless of input type.
//! * **Empty input returns zero.** This is a deliberate policy choice, not
//!   an error path: the caller always gets a number back.
//!
//! ## Invariants
//!
//! * For non-empty finite input, the result equals `sum / len` up to
//!   floating-point rounding.
//! * The function is pure: equal inputs produce equal outputs, with no side
//!   effects.
//!
//! ## Non-goals
//!
//! * No compensated summation; inputs here are short sequences of small
//!   integers, far from the regimes where naive summation degrades.
//! * No screening of non-finite values. A NaN or infinity in the input
//!   propagates through the sum.

use num_traits::ToPrimitive;

// ============================================================================
// Mean
// ============================================================================

/// Arithmetic mean of `values`, or exactly zero when `values` is empty.
///
/// # Examples
///
/// ```
/// use randmean::math::mean::mean;
///
/// assert_eq!(mean(&[1, 2, 3, 4]), 2.5);
/// assert_eq!(mean(&[2.0_f64, 4.0]), 3.0);
/// assert_eq!(mean::<i64>(&[]), 0.0);
/// ```
pub fn mean<T: ToPrimitive>(values: &[T]) -> f64 {
    let count = values.len();
    if count == 0 {
        return 0.0;
    }

    let total: f64 = values
        .iter()
        .map(|v| v.to_f64().unwrap_or(f64::NAN))
        .sum();

    total / count as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_integers() {
        assert_eq!(mean(&[1, 2, 3]), 2.0);
        assert_eq!(mean(&[4_i64, 77, 12, 99, 3, 50, 21, 8, 64, 33]), 37.1);
    }

    #[test]
    fn mean_of_reals() {
        assert_eq!(mean(&[1.5, 2.5]), 2.0);
        assert!((mean(&[0.1, 0.2, 0.3]) - 0.2).abs() < 1e-12);
    }

    #[test]
    fn mean_of_single_element_is_the_element() {
        assert_eq!(mean(&[42]), 42.0);
    }

    #[test]
    fn empty_input_returns_zero_exactly() {
        assert_eq!(mean::<i64>(&[]), 0.0);
        assert_eq!(mean::<f64>(&[]), 0.0);
    }

    #[test]
    fn negative_values_are_handled() {
        assert_eq!(mean(&[-5, 5]), 0.0);
        assert_eq!(mean(&[-1, -2, -3]), -2.0);
    }

    #[test]
    fn repeated_calls_agree() {
        let values = [17_i64, 0, -4, 9];
        assert_eq!(mean(&values), mean(&values));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        // Mean equals sum over count for any non-empty integer input.
        #[test]
        fn mean_is_sum_over_count(values in prop::collection::vec(-10_000_i64..10_000, 1..64)) {
            let expected = values.iter().sum::<i64>() as f64 / values.len() as f64;
            let got = mean(&values);
            prop_assert!((got - expected).abs() < 1e-9, "got {}, expected {}", got, expected);
        }

        // The mean of any non-empty input lies between its extremes.
        #[test]
        fn mean_lies_between_extremes(values in prop::collection::vec(-10_000_i64..10_000, 1..64)) {
            let min = *values.iter().min().unwrap() as f64;
            let max = *values.iter().max().unwrap() as f64;
            let got = mean(&values);
            prop_assert!(min - 1e-9 <= got && got <= max + 1e-9);
        }

        // A constant sequence averages to the constant.
        #[test]
        fn mean_of_constant_is_the_constant(value in -10_000_i64..10_000, len in 1_usize..64) {
            let values = vec![value; len];
            prop_assert!((mean(&values) - value as f64).abs() < 1e-9);
        }
    }
}
