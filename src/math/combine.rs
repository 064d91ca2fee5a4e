//! Fixed six-term arithmetic combinator.
//!
//! Combines six scalars through one addition, one subtraction, and one
//! multiplication stage. The function is unrelated to the sampling pipeline
//! and carries no state; it exists as a standalone arithmetic exercise on
//! the public surface.

use num_traits::Num;

/// Compute `(a + b) + (c - d) + (e * f)`.
///
/// Works for any numeric type with the basic arithmetic operations, signed
/// or floating.
///
/// # Examples
///
/// ```
/// use randmean::math::combine::combine;
///
/// assert_eq!(combine(1, 2, 3, 4, 5, 6), 32);
/// assert_eq!(combine(0.5, 0.5, 1.0, 1.0, 2.0, 2.0), 5.0);
/// ```
pub fn combine<T: Num + Copy>(a: T, b: T, c: T, d: T, e: T, f: T) -> T {
    let sum = a + b;
    let difference = c - d;
    let product = e * f;

    sum + difference + product
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_inputs() {
        // (1 + 2) + (3 - 4) + (5 * 6) = 3 - 1 + 30
        assert_eq!(combine(1, 2, 3, 4, 5, 6), 32);
    }

    #[test]
    fn zero_inputs_collapse_to_zero() {
        assert_eq!(combine(0, 0, 0, 0, 0, 0), 0);
    }

    #[test]
    fn negative_and_real_inputs() {
        assert_eq!(combine(-1, -2, -3, -4, -5, -6), 28);
        assert_eq!(combine(1.5, 2.5, 10.0, 0.5, 2.0, 3.0), 19.5);
    }

    #[test]
    fn stages_are_independent_of_argument_grouping() {
        let a = combine(7, 3, 20, 5, 4, 2);
        assert_eq!(a, (7 + 3) + (20 - 5) + (4 * 2));
    }
}
