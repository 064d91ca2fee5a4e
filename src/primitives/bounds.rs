//! Inclusive bounds pair for uniform integer draws.
//!
//! ## Purpose
//!
//! This module defines the [`Bounds`] configuration structure that constrains
//! random draws to an inclusive `[min, max]` range. Representing the range as
//! an explicit value (rather than a pair of loose parameters) gives the
//! defaults a single documented home and lets validation speak about one
//! thing.
//!
//! ## Design notes
//!
//! * Both endpoints are inclusive.
//! * The default pair is `{ min: 1, max: 100 }`.
//! * Construction performs no validation; [`Validator::validate_bounds`]
//!   rejects inverted pairs before any sampling begins.
//!
//! ## Invariants
//!
//! * A validated bounds pair satisfies `min <= max`.
//! * `span()` counts both endpoints, so a validated pair always has a span
//!   of at least 1.
//!
//! ## Visibility
//!
//! [`Bounds`] is part of the public API and appears in the builder, the
//! sampling functions, and error variants.
//!
//! [`Validator::validate_bounds`]: crate::engine::validator::Validator::validate_bounds

// ============================================================================
// Bounds Pair
// ============================================================================

/// Inclusive `[min, max]` range for uniform integer draws.
///
/// # Examples
///
/// ```
/// use randmean::prelude::Bounds;
///
/// let bounds = Bounds::default();
/// assert_eq!(bounds, Bounds::new(1, 100));
/// assert!(bounds.contains(100));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    /// Smallest value a draw may take (inclusive).
    pub min: i64,

    /// Largest value a draw may take (inclusive).
    pub max: i64,
}

impl Default for Bounds {
    /// The documented default range `[1, 100]`.
    fn default() -> Self {
        Self { min: 1, max: 100 }
    }
}

impl Bounds {
    /// Create a bounds pair from its inclusive endpoints.
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Whether `value` lies within the inclusive range.
    pub const fn contains(&self, value: i64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Number of distinct values in the range, saturating at `u64::MAX`.
    ///
    /// Returns 0 for an inverted (invalid) pair.
    pub const fn span(&self) -> u64 {
        if self.min > self.max {
            return 0;
        }
        let count = self.max as i128 - self.min as i128 + 1;
        if count > u64::MAX as i128 {
            u64::MAX
        } else {
            count as u64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_one_to_one_hundred() {
        let bounds = Bounds::default();
        assert_eq!(bounds.min, 1);
        assert_eq!(bounds.max, 100);
    }

    #[test]
    fn contains_is_inclusive_on_both_ends() {
        let bounds = Bounds::new(-3, 7);
        assert!(bounds.contains(-3));
        assert!(bounds.contains(7));
        assert!(bounds.contains(0));
        assert!(!bounds.contains(-4));
        assert!(!bounds.contains(8));
    }

    #[test]
    fn span_counts_both_endpoints() {
        assert_eq!(Bounds::new(1, 100).span(), 100);
        assert_eq!(Bounds::new(5, 5).span(), 1);
        assert_eq!(Bounds::new(-2, 2).span(), 5);
    }

    #[test]
    fn span_of_inverted_pair_is_zero() {
        assert_eq!(Bounds::new(10, 1).span(), 0);
    }

    #[test]
    fn span_survives_extreme_endpoints() {
        assert_eq!(Bounds::new(i64::MIN, i64::MAX).span(), u64::MAX);
    }
}
