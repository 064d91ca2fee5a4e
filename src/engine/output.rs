//! Output types and result rendering for sampling operations.
//!
//! ## Purpose
//!
//! This module defines the [`SampleReport`] struct which pairs a drawn
//! sequence with its arithmetic mean, and renders the pair as the crate's
//! two-line human-readable report.
//!
//! ## Design notes
//!
//! * Construction is the only way to set the fields, so a report's mean
//!   always corresponds to its sequence.
//! * `Display` renders exactly two lines with no trailing newline; callers
//!   printing via `println!` get a clean final line.
//! * The mean is rendered with `{}`, so whole values print without a
//!   decimal point (`0`, not `0.0`) and fractional values print in full
//!   (`37.1`).
//!
//! ## Report format
//!
//! ```text
//! Numbers: [4, 77, 12, 99, 3, 50, 21, 8, 64, 33]
//! Average: 37.1
//! ```
//!
//! ## Invariants
//!
//! * `average` is the arithmetic mean of `numbers` (zero when empty).
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * This module does not provide serialization logic.
//!
//! ## Visibility
//!
//! [`SampleReport`] is part of the public API and is the result type
//! returned by every sampling run.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// ============================================================================
// Result Structure
// ============================================================================

/// Result of a sampling run: the drawn sequence and its mean.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleReport {
    /// Drawn sequence, in draw order.
    numbers: Vec<i64>,

    /// Arithmetic mean of the sequence.
    average: f64,
}

impl SampleReport {
    /// Package a drawn sequence together with its mean.
    pub fn new(numbers: Vec<i64>, average: f64) -> Self {
        Self { numbers, average }
    }

    // ========================================================================
    // Query Methods
    // ========================================================================

    /// The drawn sequence, in draw order.
    pub fn numbers(&self) -> &[i64] {
        &self.numbers
    }

    /// The arithmetic mean of the sequence (zero when empty).
    pub fn average(&self) -> f64 {
        self.average
    }

    /// Number of values drawn.
    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    /// Check whether the run drew no values.
    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl core::fmt::Display for SampleReport {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Numbers: {:?}", self.numbers)?;
        write!(f, "Average: {}", self.average)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_the_two_line_report() {
        let report = SampleReport::new(vec![4, 77, 12, 99, 3, 50, 21, 8, 64, 33], 37.1);
        assert_eq!(
            report.to_string(),
            "Numbers: [4, 77, 12, 99, 3, 50, 21, 8, 64, 33]\nAverage: 37.1"
        );
    }

    #[test]
    fn whole_means_render_without_a_decimal_point() {
        let report = SampleReport::new(vec![10, 20, 30], 20.0);
        assert_eq!(report.to_string(), "Numbers: [10, 20, 30]\nAverage: 20");
    }

    #[test]
    fn empty_report_renders_brackets_and_zero() {
        let report = SampleReport::new(Vec::new(), 0.0);
        assert_eq!(report.to_string(), "Numbers: []\nAverage: 0");
    }

    #[test]
    fn queries_reflect_the_stored_sequence() {
        let report = SampleReport::new(vec![5, 6], 5.5);
        assert_eq!(report.numbers(), &[5, 6]);
        assert_eq!(report.average(), 5.5);
        assert_eq!(report.len(), 2);
        assert!(!report.is_empty());
        assert!(SampleReport::new(Vec::new(), 0.0).is_empty());
    }
}
