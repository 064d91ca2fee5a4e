//! Shared error types for sampling configuration.
//!
//! ## Purpose
//!
//! This module defines the unified [`SampleError`] enum returned by builder
//! validation. Variants carry the offending values so messages stay
//! context-aware without string plumbing at the call sites.
//!
//! ## Design notes
//!
//! * All failures are configuration failures; the pipeline itself cannot
//!   fail once a sampler has been built.
//! * An empty input to the mean is a defined result (zero), not an error.
//! * `Display` is implemented against `core::fmt` so the type stays usable
//!   without `std`; the `std::error::Error` impl is feature-gated.
//!
//! ## Visibility
//!
//! [`SampleError`] is part of the public API and is the error type of
//! [`crate::api::Result`].

use crate::primitives::bounds::Bounds;

use core::fmt;

// ============================================================================
// Error Type
// ============================================================================

/// Errors raised while validating sampler configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleError {
    /// The bounds pair is inverted (`min > max`).
    InvalidBounds {
        /// Requested minimum (inclusive).
        min: i64,
        /// Requested maximum (inclusive).
        max: i64,
    },

    /// A builder parameter was set more than once.
    DuplicateParameter {
        /// Name of the parameter that was set repeatedly.
        parameter: &'static str,
    },
}

impl SampleError {
    /// Convenience constructor for an inverted bounds pair.
    pub const fn invalid_bounds(bounds: Bounds) -> Self {
        Self::InvalidBounds {
            min: bounds.min,
            max: bounds.max,
        }
    }
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBounds { min, max } => {
                write!(f, "invalid bounds: min_value {min} exceeds max_value {max}")
            }
            Self::DuplicateParameter { parameter } => {
                write!(f, "parameter '{parameter}' was set multiple times")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SampleError {}
