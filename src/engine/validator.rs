//! Configuration validation for sampling runs.
//!
//! ## Purpose
//!
//! This module checks sampler configuration before any drawing begins, so
//! that an invalid bounds pair or a misused builder surfaces as a typed
//! error instead of a bad sequence.
//!
//! ## Design notes
//!
//! * Validation is fail-fast: returns on the first error encountered.
//! * Errors carry the offending values for debugging.
//! * Any requested length is acceptable, including zero; the mean of an
//!   empty sequence is defined downstream.
//!
//! ## Key concepts
//!
//! ### Bounds Ordering
//!
//! A bounds pair is valid when `min <= max`. The degenerate pair
//! `min == max` is allowed and pins every draw to that value.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//! * A configuration that passes validation can be executed without
//!   further checks.
//!
//! ## Non-goals
//!
//! * This module does not clamp or repair invalid bounds.
//! * This module does not perform any drawing.
//!
//! ## Visibility
//!
//! Used by the builder at `build()` time; not intended for direct use.

use crate::primitives::bounds::Bounds;
use crate::primitives::errors::SampleError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for sampler configuration.
///
/// Provides static methods that return `Result<(), SampleError>` and fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    /// Validate that a bounds pair is correctly ordered.
    pub fn validate_bounds(bounds: Bounds) -> Result<(), SampleError> {
        if bounds.min > bounds.max {
            return Err(SampleError::invalid_bounds(bounds));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), SampleError> {
        if let Some(param) = duplicate_param {
            return Err(SampleError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
