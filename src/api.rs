//! High-level API for bounded sampling runs.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point for the crate.
//! It implements a fluent builder for configuring a sampling run and a
//! [`Sampler`] that executes the validated configuration against any
//! [`RandomSource`].
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with documented defaults for the bounds.
//! * **Validated**: Configuration is checked fail-fast at `build()`; a
//!   constructed [`Sampler`] can always run.
//! * **Source-agnostic**: The run method borrows any source, so one sampler
//!   serves production entropy and deterministic tests alike.
//!
//! ## Key concepts
//!
//! ### Configuration Flow
//!
//! 1. Create a [`SamplerBuilder`] via `Sampler::builder(length)`.
//! 2. Chain configuration methods (`.min_value()`, `.max_value()`).
//! 3. Call `.build()` to validate and obtain a [`Sampler`].
//! 4. Call `.run(&mut source)` to draw and reduce.
//!
//! ## Visibility
//!
//! This is the primary public API. Types re-exported here are considered
//! stable.

use core::result;

use crate::engine::executor::{SampleConfig, SampleExecutor};
use crate::engine::validator::Validator;
use crate::sampling::source::RandomSource;

// Publicly re-exported types
pub use crate::engine::output::SampleReport;
pub use crate::primitives::bounds::Bounds;
pub use crate::primitives::errors::SampleError;

/// Result type alias for sampling operations.
pub type Result<T> = result::Result<T, SampleError>;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a sampling run.
///
/// Bounds default to the documented [`Bounds::default`] pair `[1, 100]`
/// when the corresponding setter is not called.
#[derive(Debug, Clone)]
pub struct SamplerBuilder {
    /// Number of values to draw.
    pub length: usize,

    /// Inclusive lower bound (default 1).
    pub min_value: Option<i64>,

    /// Inclusive upper bound (default 100).
    pub max_value: Option<i64>,

    /// Tracks if any parameter was set multiple times (for validation).
    pub(crate) duplicate_param: Option<&'static str>,
}

impl SamplerBuilder {
    /// Create a new builder for a run that draws `length` values.
    pub fn new(length: usize) -> Self {
        Self {
            length,
            min_value: None,
            max_value: None,
            duplicate_param: None,
        }
    }

    /// Set the inclusive lower bound (default 1).
    pub fn min_value(mut self, min: i64) -> Self {
        if self.min_value.is_some() {
            self.duplicate_param = Some("min_value");
        }
        self.min_value = Some(min);
        self
    }

    /// Set the inclusive upper bound (default 100).
    pub fn max_value(mut self, max: i64) -> Self {
        if self.max_value.is_some() {
            self.duplicate_param = Some("max_value");
        }
        self.max_value = Some(max);
        self
    }

    /// Set both bounds from a [`Bounds`] pair.
    pub fn bounds(mut self, bounds: Bounds) -> Self {
        if self.min_value.is_some() || self.max_value.is_some() {
            self.duplicate_param = Some("bounds");
        }
        self.min_value = Some(bounds.min);
        self.max_value = Some(bounds.max);
        self
    }

    /// Validate the configuration and build a [`Sampler`].
    ///
    /// # Errors
    ///
    /// * [`SampleError::DuplicateParameter`] if a setter was called twice.
    /// * [`SampleError::InvalidBounds`] if the resolved bounds are inverted.
    pub fn build(self) -> Result<Sampler> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let defaults = Bounds::default();
        let bounds = Bounds::new(
            self.min_value.unwrap_or(defaults.min),
            self.max_value.unwrap_or(defaults.max),
        );
        Validator::validate_bounds(bounds)?;

        Ok(Sampler {
            config: SampleConfig {
                length: self.length,
                bounds,
            },
        })
    }
}

// ============================================================================
// Sampler
// ============================================================================

/// Validated sampling pipeline.
///
/// # Examples
///
/// ```
/// use randmean::prelude::*;
///
/// let mut source = ReplaySource::new(vec![10, 20, 30]);
/// let report = Sampler::builder(3)
///     .min_value(10)
///     .max_value(30)
///     .build()?
///     .run(&mut source);
///
/// assert_eq!(report.average(), 20.0);
/// # Ok::<(), SampleError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Sampler {
    config: SampleConfig,
}

impl Sampler {
    /// Start configuring a run that draws `length` values.
    pub fn builder(length: usize) -> SamplerBuilder {
        SamplerBuilder::new(length)
    }

    /// Execute the pipeline against the provided source.
    pub fn run<S: RandomSource + ?Sized>(&self, source: &mut S) -> SampleReport {
        SampleExecutor::run(self.config, source)
    }

    /// The inclusive bounds every draw falls within.
    pub fn bounds(&self) -> Bounds {
        self.config.bounds
    }

    /// The number of values each run draws.
    pub fn length(&self) -> usize {
        self.config.length
    }
}
