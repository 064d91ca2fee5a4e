//! Execution engine for sampling runs.
//!
//! ## Purpose
//!
//! This module carries a validated configuration through the pipeline: draw
//! a fixed-length sequence from the injected source, reduce it to its mean,
//! and package both into a [`SampleReport`].
//!
//! ## Design notes
//!
//! * The executor assumes its configuration has already been validated;
//!   the builder owns all checks.
//! * Execution is generic over the source so the same path serves system
//!   entropy, fixed seeds, and scripted replays.
//!
//! ## Execution Flow
//!
//! 1. Draw `length` values from the source, each within the bounds pair
//! 2. Reduce the sequence to its arithmetic mean
//! 3. Return a [`SampleReport`] holding sequence and mean
//!
//! ## Invariants
//!
//! * `config.bounds` is correctly ordered (`min <= max`).
//! * The report's sequence has exactly `config.length` elements.
//!
//! ## Non-goals
//!
//! * This module does not validate configuration (handled by `validator`).
//! * This module does not format output (handled by `output`).
//!
//! ## Visibility
//!
//! Internal to the crate's pipeline; the public entry point is the
//! [`Sampler`](crate::api::Sampler) built by the API layer.

use crate::engine::output::SampleReport;
use crate::math::mean::mean;
use crate::primitives::bounds::Bounds;
use crate::sampling::source::RandomSource;
use crate::sampling::uniform::sample_sequence;

// ============================================================================
// Configuration
// ============================================================================

/// Validated configuration for a sampling run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleConfig {
    /// Number of values to draw.
    pub length: usize,

    /// Inclusive range every draw must fall within.
    pub bounds: Bounds,
}

// ============================================================================
// Executor
// ============================================================================

/// Draw-then-reduce pipeline over an injected random source.
pub struct SampleExecutor;

impl SampleExecutor {
    /// Execute one sampling run and package the result.
    pub fn run<S: RandomSource + ?Sized>(config: SampleConfig, source: &mut S) -> SampleReport {
        let numbers = sample_sequence(source, config.length, config.bounds);
        let average = mean(&numbers);
        SampleReport::new(numbers, average)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampling::source::ReplaySource;

    #[test]
    fn run_draws_then_reduces() {
        let config = SampleConfig {
            length: 4,
            bounds: Bounds::default(),
        };
        let mut source = ReplaySource::new(vec![10, 20, 30, 40]);

        let report = SampleExecutor::run(config, &mut source);
        assert_eq!(report.numbers(), &[10, 20, 30, 40]);
        assert_eq!(report.average(), 25.0);
    }

    #[test]
    fn zero_length_run_reports_a_zero_mean() {
        let config = SampleConfig {
            length: 0,
            bounds: Bounds::default(),
        };
        let mut source = ReplaySource::new(vec![99]);

        let report = SampleExecutor::run(config, &mut source);
        assert!(report.is_empty());
        assert_eq!(report.average(), 0.0);
    }
}
