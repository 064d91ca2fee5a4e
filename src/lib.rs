//! Bounded uniform integer sampling with mean reporting.
//!
//! ## Purpose
//!
//! This crate draws fixed-length sequences of uniformly distributed random
//! integers from an inclusive bounds pair, reduces them to their arithmetic
//! mean, and renders a two-line human-readable report. A small unrelated
//! arithmetic combinator rounds out the numeric surface.
//!
//! ## Design notes
//!
//! * **Injectable entropy**: all sampling goes through the [`RandomSource`]
//!   trait, so production draws from a system-seeded generator while tests
//!   replay fixed scripts or seed a deterministic generator.
//! * **Validated configuration**: bounds and builder state are checked
//!   fail-fast when the sampler is built, never mid-pipeline.
//! * **Explicit defaults**: the default bounds pair is a documented
//!   [`Bounds`] value, not a call-site convention.
//! * **`no_std` support**: the core layers depend only on `core` and `alloc`;
//!   the `std` feature (default) adds the `rand`-backed sources and the
//!   binary entry point.
//!
//! ## Quick start
//!
//! ```
//! use randmean::prelude::*;
//!
//! let mut source = ReplaySource::new(vec![4, 77, 12]);
//! let report = Sampler::builder(3).build()?.run(&mut source);
//!
//! assert_eq!(report.numbers(), &[4, 77, 12]);
//! assert_eq!(report.average(), 31.0);
//! # Ok::<(), SampleError>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Layer 5: API (builder, sampler)
//!   ↓
//! Layer 4: Engine (validator, executor, output)
//!   ↓
//! Layer 3: Sampling (source, uniform)
//!   ↓
//! Layer 2: Math (mean, combine)
//!   ↓
//! Layer 1: Primitives (bounds, errors)
//! ```
//!
//! [`RandomSource`]: crate::sampling::source::RandomSource
//! [`Bounds`]: crate::primitives::bounds::Bounds

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

#[cfg(not(feature = "std"))]
extern crate alloc;

/// Layer 1: core building blocks and shared types.
pub mod primitives;

/// Layer 2: pure mathematical functions.
pub mod math;

/// Layer 3: random sequence generation.
pub mod sampling;

/// Layer 4: pipeline execution, validation, and output.
pub mod engine;

/// Layer 5: user-facing configuration API.
pub mod api;

/// Commonly used types, re-exported for convenient glob imports.
pub mod prelude {
    pub use crate::api::{Result, Sampler, SamplerBuilder};
    pub use crate::engine::output::SampleReport;
    pub use crate::math::combine::combine;
    pub use crate::math::mean::mean;
    pub use crate::primitives::bounds::Bounds;
    pub use crate::primitives::errors::SampleError;
    pub use crate::sampling::source::{RandomSource, ReplaySource};

    #[cfg(feature = "std")]
    pub use crate::sampling::source::{SeededSource, SystemSource};
}
