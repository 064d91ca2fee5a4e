//! Layer 2: Math
//!
//! Pure mathematical functions.
//!
//! This layer provides the numeric reductions used by the pipeline:
//! - Arithmetic mean with a defined empty-input policy
//! - A fixed six-term arithmetic combinator
//!
//! These are reusable building blocks with no sampling-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API (builder, sampler)
//!   ↓
//! Layer 4: Engine (validator, executor, output)
//!   ↓
//! Layer 3: Sampling (source, uniform)
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives (bounds, errors)
//! ```

/// Arithmetic mean of a numeric slice.
///
/// Provides:
/// - Generic reduction over integer and real inputs
/// - The empty-input-returns-zero policy
pub mod mean;

/// Fixed six-term arithmetic combinator.
///
/// Provides:
/// - `(a + b) + (c - d) + (e * f)` over any numeric type
pub mod combine;
