//! Layer 3: Sampling
//!
//! Random sequence generation.
//!
//! This layer produces the bounded integer sequences the pipeline reduces.
//! Entropy is always injected through the [`source::RandomSource`] trait so
//! the same generation code serves production draws, seeded reproductions,
//! and scripted replays.
//!
//! # Module Organization
//!
//! - **source**: The `RandomSource` seam and its implementations
//! - **uniform**: Fixed-length uniform sequence generation
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API (builder, sampler)
//!   ↓
//! Layer 4: Engine (validator, executor, output)
//!   ↓
//! Layer 3: Sampling ← You are here
//!   ↓
//! Layer 2: Math (mean, combine)
//!   ↓
//! Layer 1: Primitives (bounds, errors)
//! ```

/// Random source abstraction and implementations.
///
/// Provides:
/// - The `RandomSource` trait
/// - `SystemSource` and `SeededSource` backed by `rand` (std)
/// - `ReplaySource` for deterministic scripts
pub mod source;

/// Uniform sequence generation.
///
/// Provides:
/// - Fixed-length draws over an inclusive bounds pair
pub mod uniform;
