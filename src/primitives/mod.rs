//! Layer 1: Primitives
//!
//! Core building blocks and types.
//!
//! This layer provides the primitive abstractions and shared types used
//! throughout the crate. It has zero internal dependencies within the crate.
//!
//! # Module Organization
//!
//! - **bounds**: Inclusive integer range for uniform draws
//! - **errors**: Shared error types (SampleError)
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
//! Layer 2: Math (mean, combine)
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Inclusive bounds pair for random draws.
///
/// Provides:
/// - The `Bounds` configuration structure with documented defaults
/// - Containment and span queries
pub mod bounds;

/// Shared error types.
///
/// Provides:
/// - Unified `SampleError` enum
/// - Value-bearing error variants
pub mod errors;
