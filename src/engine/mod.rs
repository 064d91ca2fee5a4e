//! Layer 4: Engine
//!
//! Pipeline execution for bounded sampling.
//!
//! This layer orchestrates the sampling pipeline by coordinating between
//! sampling (sources, sequence generation) and math (mean reduction). It
//! validates configuration up front and packages results for presentation.
//!
//! # Module Organization
//!
//! - **executor**: Draw-then-reduce pipeline execution
//! - **validator**: Configuration validation rules
//! - **output**: The `SampleReport` result container and its rendering
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API (builder, sampler)
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Sampling (source, uniform)
//!   ↓
//! Layer 2: Math (mean, combine)
//!   ↓
//! Layer 1: Primitives (bounds, errors)
//! ```

/// Pipeline execution.
///
/// Provides:
/// - The validated `SampleConfig` carried from builder to executor
/// - The draw-then-reduce run loop
pub mod executor;

/// Validation utilities.
///
/// Provides:
/// - Bounds ordering checks
/// - Builder duplicate-parameter checks
pub mod validator;

/// Output types for sampling operations.
///
/// Provides:
/// - The `SampleReport` container struct
/// - Two-line human-readable report formatting
pub mod output;
