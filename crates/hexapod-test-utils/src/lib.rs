//! Shared test fixtures and utilities for the hexapod crates.
//!
//! Provides reference leg geometries, gait and servo configurations, and
//! deterministic RNG setup.

pub mod fixtures;
pub mod rng;

// ---------------------------------------------------------------------------
// Re-exports for convenience
// ---------------------------------------------------------------------------

pub use fixtures::{bench_leg, default_config_parts, reference_gait, reference_leg};
pub use rng::{random_reachable_target, seeded_rng};
