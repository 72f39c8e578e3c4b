//! Deterministic RNG utilities for reproducible tests.

use std::f64::consts::{FRAC_PI_2, PI};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use hexapod_core::types::Position3;
use hexapod_ik::LegGeometry;

/// Margin kept from every workspace boundary, in millimetres / radians.
const MARGIN: f64 = 1e-3;

/// Create a deterministic `ChaCha8Rng` from a seed.
///
/// All test randomization should go through this to ensure reproducibility.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Random foot target strictly inside `geometry`'s reachable workspace,
/// in front of the shoulder.
pub fn random_reachable_target(rng: &mut impl Rng, geometry: &LegGeometry) -> Position3 {
    let len_ac = rng.gen_range(geometry.min_reach() + MARGIN..geometry.max_reach() - MARGIN);
    let elevation = rng.gen_range(-FRAC_PI_2 + MARGIN..FRAC_PI_2 - MARGIN);
    let theta = rng.gen_range(-PI..PI);

    let radial = len_ac.mul_add(elevation.cos(), geometry.offset_a);
    Position3::new(
        radial * theta.cos(),
        radial * theta.sin(),
        len_ac * elevation.sin(),
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
