//! Foot trajectory as a pure function of walking phase.
//!
//! Planar motion is a single sinusoid per axis. Height follows a trapezoid
//! with cosine shoulders: a stance plateau around phase 0, a lift plateau
//! around phase ±1, and a cosine ease of width `height_scale` centred on the
//! stance/swing boundary at `|phase| = 0.5`.

use std::f64::consts::PI;

use hexapod_core::angle::{scalar_to_rad, wrap_phase};
use hexapod_core::types::{MovementIntent, Position3};

use crate::spec::GaitSpec;

/// Stance/swing boundary in wrapped phase magnitude.
const SWING_BOUNDARY: f64 = 0.5;

/// Target foot position for `phase`, in the leg's joint frame.
///
/// The result repeats every phase interval of length 2.
pub fn gait_position(gait: &GaitSpec, intent: &MovementIntent, phase: f64) -> Position3 {
    let wrapped = wrap_phase(phase);
    let sweep = scalar_to_rad(wrapped).sin();

    Position3::new(
        (sweep * gait.movement.x).mul_add(intent.x, gait.offset.x),
        (sweep * gait.movement.y).mul_add(intent.y, gait.offset.y),
        lift_level(gait.height_scale, wrapped.abs()).mul_add(gait.movement.z / 2.0, gait.offset.z),
    )
}

/// Normalized height in `[-1, 1]` for a wrapped phase magnitude in `[0, 1]`:
/// -1 in stance, +1 at full lift.
fn lift_level(height_scale: f64, magnitude: f64) -> f64 {
    let half_band = height_scale / 2.0;

    if magnitude < SWING_BOUNDARY - half_band {
        -1.0
    } else if magnitude > SWING_BOUNDARY + half_band {
        1.0
    } else if height_scale <= 0.0 {
        0.0
    } else {
        let t = (magnitude - SWING_BOUNDARY + half_band) / height_scale;
        -(t * PI).cos()
    }
}
