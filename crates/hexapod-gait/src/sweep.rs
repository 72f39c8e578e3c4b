//! Tabulate a gait over one walking cycle.
//!
//! Produces, for evenly spaced phases, the foot target and the joint angles
//! the leg would need to reach it. Callers use this to plot or export a gait
//! before running it on hardware.

use hexapod_core::error::KinematicsError;
use hexapod_core::types::{JointAngles, MovementIntent, Position3};
use hexapod_ik::{LegGeometry, inverse_kinematics3};

use crate::spec::GaitSpec;
use crate::trajectory::gait_position;

/// One sampled point of a gait cycle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SweepSample {
    /// Unwrapped phase of this sample, in `[0, 2]`.
    pub phase: f64,
    /// Foot target in the leg's joint frame.
    pub position: Position3,
    /// Joint angles for `position`, or why it cannot be reached.
    pub angles: Result<JointAngles, KinematicsError>,
}

impl SweepSample {
    pub const fn is_reachable(&self) -> bool {
        self.angles.is_ok()
    }
}

/// Sample one full gait cycle in `slices` evenly spaced steps, first and last
/// sample inclusive.
#[allow(clippy::cast_precision_loss)]
pub fn gait_sweep(
    geometry: &LegGeometry,
    gait: &GaitSpec,
    intent: &MovementIntent,
    slices: usize,
) -> Vec<SweepSample> {
    let half_span = slices.saturating_sub(1).max(1) as f64 / 2.0;

    (0..slices)
        .map(|i| {
            let phase = i as f64 / half_span;
            let position = gait_position(gait, intent, phase);
            SweepSample {
                phase,
                position,
                angles: inverse_kinematics3(geometry, &position),
            }
        })
        .collect()
}
