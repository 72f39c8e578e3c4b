//! Fixed six-leg layout and tripod phase relationships.
//!
//! Legs are numbered in [`LegId::ALL`] order. The two tripods are
//! `{left_front, right_middle, left_rear}` and
//! `{right_front, left_middle, right_rear}`; legs within a tripod share phase
//! and the tripods run half a cycle apart.

use hexapod_core::types::{LegId, MovementIntent, Position3};
use hexapod_ik::{LegGeometry, MountOffset};

use crate::spec::GaitSpec;
use crate::trajectory::gait_position;

/// Position of a leg in the body layout and its tripod membership.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegPhaseOffset {
    /// `+1` for the first tripod, `-1` for the second.
    pub phase_sign: f64,
    /// `-1` on the left side of the body, `+1` on the right.
    pub x_sign: f64,
    /// `+1` at the front, `0` in the middle, `-1` at the rear.
    pub y_sign: f64,
}

impl LegPhaseOffset {
    const fn new(phase_sign: f64, x_sign: f64, y_sign: f64) -> Self {
        Self {
            phase_sign,
            x_sign,
            y_sign,
        }
    }

    /// Layout entry for `leg`.
    pub const fn for_leg(leg: LegId) -> Self {
        LEG_PHASE_OFFSETS[leg.index()]
    }

    /// Walking phase for this leg given the body phase.
    ///
    /// The second tripod is shifted by half a cycle (1.0 in phase units).
    pub fn leg_phase(&self, phase: f64) -> f64 {
        phase + (1.0 - self.phase_sign) / 2.0
    }

    /// Body movement intent expressed in the leg's joint frame, where X points
    /// outwards from the body.
    pub fn leg_intent(&self, intent: &MovementIntent) -> MovementIntent {
        MovementIntent::new(intent.x * self.x_sign, intent.y, intent.z)
    }

    /// Express a joint-frame position in body axes (X to the right).
    ///
    /// Left legs mirror X. The mapping is its own inverse, so it also takes
    /// body-axis positions back into the joint frame.
    pub fn to_body_axes(&self, position: &Position3) -> Position3 {
        Position3::new(position.x * self.x_sign, position.y, position.z)
    }

    /// Shoulder mounting offset for this leg on the given body.
    pub fn mount_offset(&self, geometry: &LegGeometry) -> MountOffset {
        geometry.mount_offset(self.x_sign, self.y_sign)
    }
}

/// Layout of all six legs, indexed by [`LegId::index`].
pub const LEG_PHASE_OFFSETS: [LegPhaseOffset; LegId::COUNT] = [
    LegPhaseOffset::new(1.0, -1.0, 1.0), // left front
    LegPhaseOffset::new(-1.0, -1.0, 0.0), // left middle
    LegPhaseOffset::new(1.0, -1.0, -1.0), // left rear
    LegPhaseOffset::new(-1.0, 1.0, 1.0), // right front
    LegPhaseOffset::new(1.0, 1.0, 0.0), // right middle
    LegPhaseOffset::new(-1.0, 1.0, -1.0), // right rear
];

/// Gait target for one leg at the given body phase and movement intent.
pub fn leg_position(
    gait: &GaitSpec,
    leg: LegId,
    intent: &MovementIntent,
    phase: f64,
) -> Position3 {
    let offset = LegPhaseOffset::for_leg(leg);
    gait_position(gait, &offset.leg_intent(intent), offset.leg_phase(phase))
}
