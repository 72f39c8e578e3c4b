//! Body attitude compensation.
//!
//! Maps a world-frame foot target into a leg's joint frame when the body is
//! rolled or pitched. Pitch is compensated first, then roll is applied in the
//! pitch-compensated frame; the two steps do not commute.
//!
//! Each step rotates the target about the shoulder, after correcting the
//! target height for the shoulder being raised or lowered by the tilt of the
//! body at the leg's mounting offset.

use serde::{Deserialize, Serialize};

use hexapod_core::types::Position3;

/// Body roll and pitch (radians). Yaw is not compensated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BodyAttitude {
    /// Rotation about the body Y (forward) axis.
    pub roll: f64,
    /// Rotation about the body X (lateral) axis.
    pub pitch: f64,
}

impl BodyAttitude {
    /// Level body.
    pub const NEUTRAL: Self = Self {
        roll: 0.0,
        pitch: 0.0,
    };

    pub const fn new(roll: f64, pitch: f64) -> Self {
        Self { roll, pitch }
    }

    /// True when neither roll nor pitch is applied.
    pub fn is_neutral(&self) -> bool {
        self.roll.abs() <= f64::EPSILON && self.pitch.abs() <= f64::EPSILON
    }
}

/// Shoulder position of a leg relative to the body centre, in the body plane.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MountOffset {
    /// Lateral offset, used for roll compensation.
    pub x: f64,
    /// Longitudinal offset, used for pitch compensation.
    pub y: f64,
}

impl MountOffset {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Transform a world-frame target into the leg's joint frame.
///
/// Identity when `attitude` is neutral. The result feeds
/// [`inverse_kinematics3`](crate::solver::inverse_kinematics3) directly.
pub fn body_transform(
    attitude: &BodyAttitude,
    mount: &MountOffset,
    world: &Position3,
) -> Position3 {
    let pitched = compensate_pitch(attitude.pitch, mount.y, world);
    compensate_roll(attitude.roll, mount.x, &pitched)
}

/// Rotate `(y, z)` by `pitch`, after lowering the target by the shoulder
/// height change at `offset_y`.
fn compensate_pitch(pitch: f64, offset_y: f64, p: &Position3) -> Position3 {
    let world_z = offset_y.mul_add(-pitch.sin(), p.z);
    let len_ef = p.y.hypot(world_z);
    let angle = p.y.atan2(world_z) + pitch;
    let (sin, cos) = angle.sin_cos();

    Position3::new(p.x, len_ef * sin, len_ef * cos)
}

/// Rotate `(x, z)` by `roll`, after lowering the target by the shoulder
/// height change at `offset_x`.
fn compensate_roll(roll: f64, offset_x: f64, p: &Position3) -> Position3 {
    let world_z = offset_x.mul_add(-roll.sin(), p.z);
    let len_ef = p.x.hypot(world_z);
    let angle = p.x.atan2(world_z) + roll;
    let (sin, cos) = angle.sin_cos();

    Position3::new(len_ef * sin, p.y, len_ef * cos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    const FLOAT_ERROR: f64 = 0.01;

    #[test]
    fn neutral_is_identity() {
        let world = Position3::new(10.0, 20.0, 30.0);
        let joint = body_transform(&BodyAttitude::NEUTRAL, &MountOffset::default(), &world);
        assert_relative_eq!(joint, world, epsilon = 1e-9);
    }

    #[test]
    fn neutral_is_identity_with_offsets_and_negative_heights() {
        let mount = MountOffset::new(-70.0, 150.0);
        for world in [
            Position3::new(150.0, -40.0, -80.0),
            Position3::new(-5.0, 0.0, -120.0),
            Position3::new(0.0, 0.0, 0.0),
            Position3::new(33.0, 12.0, 0.0),
        ] {
            let joint = body_transform(&BodyAttitude::NEUTRAL, &mount, &world);
            assert_relative_eq!(joint, world, epsilon = 1e-9);
        }
    }

    #[test]
    fn pitch_rotates_height_into_y() {
        let pitch = PI / 8.0;
        let attitude = BodyAttitude::new(0.0, pitch);
        let world = Position3::new(10.0, 0.0, 30.0);

        let joint = body_transform(&attitude, &MountOffset::default(), &world);
        assert_relative_eq!(joint.x, world.x, epsilon = FLOAT_ERROR);
        assert_relative_eq!(joint.y, world.z * pitch.sin(), epsilon = FLOAT_ERROR);
        assert_relative_eq!(joint.z, world.z * pitch.cos(), epsilon = FLOAT_ERROR);
    }

    #[test]
    fn pitch_with_mount_offset() {
        let pitch = PI / 8.0;
        let offset_y = 30.0;
        let attitude = BodyAttitude::new(0.0, pitch);
        let world = Position3::new(10.0, 0.0, 30.0);

        let joint = body_transform(&attitude, &MountOffset::new(0.0, offset_y), &world);
        let lowered = world.z - pitch.sin() * offset_y;
        assert_relative_eq!(joint.x, world.x, epsilon = FLOAT_ERROR);
        assert_relative_eq!(joint.y, lowered * pitch.sin(), epsilon = FLOAT_ERROR);
        assert_relative_eq!(joint.z, lowered * pitch.cos(), epsilon = FLOAT_ERROR);
    }

    #[test]
    fn pitch_preserves_x_and_distance() {
        let attitude = BodyAttitude::new(0.0, PI / 8.0);
        let world = Position3::new(10.0, 10.0, 30.0);

        let joint = body_transform(&attitude, &MountOffset::default(), &world);
        assert_relative_eq!(joint.x, world.x, epsilon = FLOAT_ERROR);
        assert_relative_eq!(
            joint.y.hypot(joint.z),
            world.y.hypot(world.z),
            epsilon = FLOAT_ERROR
        );
    }

    #[test]
    fn roll_rotates_height_into_x() {
        let roll = PI / 8.0;
        let attitude = BodyAttitude::new(roll, 0.0);
        let world = Position3::new(0.0, 10.0, 30.0);

        let joint = body_transform(&attitude, &MountOffset::default(), &world);
        assert_relative_eq!(joint.y, world.y, epsilon = FLOAT_ERROR);
        assert_relative_eq!(joint.x, world.z * roll.sin(), epsilon = FLOAT_ERROR);
        assert_relative_eq!(joint.z, world.z * roll.cos(), epsilon = FLOAT_ERROR);
    }

    #[test]
    fn roll_with_mount_offset() {
        let roll = PI / 8.0;
        let offset_x = 30.0;
        let attitude = BodyAttitude::new(roll, 0.0);
        let world = Position3::new(0.0, 10.0, 30.0);

        let joint = body_transform(&attitude, &MountOffset::new(offset_x, 0.0), &world);
        let lowered = world.z - roll.sin() * offset_x;
        assert_relative_eq!(joint.y, world.y, epsilon = FLOAT_ERROR);
        assert_relative_eq!(joint.x, lowered * roll.sin(), epsilon = FLOAT_ERROR);
        assert_relative_eq!(joint.z, lowered * roll.cos(), epsilon = FLOAT_ERROR);
    }

    #[test]
    fn roll_preserves_y() {
        let attitude = BodyAttitude::new(PI / 8.0, 0.0);
        let world = Position3::new(10.0, 10.0, 30.0);

        let joint = body_transform(&attitude, &MountOffset::default(), &world);
        assert_relative_eq!(joint.y, world.y, epsilon = FLOAT_ERROR);
    }

    #[test]
    fn is_neutral() {
        assert!(BodyAttitude::NEUTRAL.is_neutral());
        assert!(BodyAttitude::default().is_neutral());
        assert!(!BodyAttitude::new(0.1, 0.0).is_neutral());
        assert!(!BodyAttitude::new(0.0, -0.1).is_neutral());
    }
}
