//! Analytic inverse and forward kinematics for a three-joint leg.
//!
//! Joints sit at A (shoulder lift) and B (knee), with the foot at C. The
//! planar solve works in the leg's vertical plane on the horizontal distance
//! `d` and height `h` of C from A:
//!
//! ```text
//!          B
//!         / \
//!   len_ab   len_bc
//!       /     \
//!      A       \        alpha: AB above the horizontal
//!       `-.     \       beta:  interior angle at B
//!          `-.   C
//!            len_ac
//! ```
//!
//! The three-joint solve adds a yaw `theta` about the vertical axis at the
//! shoulder, and shifts the planar problem out by `offset_a`.

use std::f64::consts::PI;

use hexapod_core::error::KinematicsError;
use hexapod_core::types::{JointAngles, PlanarAngles, Position2, Position3};

use crate::geometry::LegGeometry;

/// Solve the planar two-joint leg for a foot at distance `d` and height `h`
/// from joint A.
///
/// # Errors
///
/// Returns [`KinematicsError::Unreachable`] when `sqrt(d² + h²)` lies outside
/// the annulus `[|len_ab - len_bc|, len_ab + len_bc]`, is zero, or is not
/// finite.
pub fn inverse_kinematics2(
    geometry: &LegGeometry,
    d: f64,
    h: f64,
) -> Result<PlanarAngles, KinematicsError> {
    let len_ab = geometry.len_ab;
    let len_bc = geometry.len_bc;
    let len_ac = d.hypot(h);

    if !geometry.is_reachable(len_ac) {
        return Err(KinematicsError::Unreachable {
            distance: len_ac,
            min: geometry.min_reach(),
            max: geometry.max_reach(),
        });
    }

    // Law of cosines; clamp absorbs rounding right on the annulus boundary
    let cos_a = (len_ac.powi(2) + len_ab.powi(2) - len_bc.powi(2)) / (2.0 * len_ac * len_ab);
    let cos_b = (len_ab.powi(2) + len_bc.powi(2) - len_ac.powi(2)) / (2.0 * len_ab * len_bc);

    let angle_a = cos_a.clamp(-1.0, 1.0).acos();
    let angle_b = cos_b.clamp(-1.0, 1.0).acos();

    Ok(PlanarAngles::new(angle_a + h.atan2(d), angle_b))
}

/// Solve the full leg for a foot position in the leg's joint frame.
///
/// X points outwards from the body, Y forwards, Z up.
///
/// # Errors
///
/// Returns [`KinematicsError::DegenerateInput`] when the target lies on the
/// yaw axis (`x = 0` and `y = 0`), and propagates
/// [`KinematicsError::Unreachable`] from the planar solve.
pub fn inverse_kinematics3(
    geometry: &LegGeometry,
    position: &Position3,
) -> Result<JointAngles, KinematicsError> {
    let len_xy = position.x.hypot(position.y);
    if len_xy <= 0.0 {
        return Err(KinematicsError::DegenerateInput);
    }

    let theta = position.y.atan2(position.x);
    let planar = inverse_kinematics2(geometry, len_xy - geometry.offset_a, position.z)?;

    Ok(JointAngles::from_planar(planar, theta))
}

/// Planar foot position `(d, h)` for the given joint angles.
pub fn forward_kinematics2(geometry: &LegGeometry, angles: &PlanarAngles) -> Position2 {
    let (sin_a, cos_a) = angles.alpha.sin_cos();
    let bx = geometry.len_ab * cos_a;
    let bh = geometry.len_ab * sin_a;

    let world_beta = PI - angles.alpha - angles.beta;
    let (sin_wb, cos_wb) = world_beta.sin_cos();

    Position2::new(
        geometry.len_bc.mul_add(cos_wb, bx),
        geometry.len_bc.mul_add(-sin_wb, bh),
    )
}

/// Foot position in the leg's joint frame for the given joint angles.
pub fn forward_kinematics3(geometry: &LegGeometry, angles: &JointAngles) -> Position3 {
    let planar = forward_kinematics2(geometry, &angles.planar());
    let radial = geometry.offset_a + planar.x;
    let (sin_t, cos_t) = angles.theta.sin_cos();

    Position3::new(radial * cos_t, radial * sin_t, planar.y)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
