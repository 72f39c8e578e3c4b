//! Value types shared by the kinematics, gait and actuator crates.
//!
//! Positions are plain `nalgebra` vectors. The frame a position lives in
//! (world, body or joint) is implied by the operation that produced it and is
//! never carried in the type.

use std::fmt;

use nalgebra::{Vector2, Vector3};
use serde::{Deserialize, Serialize};

/// Planar position `(d, h)` in a leg's sagittal plane.
pub type Position2 = Vector2<f64>;

/// Cartesian position `(x, y, z)`.
pub type Position3 = Vector3<f64>;

/// Per-axis travel multipliers in `-1..=1`, applied on top of the gait envelope.
pub type MovementIntent = Vector3<f64>;

// ---------------------------------------------------------------------------
// Joint angles
// ---------------------------------------------------------------------------

/// Angles of a two-joint planar leg.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanarAngles {
    /// Shoulder lift angle, relative to the horizontal plane (rad).
    pub alpha: f64,
    /// Interior knee angle between femur and foreleg (rad).
    pub beta: f64,
}

impl PlanarAngles {
    pub const fn new(alpha: f64, beta: f64) -> Self {
        Self { alpha, beta }
    }
}

/// Angles of a three-joint leg: the planar pair plus shoulder yaw.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct JointAngles {
    /// Shoulder lift angle, relative to the horizontal plane (rad).
    pub alpha: f64,
    /// Interior knee angle (rad).
    pub beta: f64,
    /// Shoulder yaw about the vertical axis (rad).
    pub theta: f64,
}

impl JointAngles {
    pub const fn new(alpha: f64, beta: f64, theta: f64) -> Self {
        Self { alpha, beta, theta }
    }

    /// Combine planar angles with a yaw angle.
    pub const fn from_planar(planar: PlanarAngles, theta: f64) -> Self {
        Self {
            alpha: planar.alpha,
            beta: planar.beta,
            theta,
        }
    }

    /// The planar (alpha, beta) part.
    pub const fn planar(&self) -> PlanarAngles {
        PlanarAngles {
            alpha: self.alpha,
            beta: self.beta,
        }
    }

    /// Angles in actuator order `[alpha, beta, theta]`.
    pub const fn to_array(self) -> [f64; 3] {
        [self.alpha, self.beta, self.theta]
    }
}

// ---------------------------------------------------------------------------
// LegId
// ---------------------------------------------------------------------------

/// Identifies one of the six legs of the hexagonal body layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegId {
    LeftFront,
    LeftMiddle,
    LeftRear,
    RightFront,
    RightMiddle,
    RightRear,
}

impl LegId {
    pub const COUNT: usize = 6;

    /// All legs in actuator order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::LeftFront,
        Self::LeftMiddle,
        Self::LeftRear,
        Self::RightFront,
        Self::RightMiddle,
        Self::RightRear,
    ];

    /// Position of this leg in [`LegId::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::LeftFront => "left_front",
            Self::LeftMiddle => "left_middle",
            Self::LeftRear => "left_rear",
            Self::RightFront => "right_front",
            Self::RightMiddle => "right_middle",
            Self::RightRear => "right_rear",
        }
    }
}

impl fmt::Display for LegId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// MovementAxis
// ---------------------------------------------------------------------------

/// Canonical movement directions used when checking a gait.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MovementAxis {
    /// Outward / lateral travel, exercising stride width.
    X,
    /// Forward / reverse travel, exercising stride length.
    Y,
}

impl MovementAxis {
    pub const ALL: [Self; 2] = [Self::X, Self::Y];

    /// Unit movement intent along this axis.
    pub fn intent(self) -> MovementIntent {
        match self {
            Self::X => MovementIntent::x(),
            Self::Y => MovementIntent::y(),
        }
    }
}

impl fmt::Display for MovementAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => f.write_str("x"),
            Self::Y => f.write_str("y"),
        }
    }
}
