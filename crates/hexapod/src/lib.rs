//! Six-legged walker control: gait generation, leg kinematics and servo
//! output in one pipeline.
//!
//! # Quick Start
//!
//! ```
//! use hexapod::prelude::*;
//!
//! let robot = Hexapod::new(HexapodConfig::default()).unwrap();
//! let out = robot
//!     .tick(0.25, &MovementIntent::y(), &BodyAttitude::NEUTRAL)
//!     .unwrap();
//! assert_eq!(out.codes.len(), 6);
//! ```
//!
//! The building blocks live in their own crates ([`hexapod_core`],
//! [`hexapod_ik`], [`hexapod_gait`], [`hexapod_actuator`]); this crate wires
//! them together.

pub mod config;
pub mod pipeline;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::config::HexapodConfig;
    pub use crate::pipeline::{Hexapod, TickOutput};

    pub use hexapod_actuator::prelude::*;
    pub use hexapod_core::prelude::*;
    pub use hexapod_gait::{GaitSpec, LegPhaseOffset, gait_position, gait_sweep, is_gait_valid};
    pub use hexapod_ik::{
        BodyAttitude, LegGeometry, MountOffset, body_transform, forward_kinematics3,
        inverse_kinematics3,
    };
}
