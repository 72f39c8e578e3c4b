//! Closed-form leg kinematics for six-legged walkers.
//!
//! Each leg is a yaw joint at the shoulder followed by a two-link planar arm
//! (femur `AB`, foreleg `BC`). Inverse kinematics is solved analytically with
//! the law of cosines; forward kinematics reconstructs the foot position for
//! verification.
//!
//! # Architecture
//!
//! ```text
//! world target ──► body_transform ──► inverse_kinematics3 ──► joint angles
//!                  (roll / pitch)     (yaw + planar solve)
//! ```
//!
//! All functions are pure. Unreachable or degenerate targets come back as
//! [`KinematicsError`](hexapod_core::error::KinematicsError) values rather
//! than NaN angles.

pub mod body;
pub mod geometry;
pub mod solver;

pub use body::{BodyAttitude, MountOffset, body_transform};
pub use geometry::LegGeometry;
pub use solver::{
    forward_kinematics2, forward_kinematics3, inverse_kinematics2, inverse_kinematics3,
};
