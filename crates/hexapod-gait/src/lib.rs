//! Phase-driven tripod gait for six-legged walkers.
//!
//! This crate turns a normalized walking phase into foot targets and checks
//! that a gait stays inside the leg workspace:
//!
//! 1. **Gait parameters**: movement envelope, resting offset and lift blend window
//! 2. **Trajectory**: sinusoidal planar sweep with a trapezoidal lift profile
//! 3. **Leg table**: per-leg tripod phase, lateral mirroring and mounting side
//! 4. **Validator**: sweeps the trajectory through the IK solver
//! 5. **Sweep**: tabulates phase, target and joint angles over one cycle
//!
//! # Phase convention
//!
//! One walking cycle spans phase `[-1, 1)`; any real phase is folded into
//! that range. The foot is in stance around phase 0 and lifted around ±1.
//! Opposing tripods run half a cycle apart.

pub mod legs;
pub mod spec;
pub mod sweep;
pub mod trajectory;
pub mod validate;

pub use legs::{LEG_PHASE_OFFSETS, LegPhaseOffset, leg_position};
pub use spec::GaitSpec;
pub use sweep::{SweepSample, gait_sweep};
pub use trajectory::gait_position;
pub use validate::{VALIDATION_SAMPLES, is_gait_valid};
