//! Joint angle to actuator output mapping.
//!
//! Pure Rust, no hardware dependencies. Converts solved joint angles into
//! the integer codes servo controllers expect (position register values,
//! pulse widths in microseconds, ...).
//!
//! # Pipeline
//!
//! ```text
//! joint angle (rad) → clamp to ±range → scale → offset → round → output code
//! ```
//!
//! # Quick Start
//!
//! ```
//! use hexapod_actuator::prelude::*;
//!
//! let servo = presets::ax12();
//! assert_eq!(servo.scale_angle(0.0), 512);
//! ```

pub mod presets;
pub mod servo;

pub use servo::{ServoConfig, ServoProfile};

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::presets;
    pub use crate::servo::{ServoConfig, ServoProfile};
}
