//! Common servo profiles based on real hobby robotics hardware.

use std::f64::consts::FRAC_PI_2;

use hexapod_core::angle::deg_to_rad;

use crate::servo::ServoProfile;

/// Serial bus servo (Dynamixel AX-12 class). 300° over a 10-bit position
/// register, centred on 512.
pub fn ax12() -> ServoProfile {
    ServoProfile::new(deg_to_rad(300.0), 1024, 512)
}

/// PWM hobby servo driven in microseconds. ±90° maps to 1000..2000 µs
/// around a 1500 µs centre.
pub fn hobby_servo() -> ServoProfile {
    ServoProfile::new(FRAC_PI_2, 500, 1500)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
