//! Angle and phase conversion helpers.
//!
//! Scalar angles in `-1..=1` stand for `-π..=π`. Gait phases use the same
//! scalar convention, with one walking cycle spanning `[-1, 1)`.

use std::f64::consts::PI;

pub fn deg_to_rad(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

pub fn rad_to_deg(radians: f64) -> f64 {
    radians * 180.0 / PI
}

pub fn rad_to_scalar(radians: f64) -> f64 {
    radians / PI
}

pub fn scalar_to_rad(scalar: f64) -> f64 {
    scalar * PI
}

/// Fold any real phase into one walking cycle `[-1, 1)`.
pub fn wrap_phase(phase: f64) -> f64 {
    let wrapped = (phase + 1.0).rem_euclid(2.0) - 1.0;
    // rem_euclid can round up to the modulus for tiny negative inputs
    if wrapped >= 1.0 { -1.0 } else { wrapped }
}

/// Limit `value` to `[min, max]`. Does not panic when `min > max`.
pub fn limit_range<T: PartialOrd>(min: T, max: T, value: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}
