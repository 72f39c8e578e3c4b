//! Linear, saturating servo output mapping.
//!
//! # Scale Convention
//!
//! `scale = range_rads / output_range` (radians per output code):
//! - Output code = `round(angle / scale + output_offset)`.
//! - Angles beyond `±range_rads` saturate; that is expected, not an error.

use serde::{Deserialize, Serialize};

use hexapod_core::angle::{deg_to_rad, limit_range};
use hexapod_core::error::ConfigError;

// ---------------------------------------------------------------------------
// ServoProfile
// ---------------------------------------------------------------------------

/// Maps joint angles onto a servo's integer output range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ServoProfile {
    range_rads: f64,
    output_range: i32,
    output_offset: i32,
    // Radians per output code.
    scale: f64,
}

impl ServoProfile {
    /// New profile covering `±range_rads` with `output_range` codes per
    /// `range_rads`, centred on `output_offset`.
    pub fn new(range_rads: f64, output_range: i32, output_offset: i32) -> Self {
        Self {
            range_rads,
            output_range,
            output_offset,
            scale: range_rads / f64::from(output_range),
        }
    }

    pub const fn range_rads(&self) -> f64 {
        self.range_rads
    }

    pub const fn output_range(&self) -> i32 {
        self.output_range
    }

    pub const fn output_offset(&self) -> i32 {
        self.output_offset
    }

    /// Radians per output code.
    pub const fn scale(&self) -> f64 {
        self.scale
    }

    /// Convert a joint angle to an output code, saturating at `±range_rads`.
    ///
    /// NaN maps to the centre code.
    #[allow(clippy::cast_possible_truncation)]
    pub fn scale_angle(&self, angle: f64) -> i32 {
        if angle.is_nan() {
            return self.output_offset;
        }
        let limited = limit_range(-self.range_rads, self.range_rads, angle);
        (limited / self.scale + f64::from(self.output_offset)).round() as i32
    }

    /// Convert every joint angle of every leg.
    pub fn mix<const N: usize>(&self, angles: &[[f64; 3]; N]) -> [[i32; 3]; N] {
        (*angles).map(|joints| joints.map(|angle| self.scale_angle(angle)))
    }
}

impl From<ServoConfig> for ServoProfile {
    fn from(config: ServoConfig) -> Self {
        Self::new(config.range_rads, config.output_range, config.output_offset)
    }
}

// ---------------------------------------------------------------------------
// ServoConfig
// ---------------------------------------------------------------------------

fn default_range_rads() -> f64 {
    deg_to_rad(300.0)
}
const fn default_output_range() -> i32 {
    1024
}
const fn default_output_offset() -> i32 {
    512
}

/// Serializable servo settings, turned into a [`ServoProfile`] once
/// validated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ServoConfig {
    /// Servo range in radians.
    #[serde(default = "default_range_rads")]
    pub range_rads: f64,

    /// Output codes spanning `range_rads` (e.g. 1024).
    #[serde(default = "default_output_range")]
    pub output_range: i32,

    /// Output code for a zero angle (e.g. 512).
    #[serde(default = "default_output_offset")]
    pub output_offset: i32,
}

impl Default for ServoConfig {
    fn default() -> Self {
        Self {
            range_rads: default_range_rads(),
            output_range: default_output_range(),
            output_offset: default_output_offset(),
        }
    }
}

impl ServoConfig {
    /// Validate configuration. Returns Err on invalid values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.range_rads.is_finite() && self.range_rads > 0.0) {
            return Err(ConfigError::invalid(
                "servo.range_rads",
                format!("must be > 0, got {}", self.range_rads),
            ));
        }
        if self.output_range <= 0 {
            return Err(ConfigError::invalid(
                "servo.output_range",
                format!("must be > 0, got {}", self.output_range),
            ));
        }
        Ok(())
    }

    pub fn profile(&self) -> ServoProfile {
        ServoProfile::from(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn servo() -> ServoProfile {
        ServoProfile::new(PI, 1024, 512)
    }

    #[test]
    fn scale_is_range_over_output() {
        assert_relative_eq!(servo().scale(), PI / 1024.0);
    }

    #[test]
    fn center() {
        assert_eq!(servo().scale_angle(0.0), 512);
    }

    #[test]
    fn full_left() {
        assert_eq!(servo().scale_angle(PI / 2.0), 1024);
    }

    #[test]
    fn full_right() {
        assert_eq!(servo().scale_angle(-PI / 2.0), 0);
    }

    #[test]
    fn half_left() {
        assert_eq!(servo().scale_angle(PI / 4.0), 768);
    }

    #[test]
    fn half_right() {
        assert_eq!(servo().scale_angle(-PI / 4.0), 256);
    }

    #[test]
    fn saturates_beyond_range() {
        let s = servo();
        assert_eq!(s.scale_angle(10.0), s.scale_angle(PI));
        assert_eq!(s.scale_angle(-10.0), s.scale_angle(-PI));
        assert_eq!(s.scale_angle(PI), 1536);
        assert_eq!(s.scale_angle(-PI), -512);
    }

    #[test]
    fn nan_maps_to_center() {
        assert_eq!(servo().scale_angle(f64::NAN), 512);
    }

    #[test]
    fn rounds_to_nearest_code() {
        let s = servo();
        // 0.6 codes above centre rounds up, 0.4 rounds down
        assert_eq!(s.scale_angle(0.6 * s.scale()), 513);
        assert_eq!(s.scale_angle(0.4 * s.scale()), 512);
        assert_eq!(s.scale_angle(-0.6 * s.scale()), 511);
    }

    #[test]
    fn mix_maps_every_joint() {
        let s = servo();
        let mut angles = [[0.0; 3]; 6];
        angles[2] = [PI / 2.0, -PI / 2.0, PI / 4.0];
        angles[5] = [10.0, 0.0, -PI / 4.0];

        let out = s.mix(&angles);
        assert_eq!(out[0], [512, 512, 512]);
        assert_eq!(out[2], [1024, 0, 768]);
        assert_eq!(out[5], [1536, 512, 256]);
    }

    #[test]
    fn config_roundtrip_to_profile() {
        let config = ServoConfig::default();
        assert!(config.validate().is_ok());
        let profile = config.profile();
        assert_eq!(profile.output_range(), 1024);
        assert_eq!(profile.output_offset(), 512);
        assert_relative_eq!(profile.range_rads(), 300.0 * PI / 180.0, epsilon = 1e-12);
    }

    #[test]
    fn config_rejects_bad_ranges() {
        let config = ServoConfig {
            output_range: 0,
            ..ServoConfig::default()
        };
        assert!(config.validate().is_err());

        let config = ServoConfig {
            range_rads: -1.0,
            ..ServoConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
