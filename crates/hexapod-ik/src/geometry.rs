//! Per-leg hardware dimensions.
//!
//! A [`LegGeometry`] describes one leg: the horizontal offset between the
//! yaw and lift joints at the shoulder (`offset_a`), the femur length
//! (`len_ab`) and the foreleg length (`len_bc`). The optional body `width` and
//! `length` place the shoulders on the body for attitude compensation.

use serde::{Deserialize, Serialize};

use hexapod_core::error::ConfigError;

use crate::body::MountOffset;

// ---------------------------------------------------------------------------
// Serde default functions
// ---------------------------------------------------------------------------

const fn default_offset_a() -> f64 {
    50.0
}
const fn default_len_ab() -> f64 {
    80.0
}
const fn default_len_bc() -> f64 {
    150.0
}
const fn default_width() -> f64 {
    140.0
}
const fn default_length() -> f64 {
    300.0
}

// ---------------------------------------------------------------------------
// LegGeometry
// ---------------------------------------------------------------------------

/// Leg and body dimensions, all in the same length unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegGeometry {
    /// Distance between the planar (yaw) and vertical (lift) shoulder joints.
    #[serde(default = "default_offset_a")]
    pub offset_a: f64,

    /// Length of the upper leg (femur), joint A to joint B.
    #[serde(default = "default_len_ab")]
    pub len_ab: f64,

    /// Length of the foreleg, joint B to foot C.
    #[serde(default = "default_len_bc")]
    pub len_bc: f64,

    /// Body width between left and right shoulder joints.
    #[serde(default = "default_width")]
    pub width: f64,

    /// Body length between front and rear shoulder joints.
    #[serde(default = "default_length")]
    pub length: f64,
}

impl Default for LegGeometry {
    fn default() -> Self {
        Self {
            offset_a: default_offset_a(),
            len_ab: default_len_ab(),
            len_bc: default_len_bc(),
            width: default_width(),
            length: default_length(),
        }
    }
}

impl LegGeometry {
    /// Build a leg geometry with no body mounting dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a link length is not positive
    /// or `offset_a` is negative.
    pub fn new(offset_a: f64, len_ab: f64, len_bc: f64) -> Result<Self, ConfigError> {
        let geometry = Self {
            offset_a,
            len_ab,
            len_bc,
            width: 0.0,
            length: 0.0,
        };
        geometry.validate()?;
        Ok(geometry)
    }

    /// Set the body width and length used for mounting offsets.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if either dimension is negative.
    pub fn with_body(mut self, width: f64, length: f64) -> Result<Self, ConfigError> {
        self.width = width;
        self.length = length;
        self.validate()?;
        Ok(self)
    }

    /// Validate dimensions. Returns Err on invalid values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("geometry.len_ab", self.len_ab)?;
        positive("geometry.len_bc", self.len_bc)?;
        non_negative("geometry.offset_a", self.offset_a)?;
        non_negative("geometry.width", self.width)?;
        non_negative("geometry.length", self.length)?;
        Ok(())
    }

    /// Inner radius of the reachable annulus around the lift joint.
    pub fn min_reach(&self) -> f64 {
        (self.len_ab - self.len_bc).abs()
    }

    /// Outer radius of the reachable annulus around the lift joint.
    pub fn max_reach(&self) -> f64 {
        self.len_ab + self.len_bc
    }

    /// Whether a planar distance from the lift joint lies in the workspace.
    pub fn is_reachable(&self, len_ac: f64) -> bool {
        len_ac > 0.0 && (self.min_reach()..=self.max_reach()).contains(&len_ac)
    }

    /// Shoulder mounting offset from the body centre for a leg on the given
    /// side (`x_sign`) and end (`y_sign`) of the body.
    pub fn mount_offset(&self, x_sign: f64, y_sign: f64) -> MountOffset {
        MountOffset::new(x_sign * self.width / 2.0, y_sign * self.length / 2.0)
    }
}

fn positive(field: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("must be > 0, got {value}")))
    }
}

fn non_negative(field: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("must be >= 0, got {value}")))
    }
}
