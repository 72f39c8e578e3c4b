use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use hexapod_core::error::ConfigError;
use hexapod_core::types::Position3;

// ---------------------------------------------------------------------------
// Serde default functions
// ---------------------------------------------------------------------------

fn default_movement() -> Position3 {
    Vector3::new(40.0, 60.0, 40.0)
}
fn default_offset() -> Position3 {
    Vector3::new(150.0, 0.0, -80.0)
}
const fn default_height_scale() -> f64 {
    0.05
}

// ---------------------------------------------------------------------------
// GaitSpec
// ---------------------------------------------------------------------------

/// Gait envelope for one leg, expressed in the leg's joint frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GaitSpec {
    /// Stride width (x), stride length (y) and lift height (z).
    #[serde(default = "default_movement")]
    pub movement: Position3,

    /// Resting foot position the stride oscillates around.
    #[serde(default = "default_offset")]
    pub offset: Position3,

    /// Fraction of the phase cycle spent blending between stance and lift
    /// height, in `(0, 1]`.
    #[serde(default = "default_height_scale")]
    pub height_scale: f64,
}

impl Default for GaitSpec {
    fn default() -> Self {
        Self {
            movement: default_movement(),
            offset: default_offset(),
            height_scale: default_height_scale(),
        }
    }
}

impl GaitSpec {
    pub const fn new(movement: Position3, offset: Position3, height_scale: f64) -> Self {
        Self {
            movement,
            offset,
            height_scale,
        }
    }

    /// Validate the gait. Returns Err on invalid values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.height_scale > 0.0 && self.height_scale <= 1.0) {
            return Err(ConfigError::invalid(
                "gait.height_scale",
                format!("must be in (0, 1], got {}", self.height_scale),
            ));
        }
        if !self.movement.iter().all(|v| v.is_finite()) {
            return Err(ConfigError::invalid("gait.movement", "must be finite"));
        }
        if !self.offset.iter().all(|v| v.is_finite()) {
            return Err(ConfigError::invalid("gait.offset", "must be finite"));
        }
        Ok(())
    }

    /// Foot height during stance.
    pub fn stance_height(&self) -> f64 {
        -self.movement.z / 2.0 + self.offset.z
    }

    /// Foot height at the top of the lift.
    pub fn lift_height(&self) -> f64 {
        self.movement.z / 2.0 + self.offset.z
    }
}
