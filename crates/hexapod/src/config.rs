use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use hexapod_actuator::servo::ServoConfig;
use hexapod_core::error::ConfigError;
use hexapod_gait::GaitSpec;
use hexapod_ik::LegGeometry;

// ---------------------------------------------------------------------------
// HexapodConfig
// ---------------------------------------------------------------------------

/// Complete robot configuration.
///
/// Every table and field is optional in TOML; missing values fall back to
/// the reference robot.
///
/// ```toml
/// [geometry]
/// offset_a = 50.0
/// len_ab = 80.0
/// len_bc = 150.0
///
/// [gait]
/// movement = [40.0, 60.0, 40.0]
/// height_scale = 0.05
///
/// [servo]
/// output_range = 1024
/// output_offset = 512
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HexapodConfig {
    /// Leg segment lengths and body footprint.
    #[serde(default)]
    pub geometry: LegGeometry,

    /// Walking trajectory.
    #[serde(default)]
    pub gait: GaitSpec,

    /// Joint angle to servo code mapping.
    #[serde(default)]
    pub servo: ServoConfig,
}

impl HexapodConfig {
    /// Validate configuration. Returns Err on invalid values.
    ///
    /// Only checks individual values; whether the gait fits the leg is
    /// decided by [`is_gait_valid`](hexapod_gait::is_gait_valid).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.geometry.validate()?;
        self.gait.validate()?;
        self.servo.validate()?;
        Ok(())
    }

    /// Load config from a TOML file.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`from_toml_str`](Self::from_toml_str).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading hexapod config");
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse config from TOML text.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Toml`] on malformed TOML or wrong field types,
    /// [`ConfigError::InvalidValue`] if a value fails validation.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        debug!(?config, "hexapod config parsed");
        Ok(config)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
