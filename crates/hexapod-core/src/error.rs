use thiserror::Error;

use crate::types::{LegId, MovementAxis};

/// Top-level error type for the hexapod crates.
#[derive(Debug, Error)]
pub enum HexapodError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Kinematics error: {0}")]
    Kinematics(#[from] KinematicsError),

    #[error("Gait error: {0}")]
    Gait(#[from] GaitError),

    #[error("Leg {leg} failed: {source}")]
    Leg {
        leg: LegId,
        #[source]
        source: KinematicsError,
    },
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl ConfigError {
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Inverse kinematics failures.
///
/// Copy + plain data for cheap propagation on the per-tick path.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum KinematicsError {
    #[error("Target unreachable: distance {distance} outside workspace [{min}, {max}]")]
    Unreachable { distance: f64, min: f64, max: f64 },

    #[error("Degenerate input: target lies on the shoulder yaw axis")]
    DegenerateInput,
}

/// Gait feasibility failures.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GaitError {
    #[error("Gait unreachable along {axis} axis at phase {phase}: {source}")]
    InvalidGaitAxis {
        axis: MovementAxis,
        phase: f64,
        #[source]
        source: KinematicsError,
    },
}

impl GaitError {
    /// Movement axis that failed validation.
    pub const fn axis(&self) -> MovementAxis {
        match self {
            Self::InvalidGaitAxis { axis, .. } => *axis,
        }
    }
}
