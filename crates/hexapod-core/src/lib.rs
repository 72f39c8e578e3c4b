// hexapod-core: vector aliases, joint angle types, leg identifiers, angle helpers and errors.

pub mod angle;
pub mod error;
pub mod types;

pub mod prelude {
    pub use crate::angle::{
        deg_to_rad, limit_range, rad_to_deg, rad_to_scalar, scalar_to_rad, wrap_phase,
    };
    pub use crate::error::{ConfigError, GaitError, HexapodError, KinematicsError};
    pub use crate::types::{
        JointAngles, LegId, MovementAxis, MovementIntent, PlanarAngles, Position2, Position3,
    };
}
