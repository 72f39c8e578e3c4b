//! Reference robot configurations.

use nalgebra::Vector3;

use hexapod_actuator::servo::ServoConfig;
use hexapod_gait::GaitSpec;
use hexapod_ik::LegGeometry;

/// Full-size leg on a 140 x 300 body, matching the crate defaults.
pub fn reference_leg() -> LegGeometry {
    LegGeometry::default()
}

/// Small bench leg (20 / 80 / 100) on a 100 x 200 body.
///
/// Short enough that hand-computed expectations stay readable.
pub fn bench_leg() -> LegGeometry {
    LegGeometry {
        offset_a: 20.0,
        len_ab: 80.0,
        len_bc: 100.0,
        width: 100.0,
        length: 200.0,
    }
}

/// Gait that walks comfortably inside [`reference_leg`]'s workspace.
pub fn reference_gait() -> GaitSpec {
    GaitSpec::new(
        Vector3::new(40.0, 60.0, 40.0),
        Vector3::new(150.0, 0.0, -80.0),
        0.05,
    )
}

/// Geometry, gait and servo settings of the reference robot.
pub fn default_config_parts() -> (LegGeometry, GaitSpec, ServoConfig) {
    (reference_leg(), reference_gait(), ServoConfig::default())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
