//! Gait feasibility check.
//!
//! The reachable workspace boundary has no simple closed form against the
//! piecewise trajectory, so the check is an exhaustive phase sweep through
//! the inverse kinematics solver for each canonical movement axis.

use tracing::{debug, warn};

use hexapod_core::error::GaitError;
use hexapod_core::types::MovementAxis;
use hexapod_ik::{LegGeometry, inverse_kinematics3};

use crate::spec::GaitSpec;
use crate::trajectory::gait_position;

/// Number of phase samples checked per movement axis.
pub const VALIDATION_SAMPLES: usize = 100;

/// Phase span covered by the samples: two full walking cycles.
const VALIDATION_SPAN: f64 = 4.0;

/// Check that every point of the gait is reachable for pure-x and pure-y
/// movement.
///
/// # Errors
///
/// Returns [`GaitError::InvalidGaitAxis`] for the first sample that the leg
/// cannot reach, naming the movement axis, the phase and the kinematics
/// failure.
pub fn is_gait_valid(geometry: &LegGeometry, gait: &GaitSpec) -> Result<(), GaitError> {
    for axis in MovementAxis::ALL {
        let intent = axis.intent();

        for i in 0..VALIDATION_SAMPLES {
            let phase = sample_phase(i);
            let target = gait_position(gait, &intent, phase);

            if let Err(source) = inverse_kinematics3(geometry, &target) {
                warn!(%axis, phase, %source, "gait target outside leg workspace");
                return Err(GaitError::InvalidGaitAxis {
                    axis,
                    phase,
                    source,
                });
            }
        }

        debug!(%axis, samples = VALIDATION_SAMPLES, "gait axis reachable");
    }

    Ok(())
}

/// Evenly spaced phase for sample `i`, from `-2` to `2` inclusive.
#[allow(clippy::cast_precision_loss)]
fn sample_phase(i: usize) -> f64 {
    let step = VALIDATION_SPAN / (VALIDATION_SAMPLES - 1) as f64;
    (i as f64).mul_add(step, -VALIDATION_SPAN / 2.0)
}
