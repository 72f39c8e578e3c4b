//! Per-tick control pipeline for all six legs.
//!
//! ```text
//! phase, intent ──► leg_position ──► body_transform ──► inverse_kinematics3 ──► mix
//!                   (per leg)        (if tilted)                               (servo codes)
//! ```

use tracing::{debug, info};

use hexapod_actuator::servo::ServoProfile;
use hexapod_core::error::HexapodError;
use hexapod_core::types::{JointAngles, LegId, MovementIntent, Position3};
use hexapod_gait::{LegPhaseOffset, is_gait_valid, leg_position};
use hexapod_ik::{BodyAttitude, body_transform, inverse_kinematics3};

use crate::config::HexapodConfig;

/// Joint angles and servo codes for one control tick, indexed by
/// [`LegId::index`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickOutput {
    /// `[alpha, beta, theta]` per leg, in radians.
    pub angles: [JointAngles; LegId::COUNT],
    /// Servo output codes in the same layout as `angles`.
    pub codes: [[i32; 3]; LegId::COUNT],
}

/// A validated robot, ready to be ticked.
#[derive(Clone, Debug)]
pub struct Hexapod {
    config: HexapodConfig,
    servo: ServoProfile,
}

impl Hexapod {
    /// Validate `config` and check that its gait stays inside the leg
    /// workspace.
    ///
    /// # Errors
    ///
    /// [`HexapodError::Config`] for out-of-range values,
    /// [`HexapodError::Gait`] when the gait cannot be walked by the leg.
    pub fn new(config: HexapodConfig) -> Result<Self, HexapodError> {
        config.validate()?;
        is_gait_valid(&config.geometry, &config.gait)?;

        info!(
            min_reach = config.geometry.min_reach(),
            max_reach = config.geometry.max_reach(),
            "hexapod ready"
        );

        Ok(Self {
            servo: config.servo.profile(),
            config,
        })
    }

    pub const fn config(&self) -> &HexapodConfig {
        &self.config
    }

    pub const fn servo(&self) -> &ServoProfile {
        &self.servo
    }

    /// Gait target for `leg` in its joint frame, before attitude
    /// compensation.
    pub fn leg_target(&self, leg: LegId, phase: f64, intent: &MovementIntent) -> Position3 {
        leg_position(&self.config.gait, leg, intent, phase)
    }

    /// Joint angles for `leg` at `phase`.
    ///
    /// # Errors
    ///
    /// [`HexapodError::Leg`] naming the leg whose target cannot be reached.
    pub fn solve_leg(
        &self,
        leg: LegId,
        phase: f64,
        intent: &MovementIntent,
        attitude: &BodyAttitude,
    ) -> Result<JointAngles, HexapodError> {
        let geometry = &self.config.geometry;
        let mut target = self.leg_target(leg, phase, intent);

        if !attitude.is_neutral() {
            // Attitude and mount offsets are in body axes, the target is not
            let layout = LegPhaseOffset::for_leg(leg);
            let mount = layout.mount_offset(geometry);
            let body = body_transform(attitude, &mount, &layout.to_body_axes(&target));
            target = layout.to_body_axes(&body);
        }

        inverse_kinematics3(geometry, &target).map_err(|source| {
            debug!(%leg, phase, %source, "leg target unreachable");
            HexapodError::Leg { leg, source }
        })
    }

    /// Solve all six legs and map the result to servo codes.
    ///
    /// # Errors
    ///
    /// The first leg failure, in [`LegId::ALL`] order. No partial output is
    /// produced.
    pub fn tick(
        &self,
        phase: f64,
        intent: &MovementIntent,
        attitude: &BodyAttitude,
    ) -> Result<TickOutput, HexapodError> {
        let mut angles = [JointAngles::default(); LegId::COUNT];
        for leg in LegId::ALL {
            angles[leg.index()] = self.solve_leg(leg, phase, intent, attitude)?;
        }

        let codes = self.servo.mix(&angles.map(JointAngles::to_array));
        Ok(TickOutput { angles, codes })
    }
}
