//! Integration test: walk the reference robot through full gait cycles.
//!
//! Checks that:
//! 1. Every tick of a validated gait solves for all six legs
//! 2. Legs of one tripod move together, the two tripods alternate
//! 3. Solved joint angles reproduce the gait targets through forward kinematics
//! 4. A configuration loaded from TOML drives the same pipeline

use approx::assert_relative_eq;
use nalgebra::Vector3;

use hexapod::prelude::*;
use hexapod_gait::leg_position;
use hexapod_test_utils::{
    bench_leg, default_config_parts, random_reachable_target, reference_gait, seeded_rng,
};

const TICKS_PER_CYCLE: u32 = 64;

fn reference_robot() -> Hexapod {
    let (geometry, gait, servo) = default_config_parts();
    Hexapod::new(HexapodConfig {
        geometry,
        gait,
        servo,
    })
    .unwrap()
}

fn cycle_phases(cycles: u32) -> impl Iterator<Item = f64> {
    (0..cycles * TICKS_PER_CYCLE).map(|i| f64::from(i) * 2.0 / f64::from(TICKS_PER_CYCLE))
}

#[test]
fn walks_forward_for_several_cycles() {
    let robot = reference_robot();
    for phase in cycle_phases(3) {
        let out = robot
            .tick(phase, &MovementIntent::y(), &BodyAttitude::NEUTRAL)
            .unwrap_or_else(|e| panic!("tick failed at phase {phase}: {e}"));
        assert_eq!(out.codes, robot.servo().mix(&out.angles.map(JointAngles::to_array)));
    }
}

#[test]
fn walks_sideways_and_diagonally() {
    let robot = reference_robot();
    for intent in [
        MovementIntent::x(),
        -MovementIntent::x(),
        MovementIntent::new(0.7, 0.7, 0.0),
        MovementIntent::new(-0.5, -0.8, 0.0),
    ] {
        for phase in cycle_phases(1) {
            assert!(
                robot.tick(phase, &intent, &BodyAttitude::NEUTRAL).is_ok(),
                "intent {intent:?} failed at phase {phase}"
            );
        }
    }
}

#[test]
fn tripods_move_together_and_alternate() {
    let robot = reference_robot();
    let gait = reference_gait();
    let first = [LegId::LeftFront, LegId::RightMiddle, LegId::LeftRear];
    let second = [LegId::RightFront, LegId::LeftMiddle, LegId::RightRear];

    for phase in cycle_phases(1) {
        let out = robot
            .tick(phase, &MovementIntent::y(), &BodyAttitude::NEUTRAL)
            .unwrap();
        for group in [first, second] {
            let lead = Vector3::from(out.angles[group[0].index()].to_array());
            for leg in &group[1..] {
                let angles = Vector3::from(out.angles[leg.index()].to_array());
                assert_relative_eq!(angles, lead, epsilon = 1e-12);
            }
        }
    }

    // At phase 0 the first tripod stands while the second is lifted
    for leg in first {
        let target = leg_position(&gait, leg, &MovementIntent::y(), 0.0);
        assert_relative_eq!(target.z, gait.stance_height(), epsilon = 1e-12);
    }
    for leg in second {
        let target = leg_position(&gait, leg, &MovementIntent::y(), 0.0);
        assert_relative_eq!(target.z, gait.lift_height(), epsilon = 1e-12);
    }
}

#[test]
fn solved_angles_reach_gait_targets() {
    let robot = reference_robot();
    let geometry = robot.config().geometry;
    for phase in cycle_phases(1) {
        let out = robot
            .tick(phase, &MovementIntent::y(), &BodyAttitude::NEUTRAL)
            .unwrap();
        for leg in LegId::ALL {
            let target = robot.leg_target(leg, phase, &MovementIntent::y());
            let reached = forward_kinematics3(&geometry, &out.angles[leg.index()]);
            assert_relative_eq!(reached, target, epsilon = 1e-6);
        }
    }
}

#[test]
fn random_targets_round_trip_on_bench_leg() {
    let geometry = bench_leg();
    let mut rng = seeded_rng(2024);
    for _ in 0..500 {
        let target = random_reachable_target(&mut rng, &geometry);
        let angles = inverse_kinematics3(&geometry, &target).unwrap();
        assert_relative_eq!(forward_kinematics3(&geometry, &angles), target, epsilon = 1e-6);
    }
}

#[test]
fn valid_gait_sweeps_without_failures() {
    let (geometry, gait, _) = default_config_parts();
    assert!(is_gait_valid(&geometry, &gait).is_ok());
    for axis in MovementAxis::ALL {
        let samples = gait_sweep(&geometry, &gait, &axis.intent(), 200);
        assert!(samples.iter().all(|s| s.is_reachable()), "axis {axis}");
    }
}

#[test]
fn toml_config_drives_pipeline() {
    let config = HexapodConfig::from_toml_str(
        r"
        [geometry]
        offset_a = 50.0
        len_ab = 80.0
        len_bc = 150.0
        width = 140.0
        length = 300.0

        [gait]
        movement = [30.0, 40.0, 30.0]
        offset = [140.0, 0.0, -90.0]
        height_scale = 0.1

        [servo]
        range_rads = 1.5707963267948966
        output_range = 500
        output_offset = 1500
    ",
    )
    .unwrap();

    let robot = Hexapod::new(config).unwrap();
    let out = robot
        .tick(0.5, &MovementIntent::y(), &BodyAttitude::new(0.05, -0.05))
        .unwrap();
    for codes in out.codes {
        for code in codes {
            assert!((1000..=2000).contains(&code), "code {code} outside pulse range");
        }
    }
}
