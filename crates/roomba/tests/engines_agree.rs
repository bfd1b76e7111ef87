//! Both controllers drive the robot along the same trajectory.

use std::sync::Arc;

use roomba::{
    Agent, Controller, Engine, FixedAngles, ManeuverKit, RecordingAgent, RobotConfig, Velocity,
};

fn config() -> RobotConfig {
    RobotConfig {
        sample_time: 0.25,
        forward_speed: 0.5,
        backward_speed: -0.25,
        angular_speed: 2.0,
        move_forward_time: 1.0,
        move_in_spiral_time: 2.0,
        go_back_time: 0.5,
        initial_radius_spiral: 0.25,
        spiral_factor: 0.5,
    }
}

/// Per-tick record of one run.
struct Run {
    /// Last velocity commanded on each tick that commanded anything.
    velocities: Vec<Velocity>,
    /// Maneuvers in the order they became active.
    maneuvers: Vec<String>,
    /// Ticks that ended with the rotation still running.
    rotating_ticks: usize,
}

fn drive(engine: Engine, ticks: usize, bumped_on: &[usize]) -> Run {
    drive_with(engine, vec![1.0], ticks, bumped_on)
}

fn drive_with(engine: Engine, angles: Vec<f64>, ticks: usize, bumped_on: &[usize]) -> Run {
    let kit = ManeuverKit::new(config(), Arc::new(FixedAngles::new(angles))).unwrap();
    let mut controller: Box<dyn Controller<RecordingAgent>> = engine.build(&kit);
    let mut agent = RecordingAgent::new();
    let mut run = Run {
        velocities: Vec::new(),
        maneuvers: Vec::new(),
        rotating_ticks: 0,
    };

    for tick in 0..ticks {
        agent.set_bumper(bumped_on.contains(&tick));
        agent.clear();
        controller.update(&mut agent);

        if let Some(velocity) = agent.velocity() {
            run.velocities.push(velocity);
        }
        if controller.active_maneuver() == Some("Rotate") {
            run.rotating_ticks += 1;
        }
        if let Some(active) = controller.active_maneuver() {
            if run.maneuvers.last().map(String::as_str) != Some(active) {
                run.maneuvers.push(active.to_owned());
            }
        }
    }
    run
}

fn assert_same_prefix(bt: &[Velocity], fsm: &[Velocity]) {
    let n = bt.len().min(fsm.len());
    assert!(n > 0);
    assert_eq!(bt[..n], fsm[..n]);
}

#[test]
fn bump_during_forward_recovers_the_same_way() {
    // Bumper fires on the third tick, well inside the 1 s forward pass.
    let bt = drive(Engine::BehaviorTree, 10, &[2]);
    let fsm = drive(Engine::StateMachine, 10, &[2]);

    let expected = ["MoveForward", "GoBack", "Rotate", "MoveForward"];
    assert_eq!(bt.maneuvers, expected);
    assert_eq!(fsm.maneuvers, expected);
    assert_same_prefix(&bt.velocities, &fsm.velocities);
}

#[test]
fn undisturbed_cleaning_alternates_forward_and_spiral() {
    let bt = drive(Engine::BehaviorTree, 16, &[]);
    let fsm = drive(Engine::StateMachine, 16, &[]);

    let expected = ["MoveForward", "MoveInSpiral", "MoveForward"];
    assert_eq!(bt.maneuvers, expected);
    assert_eq!(fsm.maneuvers, expected);
    assert_same_prefix(&bt.velocities, &fsm.velocities);
}

#[test]
fn bump_during_spiral_backs_off() {
    // Forward pass ends on tick 5; tick 7 is inside the spiral.
    let bt = drive(Engine::BehaviorTree, 12, &[7]);
    let fsm = drive(Engine::StateMachine, 12, &[7]);

    let expected = ["MoveForward", "MoveInSpiral", "GoBack", "Rotate"];
    assert_eq!(&bt.maneuvers[..4], expected);
    assert_eq!(&fsm.maneuvers[..4], expected);
    assert_same_prefix(&bt.velocities, &fsm.velocities);
}

#[test]
fn first_rotation_uses_first_sampled_angle() {
    // 0.5 rad at 2 rad/s takes two running ticks; 3.0 rad would take seven.
    let bt = drive_with(Engine::BehaviorTree, vec![0.5, 3.0], 40, &[1]);
    let fsm = drive_with(Engine::StateMachine, vec![0.5, 3.0], 40, &[1]);

    assert_eq!(bt.rotating_ticks, 2);
    assert_eq!(fsm.rotating_ticks, 2);
    assert_eq!(&bt.maneuvers[..3], ["MoveForward", "GoBack", "Rotate"]);
    assert_same_prefix(&bt.velocities, &fsm.velocities);
}

/// Agent whose bumper is pressed permanently.
struct Wall {
    last: Option<(f64, f64)>,
}

impl Agent for Wall {
    fn set_velocity(&mut self, linear: f64, angular: f64) {
        self.last = Some((linear, angular));
    }

    fn bumper_state(&self) -> bool {
        true
    }
}

#[test]
fn pinned_against_wall_keeps_recovering() {
    let kit = ManeuverKit::new(config(), Arc::new(FixedAngles::new(vec![0.5]))).unwrap();

    for engine in [Engine::BehaviorTree, Engine::StateMachine] {
        let mut controller = engine.build::<Wall>(&kit);
        let mut wall = Wall { last: None };
        let mut seen_rotate = false;

        for _ in 0..40 {
            controller.update(&mut wall);
            seen_rotate |= controller.active_maneuver() == Some("Rotate");
            assert_ne!(controller.active_maneuver(), Some("MoveInSpiral"));
        }

        assert!(seen_rotate, "{engine} never rotated");
        assert!(wall.last.is_some());
    }
}
