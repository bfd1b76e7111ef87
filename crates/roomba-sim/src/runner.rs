//! Fixed-tick loop driving a controller against the simulated robot.

use std::collections::BTreeMap;

use roomba::Controller;

use crate::world::{Pose, SimulatedRoomba};

/// Outcome of a simulation run.
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    pub ticks: u64,
    pub bumps: u64,
    pub distance: f64,
    pub final_pose: Pose,
    /// Seconds spent with each maneuver active.
    pub time_by_maneuver: BTreeMap<String, f64>,
}

/// Runs `ticks` sample periods of length `dt`.
///
/// Each tick the controller decides first, then the robot moves, so the
/// bumper the controller reads reflects the previous tick's motion.
pub fn run(
    controller: &mut dyn Controller<SimulatedRoomba>,
    robot: &mut SimulatedRoomba,
    ticks: u64,
    dt: f64,
) -> Report {
    let mut time_by_maneuver = BTreeMap::new();
    let mut previous: Option<String> = None;

    for tick in 0..ticks {
        controller.update(robot);
        robot.integrate(dt);

        let active = controller.active_maneuver().map(str::to_owned);
        if let Some(name) = &active {
            *time_by_maneuver.entry(name.clone()).or_insert(0.0) += dt;
        }
        if active != previous {
            tracing::debug!(tick, from = ?previous, to = ?active, "maneuver changed");
            previous = active;
        }
    }

    Report {
        ticks,
        bumps: robot.bumps(),
        distance: robot.distance(),
        final_pose: robot.pose(),
        time_by_maneuver,
    }
}
