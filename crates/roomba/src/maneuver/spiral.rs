//! Outward spiral covering open floor.

use crate::maneuver::{Maneuver, Progress};
use crate::{Agent, RobotConfig, Velocity};

/// Spirals outward for `move_in_spiral_time`; a bump aborts it and backs off.
///
/// The radius grows linearly with time, so the turn rate
/// `forward_speed / (initial_radius_spiral + spiral_factor * t)` keeps falling.
#[derive(Clone, Debug)]
pub struct MoveInSpiral {
    config: RobotConfig,
    progress: Progress,
}

impl MoveInSpiral {
    pub fn new(config: RobotConfig) -> Self {
        Self {
            progress: Progress::new(config.sample_time),
            config,
        }
    }

    /// Current spiral radius in metres.
    pub fn radius(&self) -> f64 {
        self.config.initial_radius_spiral + self.config.spiral_factor * self.progress.elapsed()
    }
}

impl Maneuver for MoveInSpiral {
    fn name(&self) -> &'static str {
        "MoveInSpiral"
    }

    fn progress(&self) -> &Progress {
        &self.progress
    }

    fn progress_mut(&mut self) -> &mut Progress {
        &mut self.progress
    }

    fn velocity(&self) -> Velocity {
        let speed = self.config.forward_speed;
        Velocity::new(speed, speed / self.radius())
    }

    fn is_complete(&self) -> bool {
        self.progress.elapsed() > self.config.move_in_spiral_time
    }

    fn yields_to_bumper(&self) -> bool {
        true
    }

    fn on_bump<A: Agent + ?Sized>(&self, agent: &mut A) {
        agent.set_velocity(self.config.backward_speed, 0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RecordingAgent;
    use crate::maneuver::test_config;
    use behavior_tree::Status;

    #[test]
    fn turn_rate_falls_as_radius_grows() {
        let mut unit = MoveInSpiral::new(test_config());
        let mut agent = RecordingAgent::new();

        unit.enter(&mut agent);
        assert_eq!(agent.velocity(), Some(Velocity::new(0.5, 2.0)));

        unit.step(&mut agent);
        unit.step(&mut agent);
        unit.step(&mut agent);
        // Commanded at t = 0.5 s: radius 0.25 + 0.5 * 0.5 = 0.5.
        assert_eq!(agent.velocity(), Some(Velocity::new(0.5, 1.0)));
    }

    #[test]
    fn bump_commands_pure_reverse_and_fails() {
        let mut unit = MoveInSpiral::new(test_config());
        let mut agent = RecordingAgent::new();
        unit.enter(&mut agent);
        unit.step(&mut agent);

        agent.set_bumper(true);
        assert_eq!(unit.step(&mut agent), Status::Failure);
        assert_eq!(agent.velocity(), Some(Velocity::new(-0.25, 0.0)));
    }

    #[test]
    fn succeeds_after_spiral_time() {
        let mut unit = MoveInSpiral::new(test_config());
        let mut agent = RecordingAgent::new();
        unit.enter(&mut agent);

        let mut running = 0;
        while unit.step(&mut agent).is_running() {
            running += 1;
        }
        // Elapsed 0.0 through 2.0 inclusive in 0.25 s steps.
        assert_eq!(running, 9);
        assert!(unit.is_complete());
    }
}
