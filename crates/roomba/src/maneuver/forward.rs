//! Straight-line cleaning pass.

use crate::maneuver::{Maneuver, Progress};
use crate::{RobotConfig, Velocity};

/// Drives straight ahead for `move_forward_time`; a bump aborts it.
#[derive(Clone, Debug)]
pub struct MoveForward {
    config: RobotConfig,
    progress: Progress,
}

impl MoveForward {
    pub fn new(config: RobotConfig) -> Self {
        Self {
            progress: Progress::new(config.sample_time),
            config,
        }
    }
}

impl Maneuver for MoveForward {
    fn name(&self) -> &'static str {
        "MoveForward"
    }

    fn progress(&self) -> &Progress {
        &self.progress
    }

    fn progress_mut(&mut self) -> &mut Progress {
        &mut self.progress
    }

    fn velocity(&self) -> Velocity {
        Velocity::new(self.config.forward_speed, 0.0)
    }

    fn is_complete(&self) -> bool {
        self.progress.elapsed() > self.config.move_forward_time
    }

    fn yields_to_bumper(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RecordingAgent;
    use crate::maneuver::test_config;
    use behavior_tree::Status;

    #[test]
    fn runs_until_duration_is_exceeded() {
        let mut unit = MoveForward::new(test_config());
        let mut agent = RecordingAgent::new();
        unit.enter(&mut agent);

        // 0.0, 0.25, 0.5, 0.75 and 1.0 are not past the 1.0 s duration.
        for _ in 0..5 {
            assert_eq!(unit.step(&mut agent), Status::Running);
        }
        assert_eq!(unit.step(&mut agent), Status::Success);
        assert!(agent.commands().iter().all(|v| *v == Velocity::new(0.5, 0.0)));
    }

    #[test]
    fn bump_fails_without_moving() {
        let mut unit = MoveForward::new(test_config());
        let mut agent = RecordingAgent::new();
        unit.enter(&mut agent);
        assert_eq!(unit.step(&mut agent), Status::Running);

        agent.set_bumper(true);
        assert_eq!(unit.step(&mut agent), Status::Failure);
        assert_eq!(unit.elapsed(), 0.25);
    }

    #[test]
    fn completion_wins_over_bump() {
        let mut unit = MoveForward::new(test_config());
        let mut agent = RecordingAgent::new();
        unit.enter(&mut agent);
        while unit.step(&mut agent).is_running() {}

        agent.set_bumper(true);
        assert_eq!(unit.step(&mut agent), Status::Success);
    }

    #[test]
    fn enter_resets_elapsed_time() {
        let mut unit = MoveForward::new(test_config());
        let mut agent = RecordingAgent::new();
        unit.enter(&mut agent);
        unit.step(&mut agent);
        unit.step(&mut agent);

        unit.enter(&mut agent);
        assert_eq!(unit.elapsed(), 0.0);
        assert_eq!(agent.velocity(), Some(Velocity::new(0.5, 0.0)));
    }
}
