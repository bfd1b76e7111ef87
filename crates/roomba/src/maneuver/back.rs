//! Short retreat after a collision.

use crate::maneuver::{Maneuver, Progress};
use crate::{RobotConfig, Velocity};

/// Reverses for `go_back_time`. Never fails.
#[derive(Clone, Debug)]
pub struct GoBack {
    config: RobotConfig,
    progress: Progress,
}

impl GoBack {
    pub fn new(config: RobotConfig) -> Self {
        Self {
            progress: Progress::new(config.sample_time),
            config,
        }
    }
}

impl Maneuver for GoBack {
    fn name(&self) -> &'static str {
        "GoBack"
    }

    fn progress(&self) -> &Progress {
        &self.progress
    }

    fn progress_mut(&mut self) -> &mut Progress {
        &mut self.progress
    }

    fn velocity(&self) -> Velocity {
        Velocity::new(self.config.backward_speed, 0.0)
    }

    fn is_complete(&self) -> bool {
        self.progress.elapsed() > self.config.go_back_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RecordingAgent;
    use crate::maneuver::test_config;
    use behavior_tree::Status;

    #[test]
    fn ignores_bumper_and_finishes() {
        let mut unit = GoBack::new(test_config());
        let mut agent = RecordingAgent::new();
        agent.set_bumper(true);
        unit.enter(&mut agent);

        for _ in 0..3 {
            assert_eq!(unit.step(&mut agent), Status::Running);
        }
        assert_eq!(unit.step(&mut agent), Status::Success);
        assert_eq!(agent.velocity(), Some(Velocity::new(-0.25, 0.0)));
    }
}
