//! In-place turn toward a random new heading.

use std::sync::Arc;

use crate::maneuver::{Maneuver, Progress};
use crate::{AngleSource, RobotConfig, Velocity};

/// Turns in place until the swept angle exceeds a random target. Never fails.
///
/// The turn direction is fixed by the sign of `angular_speed`; only the
/// magnitude of the target matters.
#[derive(Clone, Debug)]
pub struct Rotate {
    config: RobotConfig,
    progress: Progress,
    angles: Arc<dyn AngleSource>,
    /// Unset until the first sample.
    target_angle: Option<f64>,
}

impl Rotate {
    /// Creates the maneuver with a freshly sampled target.
    pub fn new(config: RobotConfig, angles: Arc<dyn AngleSource>) -> Self {
        let mut unit = Self::deferred(config, angles);
        unit.target_angle = Some(unit.angles.sample_angle());
        unit
    }

    /// Creates the maneuver without sampling; the target is drawn on
    /// [`Maneuver::enter`].
    pub fn deferred(config: RobotConfig, angles: Arc<dyn AngleSource>) -> Self {
        Self {
            progress: Progress::new(config.sample_time),
            config,
            angles,
            target_angle: None,
        }
    }

    /// Sampled target in (−π, π], if one has been drawn.
    pub fn target_angle(&self) -> Option<f64> {
        self.target_angle
    }

    /// Angle swept so far.
    pub fn swept_angle(&self) -> f64 {
        self.config.angular_speed * self.progress.elapsed()
    }
}

impl Maneuver for Rotate {
    fn name(&self) -> &'static str {
        "Rotate"
    }

    fn progress(&self) -> &Progress {
        &self.progress
    }

    fn progress_mut(&mut self) -> &mut Progress {
        &mut self.progress
    }

    fn velocity(&self) -> Velocity {
        Velocity::new(0.0, self.config.angular_speed)
    }

    fn is_complete(&self) -> bool {
        self.target_angle
            .is_some_and(|target| self.swept_angle() > target.abs())
    }

    fn reset(&mut self) {
        self.progress.reset();
        self.target_angle = Some(self.angles.sample_angle());
    }
}
