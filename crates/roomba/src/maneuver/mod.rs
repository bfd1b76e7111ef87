//! The four maneuvers shared by both controllers.
//!
//! Each maneuver is a self-contained timed or bumper-gated motion. The
//! behavior tree runs it through [`Maneuver::enter`] and [`Maneuver::step`];
//! the state machine drives the same type through [`Maneuver::drive`],
//! [`Maneuver::advance`] and [`Maneuver::is_complete`] from its own guards.

mod back;
mod forward;
mod rotate;
mod spiral;

use std::sync::Arc;

use behavior_tree::Status;

use crate::{Agent, AngleSource, ConfigError, RandomAngles, RobotConfig, Velocity};

pub use back::GoBack;
pub use forward::MoveForward;
pub use rotate::Rotate;
pub use spiral::MoveInSpiral;

/// Time spent in a maneuver since it was last entered.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Progress {
    elapsed: f64,
    sample_time: f64,
}

impl Progress {
    pub fn new(sample_time: f64) -> Self {
        Self {
            elapsed: 0.0,
            sample_time,
        }
    }

    /// Seconds since entry; never negative.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }

    /// Moves forward by one sample period.
    pub fn advance(&mut self) {
        self.elapsed += self.sample_time;
    }
}

/// A timed or bumper-gated motion.
pub trait Maneuver: Send + Sync {
    fn name(&self) -> &'static str;

    fn progress(&self) -> &Progress;

    fn progress_mut(&mut self) -> &mut Progress;

    /// Velocity for the current point in the maneuver.
    fn velocity(&self) -> Velocity;

    /// Whether the maneuver has run its course.
    fn is_complete(&self) -> bool;

    /// Whether a bumper hit aborts this maneuver.
    fn yields_to_bumper(&self) -> bool {
        false
    }

    /// Reaction when a bumper hit aborts the maneuver.
    fn on_bump<A: Agent + ?Sized>(&self, _agent: &mut A) {}

    /// Clears per-entry state. Overrides must still reset the progress.
    fn reset(&mut self) {
        self.progress_mut().reset();
    }

    fn elapsed(&self) -> f64 {
        self.progress().elapsed()
    }

    /// Starts (or restarts) the maneuver and commands its initial velocity.
    fn enter<A: Agent + ?Sized>(&mut self, agent: &mut A) {
        self.reset();
        self.drive(agent);
    }

    /// Commands the velocity for the current point in the maneuver.
    fn drive<A: Agent + ?Sized>(&self, agent: &mut A) {
        let Velocity { linear, angular } = self.velocity();
        agent.set_velocity(linear, angular);
    }

    fn advance(&mut self) {
        self.progress_mut().advance();
    }

    /// One tick: completion first, then the bumper, then drive and advance.
    fn step<A: Agent + ?Sized>(&mut self, agent: &mut A) -> Status {
        if self.is_complete() {
            tracing::debug!(maneuver = self.name(), elapsed = self.elapsed(), "maneuver complete");
            return Status::Success;
        }

        if self.yields_to_bumper() && agent.bumper_state() {
            tracing::debug!(maneuver = self.name(), elapsed = self.elapsed(), "bumper hit");
            self.on_bump(agent);
            return Status::Failure;
        }

        self.drive(agent);
        self.advance();
        Status::Running
    }
}

/// Builds fresh maneuvers from one config and one angle source.
#[derive(Clone, Debug)]
pub struct ManeuverKit {
    config: RobotConfig,
    angles: Arc<dyn AngleSource>,
}

impl ManeuverKit {
    /// Builds a kit after checking `config` with [`RobotConfig::validate`].
    pub fn new(config: RobotConfig, angles: Arc<dyn AngleSource>) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, angles })
    }

    /// Kit drawing rotation targets from an unseeded generator.
    pub fn with_random_angles(config: RobotConfig) -> Result<Self, ConfigError> {
        Self::new(config, Arc::new(RandomAngles::from_entropy()))
    }

    pub fn config(&self) -> &RobotConfig {
        &self.config
    }

    pub fn move_forward(&self) -> MoveForward {
        MoveForward::new(self.config)
    }

    pub fn move_in_spiral(&self) -> MoveInSpiral {
        MoveInSpiral::new(self.config)
    }

    pub fn go_back(&self) -> GoBack {
        GoBack::new(self.config)
    }

    /// Fresh rotation with a newly sampled target.
    pub fn rotate(&self) -> Rotate {
        Rotate::new(self.config, Arc::clone(&self.angles))
    }

    /// Rotation that draws its target only when entered. Long-lived leaves use
    /// this so building them consumes no angle.
    pub fn rotate_on_enter(&self) -> Rotate {
        Rotate::deferred(self.config, Arc::clone(&self.angles))
    }
}

/// Config with exactly representable values so tick counts are predictable.
#[cfg(test)]
pub(crate) fn test_config() -> RobotConfig {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_resets_to_zero() {
        let mut progress = Progress::new(0.25);
        progress.advance();
        progress.advance();
        assert_eq!(progress.elapsed(), 0.5);

        progress.reset();
        assert_eq!(progress.elapsed(), 0.0);
    }

    #[test]
    fn kit_rejects_degenerate_spiral() {
        let config = RobotConfig {
            initial_radius_spiral: 0.0,
            spiral_factor: 0.0,
            ..test_config()
        };
        let err = ManeuverKit::with_random_angles(config).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "initial_radius_spiral",
                ..
            }
        ));

        assert!(ManeuverKit::with_random_angles(test_config()).is_ok());
    }
}
