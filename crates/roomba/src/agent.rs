//! Capabilities the controllers need from the robot.

/// Robot actuation and sensing.
///
/// Implemented by the host (hardware driver or simulator). Commands take
/// effect immediately and persist until overwritten; sensor reads are polled
/// and never block.
pub trait Agent {
    /// Commands linear (m/s) and angular (rad/s) speed.
    fn set_velocity(&mut self, linear: f64, angular: f64);

    /// Returns `true` while a frontal collision is detected.
    fn bumper_state(&self) -> bool;
}

impl<A: Agent + ?Sized> Agent for &mut A {
    fn set_velocity(&mut self, linear: f64, angular: f64) {
        (**self).set_velocity(linear, angular)
    }

    fn bumper_state(&self) -> bool {
        (**self).bumper_state()
    }
}

/// A velocity command.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Velocity {
    pub linear: f64,
    pub angular: f64,
}

impl Velocity {
    pub const fn new(linear: f64, angular: f64) -> Self {
        Self { linear, angular }
    }
}

/// Agent that remembers every command and reports a settable bumper.
///
/// Useful for replaying controllers without a robot attached.
#[derive(Clone, Debug, Default)]
pub struct RecordingAgent {
    bumper: bool,
    commands: Vec<Velocity>,
}

impl RecordingAgent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_bumper(&mut self, pressed: bool) {
        self.bumper = pressed;
    }

    /// Most recent command, if any was issued.
    pub fn velocity(&self) -> Option<Velocity> {
        self.commands.last().copied()
    }

    pub fn commands(&self) -> &[Velocity] {
        &self.commands
    }

    /// Forgets recorded commands; the bumper is left as is.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Agent for RecordingAgent {
    fn set_velocity(&mut self, linear: f64, angular: f64) {
        self.commands.push(Velocity::new(linear, angular));
    }

    fn bumper_state(&self) -> bool {
        self.bumper
    }
}
