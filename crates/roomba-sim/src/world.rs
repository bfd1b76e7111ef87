//! Kinematic robot in an empty rectangular room.

use std::f64::consts::PI;

use roomba::{Agent, Velocity};

/// Room dimensions in metres; the origin is the lower-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Room {
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pose {
    pub x: f64,
    pub y: f64,
    /// Heading in (−π, π].
    pub heading: f64,
}

/// Unicycle-model robot with a single frontal bumper.
///
/// Commands persist until overwritten. [`SimulatedRoomba::integrate`] moves
/// the robot; driving forward into a wall stops it at the wall and presses
/// the bumper until a later step moves freely.
#[derive(Clone, Debug)]
pub struct SimulatedRoomba {
    room: Room,
    radius: f64,
    pose: Pose,
    command: Velocity,
    bumper: bool,
    bumps: u64,
    distance: f64,
}

impl SimulatedRoomba {
    /// Places the robot in the centre of the room, facing +x.
    pub fn new(room: Room, radius: f64) -> Self {
        Self {
            room,
            radius,
            pose: Pose {
                x: room.width / 2.0,
                y: room.height / 2.0,
                heading: 0.0,
            },
            command: Velocity::default(),
            bumper: false,
            bumps: 0,
            distance: 0.0,
        }
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    pub fn command(&self) -> Velocity {
        self.command
    }

    /// Number of times the bumper went from released to pressed.
    pub fn bumps(&self) -> u64 {
        self.bumps
    }

    /// Path length actually travelled.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Advances the pose by `dt` seconds under the current command.
    pub fn integrate(&mut self, dt: f64) {
        let Velocity { linear, angular } = self.command;
        let heading = wrap_angle(self.pose.heading + angular * dt);

        let target_x = self.pose.x + linear * heading.cos() * dt;
        let target_y = self.pose.y + linear * heading.sin() * dt;
        let x = target_x.clamp(self.radius, self.room.width - self.radius);
        let y = target_y.clamp(self.radius, self.room.height - self.radius);
        let blocked = x != target_x || y != target_y;

        let pressed = blocked && linear > 0.0;
        if pressed && !self.bumper {
            self.bumps += 1;
            tracing::debug!(x, y, "bumper pressed");
        }
        self.bumper = pressed;

        self.distance += (x - self.pose.x).hypot(y - self.pose.y);
        self.pose = Pose { x, y, heading };
    }
}

impl Agent for SimulatedRoomba {
    fn set_velocity(&mut self, linear: f64, angular: f64) {
        self.command = Velocity::new(linear, angular);
    }

    fn bumper_state(&self) -> bool {
        self.bumper
    }
}

fn wrap_angle(angle: f64) -> f64 {
    let wrapped = (angle + PI).rem_euclid(2.0 * PI) - PI;
    if wrapped == -PI { PI } else { wrapped }
}
