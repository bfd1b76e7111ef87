//! Headless simulator for the cleaning robot controllers.
//!
//! Plays the parts the controllers leave to the host: a robot with a bumper
//! ([`world::SimulatedRoomba`]) and a fixed-tick loop ([`runner::run`]).

pub mod runner;
pub mod world;

pub use runner::{Report, run};
pub use world::{Pose, Room, SimulatedRoomba};
