//! Reactive control for a bumper-only cleaning robot.
//!
//! The robot alternates between cleaning passes (straight line, then an
//! outward spiral) and collision recovery (back off, then turn to a random
//! heading). The same four maneuvers are driven two ways:
//!
//! - [`RoombaBehaviorTree`]: composed from `Sequence`/`Selector` nodes that
//!   resume long maneuvers across ticks
//! - [`RoombaStateMachine`]: explicit states with hard-wired guards
//!
//! Both implement [`Controller`], so the host loop only needs an [`Agent`]
//! and a fixed tick.
//!
//! # Architecture
//!
//! - [`agent`]: actuation/sensing capability implemented by the host
//! - [`config`]: tuning constants ([`RobotConfig`])
//! - [`angle`]: random rotation targets ([`AngleSource`])
//! - [`maneuver`]: the shared maneuvers
//! - [`bt`], [`fsm`]: the two controllers

pub mod agent;
pub mod angle;
pub mod bt;
pub mod config;
pub mod controller;
pub mod error;
pub mod fsm;
pub mod maneuver;

pub use agent::{Agent, RecordingAgent, Velocity};
pub use angle::{AngleSource, FixedAngles, RandomAngles};
pub use bt::RoombaBehaviorTree;
pub use config::RobotConfig;
pub use controller::{Controller, Engine};
pub use error::ConfigError;
pub use fsm::{RoombaState, RoombaStateMachine};
pub use maneuver::{GoBack, Maneuver, ManeuverKit, MoveForward, MoveInSpiral, Rotate};
