//! The cleaning robot as a finite state machine.
//!
//! ```text
//! MoveForward  --time-->   MoveInSpiral
//! MoveForward  --bumper--> GoBack
//! MoveInSpiral --time-->   MoveForward
//! MoveInSpiral --bumper--> GoBack
//! GoBack       --time-->   Rotate
//! Rotate       --angle-->  MoveForward
//! ```
//!
//! Time guards are checked before the bumper. Every transition builds a fresh
//! state whose maneuver starts from zero elapsed time.

use state_machine::{FiniteStateMachine, State};

use crate::maneuver::{GoBack, Maneuver, ManeuverKit, MoveForward, MoveInSpiral, Rotate};
use crate::{Agent, RobotConfig};

/// What a state sees during a tick: the robot and the kit for building successors.
pub struct Cockpit<'a, A: ?Sized> {
    pub agent: &'a mut A,
    pub kit: &'a ManeuverKit,
}

/// The active state; each variant owns the progress of its maneuver.
#[derive(Clone, Debug)]
pub enum RoombaState {
    MoveForward(MoveForward),
    MoveInSpiral(MoveInSpiral),
    GoBack(GoBack),
    Rotate(Rotate),
}

impl RoombaState {
    pub fn name(&self) -> &'static str {
        match self {
            RoombaState::MoveForward(unit) => unit.name(),
            RoombaState::MoveInSpiral(unit) => unit.name(),
            RoombaState::GoBack(unit) => unit.name(),
            RoombaState::Rotate(unit) => unit.name(),
        }
    }

    /// Seconds spent in this state.
    pub fn elapsed(&self) -> f64 {
        match self {
            RoombaState::MoveForward(unit) => unit.elapsed(),
            RoombaState::MoveInSpiral(unit) => unit.elapsed(),
            RoombaState::GoBack(unit) => unit.elapsed(),
            RoombaState::Rotate(unit) => unit.elapsed(),
        }
    }

    fn successor<A: Agent + ?Sized>(&self, agent: &A, kit: &ManeuverKit) -> Option<Self> {
        match self {
            RoombaState::MoveForward(unit) => {
                if unit.is_complete() {
                    Some(RoombaState::MoveInSpiral(kit.move_in_spiral()))
                } else if agent.bumper_state() {
                    Some(RoombaState::GoBack(kit.go_back()))
                } else {
                    None
                }
            }
            RoombaState::MoveInSpiral(unit) => {
                if unit.is_complete() {
                    Some(RoombaState::MoveForward(kit.move_forward()))
                } else if agent.bumper_state() {
                    Some(RoombaState::GoBack(kit.go_back()))
                } else {
                    None
                }
            }
            RoombaState::GoBack(unit) => unit
                .is_complete()
                .then(|| RoombaState::Rotate(kit.rotate())),
            RoombaState::Rotate(unit) => unit
                .is_complete()
                .then(|| RoombaState::MoveForward(kit.move_forward())),
        }
    }
}

fn run<M: Maneuver, A: Agent + ?Sized>(unit: &mut M, agent: &mut A) {
    unit.drive(agent);
    unit.advance();
}

impl<'a, A: Agent + ?Sized> State<Cockpit<'a, A>> for RoombaState {
    fn name(&self) -> &str {
        RoombaState::name(self)
    }

    fn check_transition(&self, cockpit: &mut Cockpit<'a, A>) -> Option<Self> {
        self.successor(&*cockpit.agent, cockpit.kit)
    }

    fn execute(&mut self, cockpit: &mut Cockpit<'a, A>) {
        match self {
            RoombaState::MoveForward(unit) => run(unit, &mut *cockpit.agent),
            RoombaState::MoveInSpiral(unit) => run(unit, &mut *cockpit.agent),
            RoombaState::GoBack(unit) => run(unit, &mut *cockpit.agent),
            RoombaState::Rotate(unit) => run(unit, &mut *cockpit.agent),
        }
    }
}

/// State machine controller for the cleaning robot.
#[derive(Clone, Debug)]
pub struct RoombaStateMachine {
    fsm: FiniteStateMachine<RoombaState>,
    kit: ManeuverKit,
}

impl RoombaStateMachine {
    /// Starts in a fresh `MoveForward` state.
    pub fn new(kit: ManeuverKit) -> Self {
        let fsm = FiniteStateMachine::new(RoombaState::MoveForward(kit.move_forward()));
        Self { fsm, kit }
    }

    /// Runs one tick.
    pub fn update<A: Agent + ?Sized>(&mut self, agent: &mut A) {
        let mut cockpit = Cockpit {
            agent,
            kit: &self.kit,
        };
        self.fsm.update(&mut cockpit);
    }

    pub fn state(&self) -> &RoombaState {
        self.fsm.state()
    }

    pub fn transitions(&self) -> u64 {
        self.fsm.transitions()
    }

    pub fn config(&self) -> &RobotConfig {
        self.kit.config()
    }
}
