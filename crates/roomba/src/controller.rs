//! Common face of the two controllers so a host can swap them freely.

use crate::maneuver::ManeuverKit;
use crate::{Agent, RoombaBehaviorTree, RoombaStateMachine};

/// Which decision engine drives the robot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
pub enum Engine {
    #[strum(to_string = "bt", serialize = "behavior-tree")]
    BehaviorTree,
    #[strum(to_string = "fsm", serialize = "state-machine")]
    StateMachine,
}

impl Engine {
    /// Builds a controller of this kind from the kit.
    pub fn build<A>(self, kit: &ManeuverKit) -> Box<dyn Controller<A>>
    where
        A: Agent + ?Sized + 'static,
    {
        match self {
            Engine::BehaviorTree => Box::new(RoombaBehaviorTree::new(kit)),
            Engine::StateMachine => Box::new(RoombaStateMachine::new(kit.clone())),
        }
    }
}

/// A controller ticked once per sample period.
pub trait Controller<A: Agent + ?Sized>: Send + Sync {
    fn engine(&self) -> Engine;

    /// Runs one tick; all effects go through the agent.
    fn update(&mut self, agent: &mut A);

    /// Maneuver that will run next tick, if one is mid-execution.
    fn active_maneuver(&self) -> Option<&str>;
}

impl<A> Controller<A> for RoombaBehaviorTree<A>
where
    A: Agent + ?Sized + 'static,
{
    fn engine(&self) -> Engine {
        Engine::BehaviorTree
    }

    fn update(&mut self, agent: &mut A) {
        RoombaBehaviorTree::update(self, agent)
    }

    fn active_maneuver(&self) -> Option<&str> {
        RoombaBehaviorTree::active_maneuver(self)
    }
}

impl<A: Agent + ?Sized> Controller<A> for RoombaStateMachine {
    fn engine(&self) -> Engine {
        Engine::StateMachine
    }

    fn update(&mut self, agent: &mut A) {
        RoombaStateMachine::update(self, agent)
    }

    fn active_maneuver(&self) -> Option<&str> {
        Some(self.state().name())
    }
}
