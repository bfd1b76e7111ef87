//! The cleaning robot as a behavior tree.
//!
//! ```text
//! Root (Selector)
//! ├── Seq1 (Sequence)
//! │   ├── MoveForward
//! │   └── MoveInSpiral
//! └── Seq2 (Sequence)
//!     ├── GoBack
//!     └── Rotate
//! ```
//!
//! A bump fails `Seq1`; the root then falls back to `Seq2` within the same
//! tick. Once either sequence finishes, the next tick starts over at `Seq1`.

use behavior_tree::builder::{selector, sequence};
use behavior_tree::{Behavior, BehaviorTree, Status};

use crate::maneuver::{Maneuver, ManeuverKit};
use crate::{Agent, RobotConfig};

/// Adapts a [`Maneuver`] into a behavior tree leaf.
#[derive(Clone, Debug)]
pub struct Leaf<M> {
    unit: M,
    parent: Option<String>,
}

impl<M: Maneuver> Leaf<M> {
    pub fn new(unit: M) -> Self {
        Self { unit, parent: None }
    }

    pub fn unit(&self) -> &M {
        &self.unit
    }
}

impl<A, M> Behavior<A> for Leaf<M>
where
    A: Agent + ?Sized,
    M: Maneuver,
{
    fn name(&self) -> &str {
        self.unit.name()
    }

    fn enter(&mut self, agent: &mut A) {
        self.unit.enter(agent);
    }

    fn execute(&mut self, agent: &mut A) -> Status {
        self.unit.step(agent)
    }

    fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    fn set_parent(&mut self, parent: &str) {
        self.parent = Some(parent.to_owned());
    }
}

/// Boxes a maneuver as a leaf.
pub fn leaf<A, M>(unit: M) -> Box<dyn Behavior<A>>
where
    A: Agent + ?Sized + 'static,
    M: Maneuver + 'static,
{
    Box::new(Leaf::new(unit))
}

/// Builds the robot's tree from a kit of maneuvers.
pub fn roomba_tree<A>(kit: &ManeuverKit) -> Box<dyn Behavior<A>>
where
    A: Agent + ?Sized + 'static,
{
    selector(
        "Root",
        vec![
            sequence(
                "Seq1",
                vec![leaf(kit.move_forward()), leaf(kit.move_in_spiral())],
            ),
            sequence("Seq2", vec![leaf(kit.go_back()), leaf(kit.rotate_on_enter())]),
        ],
    )
}

/// Behavior tree controller for the cleaning robot.
pub struct RoombaBehaviorTree<A: ?Sized> {
    tree: BehaviorTree<A>,
    config: RobotConfig,
}

impl<A> RoombaBehaviorTree<A>
where
    A: Agent + ?Sized + 'static,
{
    pub fn new(kit: &ManeuverKit) -> Self {
        Self {
            tree: BehaviorTree::new(roomba_tree(kit)),
            config: *kit.config(),
        }
    }

    /// Runs one tick.
    pub fn update(&mut self, agent: &mut A) {
        self.tree.update(agent);
    }

    /// Runs one tick and returns the root status.
    pub fn tick(&mut self, agent: &mut A) -> Status {
        self.tree.tick(agent)
    }

    pub fn tree(&self) -> &BehaviorTree<A> {
        &self.tree
    }

    pub fn config(&self) -> &RobotConfig {
        &self.config
    }

    /// Leaf resumed next tick, or `None` if the root will start over.
    pub fn active_maneuver(&self) -> Option<&str> {
        let path = self.tree.active_path();
        if path.len() > 1 {
            path.last().copied()
        } else {
            None
        }
    }
}
