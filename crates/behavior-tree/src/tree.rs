//! Root holder driven once per tick.

use crate::{Behavior, Status};

/// A behavior tree: exactly one root node, no other state.
///
/// The host calls [`BehaviorTree::update`] once per sample period. Progress of
/// long-running actions lives inside the nodes themselves, so the tree can be
/// ticked indefinitely; when the root resolves, the next tick enters it again
/// and starts it over.
pub struct BehaviorTree<C: ?Sized> {
    root: Box<dyn Behavior<C>>,
    /// Whether the root has been entered for its current run.
    entered: bool,
}

impl<C: ?Sized> BehaviorTree<C> {
    pub fn new(root: Box<dyn Behavior<C>>) -> Self {
        Self {
            root,
            entered: false,
        }
    }

    /// Executes the root for one tick, discarding its status.
    pub fn update(&mut self, ctx: &mut C) {
        self.tick(ctx);
    }

    /// Executes the root for one tick and returns its status.
    pub fn tick(&mut self, ctx: &mut C) -> Status {
        if !self.entered {
            self.root.enter(ctx);
            self.entered = true;
        }

        let status = self.root.execute(ctx);
        if status.is_done() {
            self.entered = false;
            tracing::trace!(root = self.root.name(), ?status, "tree resolved");
        }
        status
    }

    pub fn root(&self) -> &dyn Behavior<C> {
        self.root.as_ref()
    }

    /// Names along the path that will be resumed next tick, root first.
    pub fn active_path(&self) -> Vec<&str> {
        let mut path = Vec::new();
        self.root.active_path(&mut path);
        path
    }
}
