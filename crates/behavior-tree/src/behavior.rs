//! Core behavior trait.
//!
//! This module defines the [`Behavior`] trait, which is the fundamental
//! abstraction for all behavior tree nodes. The trait is generic over a
//! context type `C` (usually the agent being controlled), so the same engine
//! can drive any robot that exposes the capabilities its leaves need.

use crate::Status;

/// A behavior tree node that is executed once per tick against a context.
///
/// Nodes keep their own progress between ticks, which is why both methods take
/// `&mut self`. A node is built once and reused for the lifetime of the tree.
pub trait Behavior<C: ?Sized>: Send + Sync {
    /// Diagnostic name of this node.
    fn name(&self) -> &str;

    /// Called exactly once before the first `execute` after the node becomes
    /// active. Resets any progress kept from a previous activation.
    fn enter(&mut self, ctx: &mut C);

    /// Runs one tick of this node.
    ///
    /// # Returns
    ///
    /// - `Status::Success` if the behavior succeeded
    /// - `Status::Failure` if the behavior failed
    /// - `Status::Running` if it must be executed again next tick
    fn execute(&mut self, ctx: &mut C) -> Status;

    /// Name of the composite that owns this node, if any.
    ///
    /// Diagnostics only; control never flows through the parent.
    fn parent(&self) -> Option<&str> {
        None
    }

    /// Records the owning composite's name. Nodes that don't track their
    /// parent may ignore it.
    fn set_parent(&mut self, _parent: &str) {}

    /// Appends the names along the currently running path, starting with this
    /// node. Leaves only push their own name.
    fn active_path<'a>(&'a self, path: &mut Vec<&'a str>) {
        path.push(self.name());
    }
}

/// Blanket implementation for boxed behaviors.
///
/// This allows `Box<dyn Behavior<C>>` to also implement `Behavior<C>`,
/// enabling dynamic dispatch and heterogeneous collections of nodes.
impl<C: ?Sized> Behavior<C> for Box<dyn Behavior<C>> {
    #[inline]
    fn name(&self) -> &str {
        (**self).name()
    }

    #[inline]
    fn enter(&mut self, ctx: &mut C) {
        (**self).enter(ctx)
    }

    #[inline]
    fn execute(&mut self, ctx: &mut C) -> Status {
        (**self).execute(ctx)
    }

    #[inline]
    fn parent(&self) -> Option<&str> {
        (**self).parent()
    }

    #[inline]
    fn set_parent(&mut self, parent: &str) {
        (**self).set_parent(parent)
    }

    #[inline]
    fn active_path<'a>(&'a self, path: &mut Vec<&'a str>) {
        (**self).active_path(path)
    }
}
