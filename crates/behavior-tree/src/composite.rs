//! Composite behavior nodes.
//!
//! Composite nodes control the execution flow of multiple child behaviors.
//! This module provides the fundamental building blocks for creating complex
//! decision trees: [`Sequence`] (AND logic) and [`Selector`] (OR logic).
//!
//! Both remember which child is still `Running` so the next tick resumes it
//! instead of starting over from the first child.

use crate::{Behavior, Status};

/// Ordered children plus the resumption cursor shared by every composite.
struct Children<C: ?Sized> {
    nodes: Vec<Box<dyn Behavior<C>>>,
    /// Index of the child that returned `Running` on the previous tick.
    running: Option<usize>,
}

impl<C: ?Sized> Children<C> {
    fn new(owner: &str, kind: &str, mut nodes: Vec<Box<dyn Behavior<C>>>) -> Self {
        assert!(!nodes.is_empty(), "{kind} must have at least one child");
        for node in &mut nodes {
            node.set_parent(owner);
        }
        Self {
            nodes,
            running: None,
        }
    }

    fn push(&mut self, owner: &str, mut node: Box<dyn Behavior<C>>) {
        node.set_parent(owner);
        self.nodes.push(node);
    }

    /// Runs children from the cursor until one resolves the composite.
    ///
    /// A child returning `advance_on` hands control to its next sibling within
    /// the same tick; any other resolved status ends the composite with that
    /// status, as does `advance_on` from the last child.
    fn run(&mut self, owner: &str, ctx: &mut C, advance_on: Status) -> Status {
        let mut index = match self.running {
            Some(index) => index,
            None => {
                self.enter_child(owner, 0, ctx);
                0
            }
        };

        loop {
            let status = self.nodes[index].execute(ctx);

            if status.is_running() {
                self.running = Some(index);
                return Status::Running;
            }

            if status != advance_on || index + 1 == self.nodes.len() {
                tracing::trace!(node = owner, ?status, "composite resolved");
                self.running = None;
                return status;
            }

            index += 1;
            self.enter_child(owner, index, ctx);
        }
    }

    fn enter_child(&mut self, owner: &str, index: usize, ctx: &mut C) {
        let child = &mut self.nodes[index];
        tracing::trace!(node = owner, child = child.name(), "entering child");
        child.enter(ctx);
        self.running = Some(index);
    }

    fn active_path<'a>(&'a self, path: &mut Vec<&'a str>) {
        if let Some(index) = self.running {
            self.nodes[index].active_path(path);
        }
    }
}

/// Executes child behaviors in sequence until one fails.
///
/// # Semantics
///
/// A `Sequence` node evaluates its children from left to right:
/// - If a child returns `Failure`, the sequence **stops immediately** and returns `Failure`
/// - If a child returns `Running`, the sequence returns `Running` and resumes that child next tick
/// - If a child returns `Success`, the sequence **enters the next child in the same tick**
/// - If all children return `Success`, the sequence returns `Success`
///
/// This is analogous to a short-circuited logical AND (&&) operation.
pub struct Sequence<C: ?Sized> {
    name: String,
    parent: Option<String>,
    children: Children<C>,
}

impl<C: ?Sized> Sequence<C> {
    /// Creates a new sequence with the given child behaviors.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty. A sequence with no children is
    /// meaningless and likely indicates a programming error.
    pub fn new(name: impl Into<String>, children: Vec<Box<dyn Behavior<C>>>) -> Self {
        let name = name.into();
        let children = Children::new(&name, "Sequence", children);
        Self {
            name,
            parent: None,
            children,
        }
    }

    /// Appends a child; it runs after every existing child.
    pub fn add_child(&mut self, child: Box<dyn Behavior<C>>) {
        self.children.push(&self.name, child);
    }

    /// Index of the child resumed on the next tick, if the sequence is mid-execution.
    pub fn running_child(&self) -> Option<usize> {
        self.children.running
    }

    pub fn len(&self) -> usize {
        self.children.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.nodes.is_empty()
    }
}

impl<C: ?Sized> Behavior<C> for Sequence<C> {
    fn name(&self) -> &str {
        &self.name
    }

    fn enter(&mut self, _ctx: &mut C) {
        self.children.running = None;
    }

    fn execute(&mut self, ctx: &mut C) -> Status {
        self.children.run(&self.name, ctx, Status::Success)
    }

    fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    fn set_parent(&mut self, parent: &str) {
        self.parent = Some(parent.to_owned());
    }

    fn active_path<'a>(&'a self, path: &mut Vec<&'a str>) {
        path.push(&self.name);
        self.children.active_path(path);
    }
}

/// Executes child behaviors in sequence until one succeeds.
///
/// # Semantics
///
/// A `Selector` node evaluates its children from left to right:
/// - If a child returns `Success`, the selector **stops immediately** and returns `Success`
/// - If a child returns `Running`, the selector returns `Running` and resumes that child next tick
/// - If a child returns `Failure`, the selector **enters the next child in the same tick**
/// - If all children return `Failure`, the selector returns `Failure`
///
/// This is analogous to a short-circuited logical OR (||) operation.
pub struct Selector<C: ?Sized> {
    name: String,
    parent: Option<String>,
    children: Children<C>,
}

impl<C: ?Sized> Selector<C> {
    /// Creates a new selector with the given child behaviors.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty. A selector with no children is
    /// meaningless and likely indicates a programming error.
    pub fn new(name: impl Into<String>, children: Vec<Box<dyn Behavior<C>>>) -> Self {
        let name = name.into();
        let children = Children::new(&name, "Selector", children);
        Self {
            name,
            parent: None,
            children,
        }
    }

    /// Appends a child; it is tried after every existing child has failed.
    pub fn add_child(&mut self, child: Box<dyn Behavior<C>>) {
        self.children.push(&self.name, child);
    }

    /// Index of the child resumed on the next tick, if the selector is mid-execution.
    pub fn running_child(&self) -> Option<usize> {
        self.children.running
    }

    pub fn len(&self) -> usize {
        self.children.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.nodes.is_empty()
    }
}

impl<C: ?Sized> Behavior<C> for Selector<C> {
    fn name(&self) -> &str {
        &self.name
    }

    fn enter(&mut self, _ctx: &mut C) {
        self.children.running = None;
    }

    fn execute(&mut self, ctx: &mut C) -> Status {
        self.children.run(&self.name, ctx, Status::Failure)
    }

    fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    fn set_parent(&mut self, parent: &str) {
        self.parent = Some(parent.to_owned());
    }

    fn active_path<'a>(&'a self, path: &mut Vec<&'a str>) {
        path.push(&self.name);
        self.children.active_path(path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct TestContext {
        log: Vec<String>,
    }

    /// Replays a fixed list of statuses, repeating the last one.
    struct Scripted {
        name: &'static str,
        script: Vec<Status>,
        step: usize,
    }

    impl Scripted {
        fn boxed(name: &'static str, script: &[Status]) -> Box<dyn Behavior<TestContext>> {
            Box::new(Self {
                name,
                script: script.to_vec(),
                step: 0,
            })
        }
    }

    impl Behavior<TestContext> for Scripted {
        fn name(&self) -> &str {
            self.name
        }

        fn enter(&mut self, ctx: &mut TestContext) {
            self.step = 0;
            ctx.log.push(format!("enter {}", self.name));
        }

        fn execute(&mut self, ctx: &mut TestContext) -> Status {
            ctx.log.push(format!("exec {}", self.name));
            let status = self.script[self.step.min(self.script.len() - 1)];
            self.step += 1;
            status
        }
    }

    use crate::Status::{Failure, Running, Success};

    #[test]
    fn sequence_all_success_in_one_tick() {
        let mut seq = Sequence::new(
            "seq",
            vec![Scripted::boxed("a", &[Success]), Scripted::boxed("b", &[Success])],
        );

        let mut ctx = TestContext::default();
        assert_eq!(seq.execute(&mut ctx), Success);
        assert_eq!(ctx.log, ["enter a", "exec a", "enter b", "exec b"]);
        assert_eq!(seq.running_child(), None);
    }

    #[test]
    fn sequence_fails_on_first_failure() {
        let mut seq = Sequence::new(
            "seq",
            vec![
                Scripted::boxed("a", &[Success]),
                Scripted::boxed("b", &[Failure]),
                Scripted::boxed("c", &[Success]), // Should never be entered
            ],
        );

        let mut ctx = TestContext::default();
        assert_eq!(seq.execute(&mut ctx), Failure);
        assert!(!ctx.log.iter().any(|entry| entry.ends_with(" c")));
        assert_eq!(seq.running_child(), None);
    }

    #[test]
    fn sequence_resumes_running_child_without_reentering() {
        let mut seq = Sequence::new(
            "seq",
            vec![
                Scripted::boxed("a", &[Running, Running, Success]),
                Scripted::boxed("b", &[Running]),
            ],
        );

        let mut ctx = TestContext::default();
        assert_eq!(seq.execute(&mut ctx), Running);
        assert_eq!(seq.running_child(), Some(0));
        assert_eq!(seq.execute(&mut ctx), Running);
        assert_eq!(seq.running_child(), Some(0));

        // Third tick: `a` succeeds, `b` is entered and runs in the same tick.
        assert_eq!(seq.execute(&mut ctx), Running);
        assert_eq!(seq.running_child(), Some(1));
        assert_eq!(
            ctx.log,
            ["enter a", "exec a", "exec a", "exec a", "enter b", "exec b"]
        );
    }

    #[test]
    fn selector_enters_next_child_in_same_tick_after_failure() {
        let mut sel = Selector::new(
            "sel",
            vec![
                Scripted::boxed("a", &[Failure]),
                Scripted::boxed("b", &[Success]),
                Scripted::boxed("c", &[Success]), // Should not execute
            ],
        );

        let mut ctx = TestContext::default();
        assert_eq!(sel.execute(&mut ctx), Success);
        assert_eq!(ctx.log, ["enter a", "exec a", "enter b", "exec b"]);
        assert_eq!(sel.running_child(), None);
    }

    #[test]
    fn selector_fails_when_all_fail() {
        let mut sel = Selector::new(
            "sel",
            vec![Scripted::boxed("a", &[Failure]), Scripted::boxed("b", &[Failure])],
        );

        let mut ctx = TestContext::default();
        assert_eq!(sel.execute(&mut ctx), Failure);
        assert_eq!(sel.running_child(), None);
    }

    #[test]
    fn selector_keeps_cursor_on_running_alternative() {
        let mut sel = Selector::new(
            "sel",
            vec![
                Scripted::boxed("a", &[Failure]),
                Scripted::boxed("b", &[Running, Failure]),
            ],
        );

        let mut ctx = TestContext::default();
        assert_eq!(sel.execute(&mut ctx), Running);
        assert_eq!(sel.running_child(), Some(1));

        // `a` is not retried while `b` is mid-execution.
        assert_eq!(sel.execute(&mut ctx), Failure);
        assert_eq!(ctx.log.iter().filter(|e| *e == "exec a").count(), 1);
        assert_eq!(sel.running_child(), None);
    }

    #[test]
    fn enter_clears_cursor() {
        let mut seq = Sequence::new(
            "seq",
            vec![Scripted::boxed("a", &[Success]), Scripted::boxed("b", &[Running])],
        );

        let mut ctx = TestContext::default();
        assert_eq!(seq.execute(&mut ctx), Running);
        assert_eq!(seq.running_child(), Some(1));

        seq.enter(&mut ctx);
        assert_eq!(seq.running_child(), None);
    }

    #[test]
    fn nested_composites_report_active_path_and_parents() {
        let inner = Sequence::new("inner", vec![Scripted::boxed("leaf", &[Running])]);
        let mut outer = Selector::new("outer", vec![Box::new(inner)]);

        let mut ctx = TestContext::default();
        assert_eq!(outer.execute(&mut ctx), Running);

        let mut path = Vec::new();
        outer.active_path(&mut path);
        assert_eq!(path, ["outer", "inner", "leaf"]);
        assert_eq!(outer.parent(), None);
    }

    #[test]
    fn add_child_sets_parent() {
        let mut seq = Sequence::new("seq", vec![Scripted::boxed("a", &[Success])]);
        seq.add_child(Box::new(Selector::new(
            "nested",
            vec![Scripted::boxed("b", &[Success])],
        )));
        assert_eq!(seq.len(), 2);
        assert_eq!(seq.children.nodes[1].parent(), Some("seq"));
    }

    #[test]
    #[should_panic(expected = "Sequence must have at least one child")]
    fn empty_sequence_panics() {
        let _ = Sequence::<TestContext>::new("empty", Vec::new());
    }

    #[test]
    #[should_panic(expected = "Selector must have at least one child")]
    fn empty_selector_panics() {
        let _ = Selector::<TestContext>::new("empty", Vec::new());
    }
}
