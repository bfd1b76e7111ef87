//! Core state trait.

/// One state of a [`FiniteStateMachine`](crate::FiniteStateMachine).
///
/// A state owns all of its progress data. Transitions never mutate the current
/// state into the next one: [`State::check_transition`] builds a fresh value of
/// the successor, and the machine drops the old one.
pub trait State<C: ?Sized>: Sized + Send + Sync {
    /// Diagnostic name of this state.
    fn name(&self) -> &str;

    /// Evaluates guard conditions against the context.
    ///
    /// Returns the freshly constructed successor if a guard fired, `None` to
    /// stay in this state.
    fn check_transition(&self, ctx: &mut C) -> Option<Self>;

    /// Runs one tick of this state's logic.
    fn execute(&mut self, ctx: &mut C);
}
