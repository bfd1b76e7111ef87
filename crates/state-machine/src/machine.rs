//! The machine holding exactly one active state.

use crate::State;

/// A finite state machine ticked once per sample period.
///
/// # Tick Semantics
///
/// Each [`update`](FiniteStateMachine::update):
/// 1. asks the current state for a transition
/// 2. installs the successor, if any, dropping the previous state
/// 3. executes whichever state is now current
///
/// A new state therefore executes in the same tick it becomes active, starting
/// from the fields its constructor initialised.
#[derive(Debug, Clone)]
pub struct FiniteStateMachine<S> {
    state: S,
    transitions: u64,
}

impl<S> FiniteStateMachine<S> {
    pub fn new(state: S) -> Self {
        Self {
            state,
            transitions: 0,
        }
    }

    /// The active state.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Number of transitions taken since construction.
    pub fn transitions(&self) -> u64 {
        self.transitions
    }

    /// Replaces the active state wholesale.
    pub fn change_state(&mut self, state: S) {
        self.state = state;
        self.transitions += 1;
    }

    /// Runs one tick: transition check, then execute on the current state.
    pub fn update<C: ?Sized>(&mut self, ctx: &mut C)
    where
        S: State<C>,
    {
        if let Some(next) = self.state.check_transition(ctx) {
            tracing::debug!(
                from = self.state.name(),
                to = next.name(),
                "state transition"
            );
            self.change_state(next);
        }
        self.state.execute(ctx);
    }
}
