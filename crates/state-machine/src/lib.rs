//! Tick-driven finite state machine.
//!
//! Companion to the `behavior-tree` crate: the same host loop can drive either
//! engine. Here control transfer is hard-wired into each state's guards rather
//! than composed from reusable nodes.
//!
//! - [`State`]: `check_transition` + `execute` contract
//! - [`FiniteStateMachine`]: holds exactly one active state, replaced by value

pub mod machine;
pub mod state;

pub use machine::FiniteStateMachine;
pub use state::State;
