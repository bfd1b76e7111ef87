//! Tick-driven behavior tree library for reactive robot control.
//!
//! This library provides a small behavior tree implementation where actions
//! may take many ticks to finish:
//!
//! - **Running state**: long maneuvers report `Running` and are resumed next tick
//! - **Resumable composites**: [`Sequence`] and [`Selector`] remember their running child
//! - **Explicit entry**: [`Behavior::enter`] runs once each time a node becomes active
//! - **Build once**: nodes are reused across ticks, never recreated
//!
//! # Architecture
//!
//! - [`Behavior`]: Core trait for all nodes
//! - [`Status`]: Success, Failure, or Running
//! - Composite nodes: [`Sequence`], [`Selector`]
//! - [`BehaviorTree`]: root holder ticked by the host loop

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod status;
pub mod tree;

// Re-export core types for ergonomic API
pub use behavior::Behavior;
pub use composite::{Selector, Sequence};
pub use status::Status;
pub use tree::BehaviorTree;
