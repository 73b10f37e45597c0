// src/dag/mod.rs

//! Step graph and scheduling.
//!
//! - [`step`] holds the input [`Step`] and the [`ScheduledStep`] output.
//! - [`graph`] indexes steps into a dependency graph and orders them.
//! - [`pools`] tracks the active and partial resources during a pass.
//! - [`scheduler`] walks the order and assigns predicted times.

pub mod graph;
pub mod pools;
pub mod scheduler;
pub mod step;

pub use graph::{StepGraph, build_and_order};
pub use pools::ResourcePools;
pub use scheduler::{Scheduler, plan, schedule};
pub use step::{Schedule, ScheduledStep, Step};
