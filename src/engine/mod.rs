// src/engine/mod.rs

//! Batch planning for several independent recipes.
//!
//! A single planning call is synchronous and never split across threads.
//! Independent recipes share nothing, so [`runtime::plan_concurrently`] runs
//! each one on the tokio blocking pool and gathers the results in job order.

use crate::dag::{Schedule, Step};
use crate::errors::Result;

pub mod runtime;

pub use runtime::plan_concurrently;

/// One recipe to plan.
#[derive(Debug, Clone)]
pub struct PlanJob {
    /// Free-form label used in logs and output (usually the file path).
    pub label: String,
    pub steps: Vec<Step>,
    pub partial_slots: usize,
}

impl PlanJob {
    pub fn new(label: impl Into<String>, steps: Vec<Step>, partial_slots: usize) -> Self {
        Self {
            label: label.into(),
            steps,
            partial_slots,
        }
    }
}

/// Result of one [`PlanJob`].
#[derive(Debug)]
pub struct PlanOutcome {
    pub label: String,
    pub result: Result<Schedule>,
}

impl PlanOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}
