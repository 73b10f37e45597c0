// src/errors.rs

//! Crate-wide error types.
//!
//! [`ScheduleError`] is the error surface of the scheduling core;
//! [`WorkflowError`] covers status transitions on a planned recipe;
//! [`CookdagError`] wraps both together with config and IO failures.

use thiserror::Error;

use crate::types::StepId;
use crate::workflow::StepStatus;

/// Failure of a single planning call. No partial schedule accompanies it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("step {step} depends on unknown step {missing}")]
    InvalidReference { step: StepId, missing: StepId },

    #[error("cycle detected in steps; unscheduled steps: {}", join_ids(.unscheduled))]
    Cycle {
        /// Every step that could not be placed, in input order.
        unscheduled: Vec<StepId>,
        /// The strongly connected components among `unscheduled` that form
        /// actual cycles (a self-dependency counts as one).
        cycles: Vec<Vec<StepId>>,
    },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Illegal operation on a [`crate::workflow::RecipeRun`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkflowError {
    #[error("step number {0} not found in recipe")]
    StepNotFound(usize),

    #[error("invalid status transition for step {step}: {from} -> {to}")]
    InvalidTransition {
        step: usize,
        from: StepStatus,
        to: StepStatus,
    },
}

#[derive(Error, Debug)]
pub enum CookdagError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Scheduling error: {0}")]
    Schedule(#[from] ScheduleError),

    #[error("Workflow error: {0}")]
    Workflow(#[from] WorkflowError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, CookdagError>;

fn join_ids(ids: &[StepId]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
