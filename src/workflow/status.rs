// src/workflow/status.rs

//! Per-step status and the persistence row built from it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dag::ScheduledStep;
use crate::types::Minutes;

/// Where a step is in the cooking workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    /// An earlier step has not been completed yet.
    UnableToStart,
    /// The cook may start this step now.
    ReadyToStart,
    /// Started; its predicted duration has not elapsed.
    InProgress,
    /// Predicted duration elapsed; waiting for the cook to confirm.
    ReadyToFinish,
    Finished,
}

impl StepStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            StepStatus::UnableToStart => "unable_to_start",
            StepStatus::ReadyToStart => "ready_to_start",
            StepStatus::InProgress => "in_progress",
            StepStatus::ReadyToFinish => "ready_to_finish",
            StepStatus::Finished => "finished",
        }
    }

    /// Whether the step is waiting on the cook (to start or to confirm).
    pub fn is_pending(self) -> bool {
        matches!(self, StepStatus::ReadyToStart | StepStatus::ReadyToFinish)
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, StepStatus::Finished)
    }
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Row shape handed to the persistence collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepRecord {
    pub recipe_id: String,
    pub step_number: usize,
    pub description: String,
    pub predicted_start_time: Minutes,
    pub predicted_end_time: Minutes,
    pub status: StepStatus,
}

impl StepRecord {
    pub fn from_scheduled(recipe_id: &str, step: &ScheduledStep, status: StepStatus) -> Self {
        Self {
            recipe_id: recipe_id.to_string(),
            step_number: step.step_number,
            description: step.step.description.clone(),
            predicted_start_time: step.predicted_start_time,
            predicted_end_time: step.predicted_end_time,
            status,
        }
    }
}
