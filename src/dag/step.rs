// src/dag/step.rs

//! Input steps and the scheduled output produced from them.

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::types::{Minutes, StepId, StepType};

/// One recipe step as handed over by the step generator.
///
/// Field names match the generator's JSON schema:
/// `{ id, description, time_minutes, step_type, depends_on }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub id: StepId,
    pub description: String,
    /// Predicted duration; must be strictly positive.
    pub time_minutes: Minutes,
    pub step_type: StepType,
    /// Steps that must finish before this one may start.
    #[serde(default)]
    pub depends_on: Vec<StepId>,
}

impl Step {
    pub fn new(
        id: StepId,
        description: impl Into<String>,
        time_minutes: Minutes,
        step_type: StepType,
        depends_on: Vec<StepId>,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            time_minutes,
            step_type,
            depends_on,
        }
    }
}

/// A step with its predicted interval and display position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduledStep {
    #[serde(flatten)]
    pub step: Step,
    pub predicted_start_time: Minutes,
    pub predicted_end_time: Minutes,
    /// 1-based position in the traversal order; gap-free.
    pub step_number: usize,
}

impl ScheduledStep {
    pub fn id(&self) -> StepId {
        self.step.id
    }

    pub fn step_type(&self) -> StepType {
        self.step.step_type
    }

    pub fn predicted_duration(&self) -> Minutes {
        self.predicted_end_time - self.predicted_start_time
    }
}

/// Full result of one planning call, in `step_number` order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schedule {
    pub partial_slots: usize,
    pub steps: Vec<ScheduledStep>,
}

impl Schedule {
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, step_number: usize) -> Option<&ScheduledStep> {
        step_number
            .checked_sub(1)
            .and_then(|idx| self.steps.get(idx))
    }

    pub fn by_id(&self, id: StepId) -> Option<&ScheduledStep> {
        self.steps.iter().find(|s| s.id() == id)
    }

    /// The step a cook should begin with.
    pub fn first_actionable(&self) -> Option<&ScheduledStep> {
        self.steps.first()
    }

    /// Predicted total time to finish the recipe.
    pub fn makespan(&self) -> Minutes {
        self.steps
            .iter()
            .map(|s| s.predicted_end_time)
            .max()
            .unwrap_or(0)
    }

    /// Steps ordered by predicted start time. Ties keep traversal order.
    pub fn timeline(&self) -> Vec<&ScheduledStep> {
        let mut view: Vec<&ScheduledStep> = self.steps.iter().collect();
        view.sort_by_key(|s| s.predicted_start_time);
        view
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Stable content digest (hex blake3 of the compact JSON encoding).
    ///
    /// Identical `(steps, M)` input always yields the same fingerprint.
    pub fn fingerprint(&self) -> Result<String> {
        let bytes = serde_json::to_vec(self)?;
        Ok(blake3::hash(&bytes).to_hex().to_string())
    }
}
