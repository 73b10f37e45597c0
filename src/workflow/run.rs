// src/workflow/run.rs

use tracing::{debug, info};

use crate::dag::{Schedule, ScheduledStep};
use crate::errors::{Result, WorkflowError};
use crate::types::Minutes;
use crate::workflow::status::{StepRecord, StepStatus};

/// Status tracking for one planned recipe.
///
/// Steps advance strictly in `step_number` order: completing step `n` makes
/// step `n + 1` ready. The predicted schedule itself is never revised.
#[derive(Debug, Clone)]
pub struct RecipeRun {
    recipe_id: String,
    schedule: Schedule,
    /// `statuses[n - 1]` is the status of step number `n`.
    statuses: Vec<StepStatus>,
}

impl RecipeRun {
    /// Start tracking `schedule`: step 1 is ready, everything else waits.
    pub fn new(recipe_id: impl Into<String>, schedule: Schedule) -> Self {
        let statuses = (0..schedule.len())
            .map(|idx| {
                if idx == 0 {
                    StepStatus::ReadyToStart
                } else {
                    StepStatus::UnableToStart
                }
            })
            .collect();

        Self {
            recipe_id: recipe_id.into(),
            schedule,
            statuses,
        }
    }

    /// Use the schedule's fingerprint as the recipe id.
    pub fn from_schedule(schedule: Schedule) -> Result<Self> {
        let recipe_id = schedule.fingerprint()?;
        Ok(Self::new(recipe_id, schedule))
    }

    pub fn recipe_id(&self) -> &str {
        &self.recipe_id
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn status_of(&self, step_number: usize) -> Option<StepStatus> {
        step_number
            .checked_sub(1)
            .and_then(|idx| self.statuses.get(idx))
            .copied()
    }

    /// Lowest-numbered step that is waiting on the cook.
    pub fn next_pending(&self) -> Option<&ScheduledStep> {
        self.statuses
            .iter()
            .position(|s| s.is_pending())
            .and_then(|idx| self.schedule.steps.get(idx))
    }

    pub fn is_complete(&self) -> bool {
        self.statuses.iter().all(|s| s.is_terminal())
    }

    /// `ready_to_start` -> `in_progress`.
    ///
    /// Returns the predicted duration an external timer should wait before
    /// calling [`RecipeRun::mark_ready_to_finish`].
    pub fn mark_started(&mut self, step_number: usize) -> Result<Minutes> {
        self.transition(step_number, &[StepStatus::ReadyToStart], StepStatus::InProgress)?;
        let duration = self
            .schedule
            .get(step_number)
            .map(|s| s.predicted_duration())
            .unwrap_or(0);
        info!(
            recipe_id = %self.recipe_id,
            step_number,
            predicted_minutes = duration,
            "step started"
        );
        Ok(duration)
    }

    /// `in_progress` -> `ready_to_finish`.
    pub fn mark_ready_to_finish(&mut self, step_number: usize) -> Result<()> {
        self.transition(
            step_number,
            &[StepStatus::InProgress],
            StepStatus::ReadyToFinish,
        )?;
        debug!(recipe_id = %self.recipe_id, step_number, "step ready to finish");
        Ok(())
    }

    /// `in_progress` | `ready_to_finish` -> `finished`, then make the next
    /// step ready.
    ///
    /// Returns the step number that became ready, if any.
    pub fn mark_completed(&mut self, step_number: usize) -> Result<Option<usize>> {
        self.transition(
            step_number,
            &[StepStatus::InProgress, StepStatus::ReadyToFinish],
            StepStatus::Finished,
        )?;

        let next = step_number + 1;
        let next_ready = match self.statuses.get_mut(next - 1) {
            Some(status) if *status == StepStatus::UnableToStart => {
                *status = StepStatus::ReadyToStart;
                Some(next)
            }
            _ => None,
        };

        info!(
            recipe_id = %self.recipe_id,
            step_number,
            next_ready = ?next_ready,
            "step completed"
        );
        Ok(next_ready)
    }

    /// Current rows for the persistence collaborator, in `step_number` order.
    pub fn records(&self) -> Vec<StepRecord> {
        self.schedule
            .steps
            .iter()
            .zip(self.statuses.iter())
            .map(|(step, status)| StepRecord::from_scheduled(&self.recipe_id, step, *status))
            .collect()
    }

    fn transition(
        &mut self,
        step_number: usize,
        allowed_from: &[StepStatus],
        to: StepStatus,
    ) -> Result<()> {
        let status = step_number
            .checked_sub(1)
            .and_then(|idx| self.statuses.get_mut(idx))
            .ok_or(WorkflowError::StepNotFound(step_number))?;

        if !allowed_from.contains(status) {
            return Err(WorkflowError::InvalidTransition {
                step: step_number,
                from: *status,
                to,
            }
            .into());
        }

        *status = to;
        Ok(())
    }
}
