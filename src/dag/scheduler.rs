// src/dag/scheduler.rs

use tracing::debug;

use crate::dag::graph::StepGraph;
use crate::dag::pools::{ResourcePools, end_time};
use crate::dag::step::{ScheduledStep, Schedule, Step};
use crate::errors::ScheduleError;
use crate::types::{Minutes, StepId};

/// List scheduler for recipe steps.
///
/// Holds only the partial-slot count; every call to [`Scheduler::plan`]
/// starts from fresh resource pools and shares nothing with other calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheduler {
    partial_slots: usize,
}

impl Scheduler {
    pub fn new(partial_slots: usize) -> Result<Self, ScheduleError> {
        if partial_slots < 1 {
            return Err(ScheduleError::InvalidParameter(format!(
                "partial_slots must be >= 1 (got {partial_slots})"
            )));
        }
        Ok(Self { partial_slots })
    }

    pub fn partial_slots(&self) -> usize {
        self.partial_slots
    }

    /// Order and schedule `steps` in one go.
    ///
    /// Checks run in this order: durations, then references and duplicate
    /// ids, then cycles. Nothing is scheduled unless all of them pass.
    pub fn plan(&self, steps: &[Step]) -> Result<Schedule, ScheduleError> {
        validate_durations(steps)?;
        let graph = StepGraph::build(steps)?;
        let order = graph.topological_order()?;
        let steps = self.schedule_graph(&graph, &order)?;
        Ok(Schedule {
            partial_slots: self.partial_slots,
            steps,
        })
    }

    /// Schedule along a precomputed order of dense indices.
    ///
    /// `order` must list every node exactly once with each dependency before
    /// its dependents.
    pub fn schedule_graph(
        &self,
        graph: &StepGraph<'_>,
        order: &[usize],
    ) -> Result<Vec<ScheduledStep>, ScheduleError> {
        if order.len() != graph.len() {
            return Err(ScheduleError::InvalidParameter(format!(
                "order covers {} steps but the recipe has {}",
                order.len(),
                graph.len()
            )));
        }

        let mut pools = ResourcePools::new(self.partial_slots);
        let mut finish: Vec<Option<Minutes>> = vec![None; graph.len()];
        let mut scheduled = Vec::with_capacity(order.len());

        for (position, &idx) in order.iter().enumerate() {
            let step = graph.step(idx);
            if finish[idx].is_some() {
                return Err(ScheduleError::InvalidParameter(format!(
                    "step {} appears twice in the order",
                    step.id
                )));
            }

            let mut ready_at: Minutes = 0;
            for &dep in graph.dependencies_of(idx) {
                let dep_finish = finish[dep].ok_or_else(|| {
                    ScheduleError::InvalidParameter(format!(
                        "step {} is ordered before its dependency {}",
                        step.id,
                        graph.step(dep).id
                    ))
                })?;
                ready_at = ready_at.max(dep_finish);
            }

            let start = pools.claim(step.step_type, ready_at, step.time_minutes)?;
            let end = end_time(start, step.time_minutes)?;
            finish[idx] = Some(end);

            debug!(
                step = step.id,
                step_type = %step.step_type,
                ready_at,
                start,
                end,
                "placed step"
            );

            scheduled.push(ScheduledStep {
                step: step.clone(),
                predicted_start_time: start,
                predicted_end_time: end,
                step_number: position + 1,
            });
        }

        Ok(scheduled)
    }
}

/// Reject non-positive durations before any scheduling happens.
pub fn validate_durations(steps: &[Step]) -> Result<(), ScheduleError> {
    match steps.iter().find(|s| s.time_minutes <= 0) {
        Some(step) => Err(ScheduleError::InvalidParameter(format!(
            "step {} has non-positive time_minutes {}",
            step.id, step.time_minutes
        ))),
        None => Ok(()),
    }
}

/// Schedule `steps` along an id order produced by
/// [`crate::dag::graph::build_and_order`].
pub fn schedule(
    steps: &[Step],
    order: &[StepId],
    partial_slots: usize,
) -> Result<Vec<ScheduledStep>, ScheduleError> {
    let scheduler = Scheduler::new(partial_slots)?;
    validate_durations(steps)?;
    let graph = StepGraph::build(steps)?;
    let dense = order
        .iter()
        .map(|id| {
            graph.index_of(*id).ok_or_else(|| {
                ScheduleError::InvalidParameter(format!("order names unknown step {id}"))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    scheduler.schedule_graph(&graph, &dense)
}

/// Order and schedule `steps` with `partial_slots` partial resources.
pub fn plan(steps: &[Step], partial_slots: usize) -> Result<Schedule, ScheduleError> {
    Scheduler::new(partial_slots)?.plan(steps)
}
