// src/engine/runtime.rs

use anyhow::anyhow;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use crate::dag::plan;
use crate::engine::{PlanJob, PlanOutcome};
use crate::errors::CookdagError;

/// Plan every job on the blocking pool and return outcomes in job order.
///
/// A job that panics yields an error outcome; the other jobs still finish.
pub async fn plan_concurrently(jobs: Vec<PlanJob>) -> Vec<PlanOutcome> {
    let labels: Vec<String> = jobs.iter().map(|j| j.label.clone()).collect();
    let mut slots: Vec<Option<PlanOutcome>> = labels.iter().map(|_| None).collect();

    let mut set = JoinSet::new();
    for (position, job) in jobs.into_iter().enumerate() {
        set.spawn_blocking(move || {
            debug!(recipe = %job.label, steps = job.steps.len(), "planning recipe");
            let result = plan(&job.steps, job.partial_slots).map_err(CookdagError::from);
            (position, PlanOutcome {
                label: job.label,
                result,
            })
        });
    }

    while let Some(joined) = set.join_next().await {
        match joined {
            Ok((position, outcome)) => {
                match &outcome.result {
                    Ok(schedule) => info!(
                        recipe = %outcome.label,
                        steps = schedule.len(),
                        makespan = schedule.makespan(),
                        "recipe planned"
                    ),
                    Err(err) => warn!(recipe = %outcome.label, error = %err, "recipe rejected"),
                }
                slots[position] = Some(outcome);
            }
            Err(err) => {
                warn!(error = %err, "planning task did not complete");
            }
        }
    }

    slots
        .into_iter()
        .zip(labels)
        .map(|(slot, label)| {
            slot.unwrap_or_else(|| PlanOutcome {
                result: Err(CookdagError::Other(anyhow!(
                    "planning task for '{label}' did not complete"
                ))),
                label,
            })
        })
        .collect()
}
