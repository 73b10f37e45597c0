// src/dag/pools.rs

//! Resource pools consumed by the three attention classes.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::errors::ScheduleError;
use crate::types::{Minutes, StepType};

/// Availability state for one scheduling pass.
///
/// - one active resource (the cook's hands)
/// - `partial_slots` interchangeable partial resources (e.g. burners)
/// - passive steps use no pool at all
#[derive(Debug, Clone)]
pub struct ResourcePools {
    active_available_at: Minutes,
    /// Min-heap keyed by `(available_at, slot_index)`.
    partial: BinaryHeap<Reverse<(Minutes, usize)>>,
}

impl ResourcePools {
    /// `partial_slots` must be at least 1; callers validate this up front.
    pub fn new(partial_slots: usize) -> Self {
        let partial = (0..partial_slots).map(|slot| Reverse((0, slot))).collect();
        Self {
            active_available_at: 0,
            partial,
        }
    }

    /// Reserve the pool for `step_type` and return the chosen start time.
    ///
    /// `ready_at` is when all dependencies have finished. Fails without
    /// touching the pools if the step would end past `Minutes::MAX`.
    pub fn claim(
        &mut self,
        step_type: StepType,
        ready_at: Minutes,
        duration: Minutes,
    ) -> Result<Minutes, ScheduleError> {
        match step_type {
            StepType::Active => {
                let start = ready_at.max(self.active_available_at);
                self.active_available_at = end_time(start, duration)?;
                Ok(start)
            }
            StepType::Partial => match self.partial.peek().copied() {
                Some(Reverse((available_at, slot))) => {
                    let start = ready_at.max(available_at);
                    let end = end_time(start, duration)?;
                    self.partial.pop();
                    self.partial.push(Reverse((end, slot)));
                    Ok(start)
                }
                // Empty pool only happens with zero slots, which is rejected
                // before a pass starts.
                None => Ok(ready_at),
            },
            StepType::Passive => Ok(ready_at),
        }
    }

    pub fn active_available_at(&self) -> Minutes {
        self.active_available_at
    }

    /// Availability of every partial slot, indexed by slot.
    pub fn partial_available_at(&self) -> Vec<Minutes> {
        let mut slots: Vec<(usize, Minutes)> = self
            .partial
            .iter()
            .map(|Reverse((at, slot))| (*slot, *at))
            .collect();
        slots.sort_unstable();
        slots.into_iter().map(|(_, at)| at).collect()
    }
}

/// `start + duration`, or an error when the sum does not fit in `Minutes`.
pub fn end_time(start: Minutes, duration: Minutes) -> Result<Minutes, ScheduleError> {
    start.checked_add(duration).ok_or_else(|| {
        ScheduleError::InvalidParameter(format!(
            "schedule exceeds representable time ({start} + {duration} minutes)"
        ))
    })
}
