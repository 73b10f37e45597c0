// src/dag/graph.rs

use std::collections::{HashMap, VecDeque};

use petgraph::algo::tarjan_scc;
use petgraph::graphmap::DiGraphMap;
use tracing::debug;

use crate::dag::step::Step;
use crate::errors::ScheduleError;
use crate::types::StepId;

/// Internal node structure: dense indices of immediate deps and dependents.
#[derive(Debug, Clone, Default)]
struct StepNode {
    /// Direct dependencies: steps that must finish before this one starts.
    deps: Vec<usize>,
    /// Direct dependents: steps that list this one in `depends_on`.
    dependents: Vec<usize>,
}

/// Index-addressed dependency graph over one recipe's steps.
///
/// Node `i` is `steps[i]`; ids are only used at the boundary. The graph
/// borrows the steps and never mutates them.
#[derive(Debug, Clone)]
pub struct StepGraph<'a> {
    steps: &'a [Step],
    index: HashMap<StepId, usize>,
    nodes: Vec<StepNode>,
}

impl<'a> StepGraph<'a> {
    /// Index `steps` into a graph.
    ///
    /// Fails with [`ScheduleError::InvalidParameter`] on a duplicate id and
    /// with [`ScheduleError::InvalidReference`] when a `depends_on` entry
    /// names a step that is not in the set. Cycles are *not* detected here;
    /// see [`StepGraph::topological_order`].
    pub fn build(steps: &'a [Step]) -> Result<Self, ScheduleError> {
        let mut index = HashMap::with_capacity(steps.len());

        // First pass: assign dense indices.
        for (idx, step) in steps.iter().enumerate() {
            if index.insert(step.id, idx).is_some() {
                return Err(ScheduleError::InvalidParameter(format!(
                    "duplicate step id {}",
                    step.id
                )));
            }
        }

        // Second pass: one edge per `depends_on` entry.
        let mut nodes = vec![StepNode::default(); steps.len()];
        for (idx, step) in steps.iter().enumerate() {
            for dep in step.depends_on.iter() {
                let dep_idx = *index.get(dep).ok_or(ScheduleError::InvalidReference {
                    step: step.id,
                    missing: *dep,
                })?;
                nodes[idx].deps.push(dep_idx);
                nodes[dep_idx].dependents.push(idx);
            }
        }

        debug!(steps = steps.len(), "built step dependency graph");

        Ok(Self {
            steps,
            index,
            nodes,
        })
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The step stored at a dense index.
    pub fn step(&self, idx: usize) -> &'a Step {
        &self.steps[idx]
    }

    /// Dense index of a step id, if present.
    pub fn index_of(&self, id: StepId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// Immediate dependencies of the node at `idx`.
    pub fn dependencies_of(&self, idx: usize) -> &[usize] {
        self.nodes
            .get(idx)
            .map(|n| n.deps.as_slice())
            .unwrap_or(&[])
    }

    /// Immediate dependents of the node at `idx`.
    pub fn dependents_of(&self, idx: usize) -> &[usize] {
        self.nodes
            .get(idx)
            .map(|n| n.dependents.as_slice())
            .unwrap_or(&[])
    }

    /// Kahn's algorithm over dense indices.
    ///
    /// The queue is seeded in input order and successors are enqueued in the
    /// order their edges were inserted, so ties are broken by input position
    /// and never by id value.
    pub fn topological_order(&self) -> Result<Vec<usize>, ScheduleError> {
        let mut in_degree: Vec<usize> = self.nodes.iter().map(|n| n.deps.len()).collect();

        let mut queue: VecDeque<usize> = in_degree
            .iter()
            .enumerate()
            .filter(|(_, deg)| **deg == 0)
            .map(|(idx, _)| idx)
            .collect();

        let mut order = Vec::with_capacity(self.nodes.len());

        while let Some(current) = queue.pop_front() {
            order.push(current);
            for &succ in self.nodes[current].dependents.iter() {
                in_degree[succ] -= 1;
                if in_degree[succ] == 0 {
                    queue.push_back(succ);
                }
            }
        }

        if order.len() < self.nodes.len() {
            let unscheduled: Vec<usize> = in_degree
                .iter()
                .enumerate()
                .filter(|(_, deg)| **deg > 0)
                .map(|(idx, _)| idx)
                .collect();
            return Err(self.cycle_error(&unscheduled));
        }

        if tracing::enabled!(tracing::Level::DEBUG) {
            let ids: Vec<StepId> = order.iter().map(|&i| self.steps[i].id).collect();
            debug!(order = ?ids, "topological order");
        }
        Ok(order)
    }

    /// Same as [`StepGraph::topological_order`] but returns step ids.
    pub fn topological_ids(&self) -> Result<Vec<StepId>, ScheduleError> {
        Ok(self
            .topological_order()?
            .into_iter()
            .map(|idx| self.steps[idx].id)
            .collect())
    }

    /// Describe the nodes Kahn's algorithm could not place.
    ///
    /// Every leftover node either sits on a cycle or is downstream of one;
    /// the strongly connected components tell the two apart.
    fn cycle_error(&self, unscheduled: &[usize]) -> ScheduleError {
        let mut graph: DiGraphMap<usize, ()> = DiGraphMap::new();
        for &idx in unscheduled {
            graph.add_node(idx);
        }
        for &idx in unscheduled {
            for &dep in self.nodes[idx].deps.iter() {
                if graph.contains_node(dep) {
                    graph.add_edge(dep, idx, ());
                }
            }
        }

        let mut cycles: Vec<Vec<StepId>> = tarjan_scc(&graph)
            .into_iter()
            .filter(|component| {
                component.len() > 1 || graph.contains_edge(component[0], component[0])
            })
            .map(|component| {
                let mut ids: Vec<StepId> =
                    component.into_iter().map(|i| self.steps[i].id).collect();
                ids.sort_unstable();
                ids
            })
            .collect();
        cycles.sort();

        ScheduleError::Cycle {
            unscheduled: unscheduled.iter().map(|&i| self.steps[i].id).collect(),
            cycles,
        }
    }
}

/// Validate `steps` and return their ids in dependency order.
pub fn build_and_order(steps: &[Step]) -> Result<Vec<StepId>, ScheduleError> {
    StepGraph::build(steps)?.topological_ids()
}
