// src/render.rs

//! Text renderings of planned recipes for the CLI.

use std::fmt::Write as _;

use crate::cli::OutputFormat;
use crate::config::RecipeFile;
use crate::dag::{Schedule, ScheduledStep, StepGraph};
use crate::errors::Result;
use crate::workflow::RecipeRun;

/// Render `schedule` in the requested format.
pub fn render(title: &str, schedule: &Schedule, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(title, schedule)),
        OutputFormat::Timeline => Ok(render_timeline(title, schedule)),
        OutputFormat::Json => schedule.to_json(),
        OutputFormat::Records => {
            let run = RecipeRun::from_schedule(schedule.clone())?;
            Ok(serde_json::to_string_pretty(&run.records())?)
        }
    }
}

/// One row per step in step-number order.
pub fn render_table(title: &str, schedule: &Schedule) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{title}");
    let _ = writeln!(
        out,
        "  partial_slots = {}, steps = {}, makespan = {} min",
        schedule.partial_slots,
        schedule.len(),
        schedule.makespan()
    );
    for step in schedule.steps.iter() {
        write_row(&mut out, step.step_number, step);
    }
    out
}

/// Steps sorted by predicted start time.
pub fn render_timeline(title: &str, schedule: &Schedule) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{title} (timeline)");
    for step in schedule.timeline() {
        write_row(&mut out, step.step_number, step);
    }
    let _ = writeln!(out, "  done at {} min", schedule.makespan());
    out
}

fn write_row(out: &mut String, number: usize, step: &ScheduledStep) {
    let _ = write!(
        out,
        "  {:>3}. [{:>4} - {:>4}] {:<7} #{} {}",
        number,
        step.predicted_start_time,
        step.predicted_end_time,
        step.step_type().as_str(),
        step.id(),
        step.step.description
    );
    if !step.step.depends_on.is_empty() {
        let _ = write!(out, " (after {:?})", step.step.depends_on);
    }
    out.push('\n');
}

/// Dry-run output: the validated dependency order without times.
pub fn render_dry_run(title: &str, recipe: &RecipeFile) -> Result<String> {
    let graph = StepGraph::build(recipe.steps())?;
    let order = graph.topological_order()?;

    let mut out = String::new();
    let _ = writeln!(out, "cookdag dry-run: {title}");
    let _ = writeln!(out, "  config.partial_slots = {}", recipe.config().partial_slots);
    let _ = writeln!(out, "steps ({}):", graph.len());
    for (position, idx) in order.into_iter().enumerate() {
        let step = graph.step(idx);
        let _ = write!(
            out,
            "  {:>3}. #{} {} ({}, {} min)",
            position + 1,
            step.id,
            step.description,
            step.step_type,
            step.time_minutes
        );
        if !step.depends_on.is_empty() {
            let _ = write!(out, " after {:?}", step.depends_on);
        }
        out.push('\n');
    }
    Ok(out)
}
