// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod engine;
pub mod errors;
pub mod fs;
pub mod logging;
pub mod render;
pub mod types;
pub mod workflow;

use std::io::Write;

use anyhow::{Result, bail};
use tracing::{debug, error, info};

use crate::cli::CliArgs;
use crate::config::{RecipeFile, default_recipe_path, load_and_validate};
use crate::engine::{PlanJob, plan_concurrently};
use crate::render::{render, render_dry_run};

pub use crate::dag::{Schedule, ScheduledStep, Step, build_and_order, plan, schedule};
pub use crate::errors::{CookdagError, ScheduleError, WorkflowError};
pub use crate::types::{Minutes, StepId, StepType};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - recipe loading and validation
/// - concurrent planning of every recipe
/// - rendering in the requested format
///
/// Every recipe is reported, in argument order, even when some fail; the
/// returned error only summarises how many did.
pub async fn run(args: CliArgs) -> Result<()> {
    let mut stdout = std::io::stdout();
    run_to(args, &mut stdout).await
}

/// Same as [`run`], printing to `out` instead of stdout.
pub async fn run_to<W: Write>(args: CliArgs, out: &mut W) -> Result<()> {
    let paths: Vec<String> = if args.recipes.is_empty() {
        vec![default_recipe_path().display().to_string()]
    } else {
        args.recipes.clone()
    };

    let loaded: Vec<(String, errors::Result<RecipeFile>)> = paths
        .into_iter()
        .map(|path| {
            let recipe = load_and_validate(&path);
            (path, recipe)
        })
        .collect();

    let mut failures = 0usize;

    if args.dry_run {
        for (path, recipe) in loaded.iter() {
            match recipe.as_ref() {
                Ok(recipe) => write!(out, "{}", render_dry_run(&title_for(path, recipe), recipe)?)?,
                Err(err) => {
                    failures += 1;
                    report_failure(path, err);
                }
            }
        }
        debug!("dry-run complete (nothing scheduled)");
        return finish(failures);
    }

    let jobs: Vec<PlanJob> = loaded
        .iter()
        .filter_map(|(path, recipe)| recipe.as_ref().ok().map(|r| (path, r)))
        .map(|(path, recipe)| {
            let slots = args
                .partial_slots
                .unwrap_or(recipe.config().partial_slots);
            PlanJob::new(path.clone(), recipe.steps().to_vec(), slots)
        })
        .collect();

    info!(recipes = jobs.len(), "planning recipes");
    let mut outcomes = plan_concurrently(jobs).await.into_iter();

    for (path, recipe) in loaded.iter() {
        let recipe = match recipe {
            Ok(recipe) => recipe,
            Err(err) => {
                failures += 1;
                report_failure(path, err);
                continue;
            }
        };

        let Some(outcome) = outcomes.next() else {
            bail!("planner returned fewer outcomes than recipes");
        };

        match outcome.result {
            Ok(schedule) => {
                let text = render(&title_for(path, recipe), &schedule, args.format)?;
                writeln!(out, "{}", text.trim_end())?;
            }
            Err(err) => {
                failures += 1;
                report_failure(path, &err);
            }
        }
    }

    finish(failures)
}

fn title_for(path: &str, recipe: &RecipeFile) -> String {
    match recipe.name() {
        Some(name) => format!("{name} ({path})"),
        None => path.to_string(),
    }
}

fn report_failure(path: &str, err: &CookdagError) {
    error!(recipe = %path, error = %err, "recipe could not be planned");
}

fn finish(failures: usize) -> Result<()> {
    if failures > 0 {
        bail!("{failures} recipe(s) could not be planned");
    }
    Ok(())
}
