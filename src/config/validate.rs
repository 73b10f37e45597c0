// src/config/validate.rs

use crate::config::model::{RawRecipeFile, RecipeFile};
use crate::dag::build_and_order;
use crate::dag::scheduler::validate_durations;
use crate::errors::{CookdagError, Result};

impl TryFrom<RawRecipeFile> for RecipeFile {
    type Error = CookdagError;

    fn try_from(raw: RawRecipeFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_recipe(&raw)?;
        Ok(RecipeFile::new_unchecked(raw.name, raw.config, raw.step))
    }
}

/// Run every check a recipe must pass before it can be planned.
pub fn validate_raw_recipe(recipe: &RawRecipeFile) -> Result<()> {
    ensure_has_steps(recipe)?;
    validate_global_config(recipe)?;
    validate_descriptions(recipe)?;
    validate_durations(&recipe.step)?;
    validate_dag(recipe)?;
    Ok(())
}

fn ensure_has_steps(recipe: &RawRecipeFile) -> Result<()> {
    if recipe.step.is_empty() {
        return Err(CookdagError::ConfigError(
            "recipe must contain at least one [[step]] entry".to_string(),
        ));
    }
    Ok(())
}

fn validate_global_config(recipe: &RawRecipeFile) -> Result<()> {
    if recipe.config.partial_slots == 0 {
        return Err(CookdagError::ConfigError(
            "[config].partial_slots must be >= 1 (got 0)".to_string(),
        ));
    }
    Ok(())
}

fn validate_descriptions(recipe: &RawRecipeFile) -> Result<()> {
    for step in recipe.step.iter() {
        if step.description.trim().is_empty() {
            return Err(CookdagError::ConfigError(format!(
                "step {} has an empty description",
                step.id
            )));
        }
    }
    Ok(())
}

/// Unknown references, duplicate ids and cycles surface as the same
/// [`crate::errors::ScheduleError`] the planner would raise.
fn validate_dag(recipe: &RawRecipeFile) -> Result<()> {
    build_and_order(&recipe.step)?;
    Ok(())
}
