// src/config/model.rs

use serde::Deserialize;

use crate::dag::{Schedule, Step, plan};
use crate::errors::Result;
use crate::types::DEFAULT_PARTIAL_SLOTS;

/// Recipe file as read from TOML (or JSON), before validation.
///
/// ```toml
/// name = "Beef bourguignon"
///
/// [config]
/// partial_slots = 2
///
/// [[step]]
/// id = 1
/// description = "Chop onion for marinade"
/// time_minutes = 5
/// step_type = "active"
///
/// [[step]]
/// id = 2
/// description = "Marinate beef"
/// time_minutes = 240
/// step_type = "passive"
/// depends_on = [1]
/// ```
///
/// All sections are optional at the serde level; [`RecipeFile::try_from`]
/// enforces that at least one step exists.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawRecipeFile {
    /// Human-readable recipe name.
    #[serde(default)]
    pub name: Option<String>,

    /// Planning parameters from `[config]`.
    #[serde(default)]
    pub config: ConfigSection,

    /// All steps from `[[step]]`, in input order.
    #[serde(default)]
    pub step: Vec<Step>,
}

/// JSON recipes come either in the full layout or as the bare step array a
/// step generator emits.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum JsonRecipe {
    Steps(Vec<Step>),
    File(RawRecipeFile),
}

impl From<JsonRecipe> for RawRecipeFile {
    fn from(json: JsonRecipe) -> Self {
        match json {
            JsonRecipe::Steps(step) => RawRecipeFile {
                step,
                ..RawRecipeFile::default()
            },
            JsonRecipe::File(raw) => raw,
        }
    }
}

/// `[config]` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ConfigSection {
    /// How many partial-attention steps may run at once (e.g. burners).
    #[serde(default = "default_partial_slots")]
    pub partial_slots: usize,
}

fn default_partial_slots() -> usize {
    DEFAULT_PARTIAL_SLOTS
}

impl Default for ConfigSection {
    fn default() -> Self {
        Self {
            partial_slots: default_partial_slots(),
        }
    }
}

/// A validated recipe: steps reference each other correctly, form a DAG and
/// carry positive durations.
#[derive(Debug, Clone)]
pub struct RecipeFile {
    name: Option<String>,
    config: ConfigSection,
    steps: Vec<Step>,
}

impl RecipeFile {
    /// Construct without validation. Only the `TryFrom<RawRecipeFile>`
    /// conversion should call this.
    pub(crate) fn new_unchecked(name: Option<String>, config: ConfigSection, steps: Vec<Step>) -> Self {
        Self {
            name,
            config,
            steps,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn config(&self) -> &ConfigSection {
        &self.config
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Plan the recipe, optionally overriding `[config].partial_slots`.
    pub fn plan(&self, partial_slots: Option<usize>) -> Result<Schedule> {
        let slots = partial_slots.unwrap_or(self.config.partial_slots);
        Ok(plan(&self.steps, slots)?)
    }
}
