#![allow(dead_code)]

use cookdag::config::{ConfigSection, RawRecipeFile, RecipeFile};
use cookdag::{Minutes, Step, StepId, StepType};

/// Builder for `RecipeFile` to simplify test setup.
pub struct RecipeBuilder {
    recipe: RawRecipeFile,
}

impl RecipeBuilder {
    pub fn new() -> Self {
        Self {
            recipe: RawRecipeFile {
                name: None,
                config: ConfigSection::default(),
                step: Vec::new(),
            },
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.recipe.name = Some(name.to_string());
        self
    }

    pub fn partial_slots(mut self, slots: usize) -> Self {
        self.recipe.config.partial_slots = slots;
        self
    }

    pub fn with_step(mut self, step: Step) -> Self {
        self.recipe.step.push(step);
        self
    }

    pub fn raw(self) -> RawRecipeFile {
        self.recipe
    }

    pub fn steps(self) -> Vec<Step> {
        self.recipe.step
    }

    pub fn build(self) -> RecipeFile {
        RecipeFile::try_from(self.recipe).expect("Failed to build valid recipe from builder")
    }
}

impl Default for RecipeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `Step`. Defaults to a 1-minute active step with no deps.
pub struct StepBuilder {
    step: Step,
}

impl StepBuilder {
    pub fn new(id: StepId) -> Self {
        Self {
            step: Step {
                id,
                description: format!("step {id}"),
                time_minutes: 1,
                step_type: StepType::Active,
                depends_on: vec![],
            },
        }
    }

    pub fn active(id: StepId, time_minutes: Minutes) -> Self {
        Self::new(id).minutes(time_minutes)
    }

    pub fn partial(id: StepId, time_minutes: Minutes) -> Self {
        Self::new(id).minutes(time_minutes).kind(StepType::Partial)
    }

    pub fn passive(id: StepId, time_minutes: Minutes) -> Self {
        Self::new(id).minutes(time_minutes).kind(StepType::Passive)
    }

    pub fn description(mut self, description: &str) -> Self {
        self.step.description = description.to_string();
        self
    }

    pub fn minutes(mut self, time_minutes: Minutes) -> Self {
        self.step.time_minutes = time_minutes;
        self
    }

    pub fn kind(mut self, step_type: StepType) -> Self {
        self.step.step_type = step_type;
        self
    }

    pub fn after(mut self, dep: StepId) -> Self {
        self.step.depends_on.push(dep);
        self
    }

    pub fn build(self) -> Step {
        self.step
    }
}
