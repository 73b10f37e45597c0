// src/workflow/mod.rs

//! Step status tracking on top of a computed [`crate::dag::Schedule`].
//!
//! - [`status`] defines [`StepStatus`] and the [`StepRecord`] persistence row.
//! - [`run`] holds [`RecipeRun`], the in-memory state machine that moves a
//!   recipe from its first actionable step to completion.

pub mod run;
pub mod status;

pub use run::RecipeRun;
pub use status::{StepRecord, StepStatus};
