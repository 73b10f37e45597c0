// src/config/mod.rs

//! Recipe file loading and validation for cookdag.
//!
//! Responsibilities:
//! - Define the TOML/JSON-backed data model (`model.rs`).
//! - Load a recipe file through the [`crate::fs`] abstraction (`loader.rs`).
//! - Validate durations, references and acyclicity (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{
    RecipeFormat, default_recipe_path, load_and_validate, load_and_validate_fs, load_from_fs,
    load_from_path, parse_recipe,
};
pub use model::{ConfigSection, JsonRecipe, RawRecipeFile, RecipeFile};
pub use validate::validate_raw_recipe;
