// src/config/loader.rs

use std::path::{Path, PathBuf};

use crate::config::model::{JsonRecipe, RawRecipeFile, RecipeFile};
use crate::errors::Result;
use crate::fs::{FileSystem, RealFileSystem};

/// On-disk encoding of a recipe file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipeFormat {
    Toml,
    Json,
}

impl RecipeFormat {
    /// `.json` means JSON; anything else is treated as TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => RecipeFormat::Json,
            _ => RecipeFormat::Toml,
        }
    }
}

/// Deserialize recipe contents without semantic validation.
pub fn parse_recipe(contents: &str, format: RecipeFormat) -> Result<RawRecipeFile> {
    let raw = match format {
        RecipeFormat::Toml => toml::from_str(contents)?,
        RecipeFormat::Json => serde_json::from_str::<JsonRecipe>(contents)?.into(),
    };
    Ok(raw)
}

/// Load a recipe through `fs` and return the raw `RawRecipeFile`.
pub fn load_from_fs(fs: &dyn FileSystem, path: impl AsRef<Path>) -> Result<RawRecipeFile> {
    let path = path.as_ref();
    let contents = fs.read_to_string(path)?;
    parse_recipe(&contents, RecipeFormat::from_path(path))
}

/// Load a recipe file from disk and return the raw `RawRecipeFile`.
///
/// This only performs deserialization; it does **not** check references,
/// cycles or durations. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawRecipeFile> {
    load_from_fs(&RealFileSystem, path)
}

/// Load a recipe through `fs` and validate it.
pub fn load_and_validate_fs(fs: &dyn FileSystem, path: impl AsRef<Path>) -> Result<RecipeFile> {
    let raw = load_from_fs(fs, path)?;
    RecipeFile::try_from(raw)
}

/// Load a recipe file from disk and validate it.
///
/// This is the recommended entry point for the rest of the application:
///
/// - Reads TOML or JSON (by extension).
/// - Applies defaults (handled by `serde` + `Default` impls).
/// - Checks for:
///   - at least one step,
///   - `partial_slots >= 1`,
///   - positive durations and non-empty descriptions,
///   - unknown `depends_on` references, duplicate ids and cycles.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<RecipeFile> {
    load_and_validate_fs(&RealFileSystem, path)
}

/// Recipe path used when none is given on the command line.
pub fn default_recipe_path() -> PathBuf {
    PathBuf::from("Recipe.toml")
}
